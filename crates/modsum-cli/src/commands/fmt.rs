use super::{json_pretty, label, read_bytes, write_atomic, EXIT_FAILURE, EXIT_SUCCESS};
use crate::error::CliError;
use modsum_schema::{format_sum, parse_sum};
use std::path::Path;

pub fn run(path: &Path, check: bool, json: bool) -> Result<u8, CliError> {
    let data = read_bytes(path)?;
    let sum = parse_sum(&label(path), &data)?;
    let formatted = format_sum(&sum);
    let changed = formatted != data;

    if check {
        if json {
            let payload = serde_json::json!({
                "file": path,
                "formatted": !changed,
            });
            println!("{}", json_pretty(&payload)?);
        } else if changed {
            eprintln!("{} is not canonically formatted (run 'modsum fmt')", path.display());
        }
        return Ok(if changed { EXIT_FAILURE } else { EXIT_SUCCESS });
    }

    if changed {
        write_atomic(path, &formatted)?;
    }

    if json {
        let payload = serde_json::json!({
            "file": path,
            "changed": changed,
            "entries": sum.live_len(),
        });
        println!("{}", json_pretty(&payload)?);
    } else if changed {
        println!("formatted {}", path.display());
    }

    Ok(EXIT_SUCCESS)
}
