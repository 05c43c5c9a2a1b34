use super::{json_pretty, read_sum, EXIT_SUCCESS};
use crate::error::CliError;
use std::path::Path;

pub fn run(path: &Path, json: bool) -> Result<u8, CliError> {
    let sum = read_sum(path)?;
    let entries = sum.live_len();
    let modules = sum.modules().len();

    if json {
        let payload = serde_json::json!({
            "file": path,
            "status": "ok",
            "entries": entries,
            "modules": modules,
        });
        println!("{}", json_pretty(&payload)?);
    } else {
        println!(
            "{}: ok ({entries} entries, {modules} module versions)",
            path.display()
        );
    }
    Ok(EXIT_SUCCESS)
}
