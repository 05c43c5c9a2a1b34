use super::{json_pretty, read_sum_or_empty, require_field, write_atomic, EXIT_SUCCESS};
use crate::error::CliError;
use modsum_schema::{ModuleVersion, GO_MOD_SUFFIX};
use std::path::Path;

/// Split a trailing `/go.mod` off a version argument.
pub fn split_version(version: &str, go_mod: bool) -> (&str, bool) {
    match version.strip_suffix(GO_MOD_SUFFIX) {
        Some(bare) => (bare, true),
        None => (version, go_mod),
    }
}

pub fn run(
    path: &Path,
    module_path: &str,
    version: &str,
    hash: &str,
    go_mod: bool,
    json: bool,
) -> Result<u8, CliError> {
    require_field("module path", module_path)?;
    require_field("version", version)?;
    require_field("hash", hash)?;
    let (version, go_mod) = split_version(version, go_mod);
    require_field("version", version)?;

    let mut sum = read_sum_or_empty(path)?;
    let module = ModuleVersion::new(module_path, version);
    let before = sum.len();
    sum.add_hash(module.clone(), go_mod, hash);
    let added = sum.len() > before;

    if added {
        write_atomic(path, &sum.to_bytes())?;
    } else {
        tracing::debug!("{module} already pinned to {hash}");
    }

    if json {
        let payload = serde_json::json!({
            "file": path,
            "module": module,
            "go_mod": go_mod,
            "hash": hash,
            "added": added,
        });
        println!("{}", json_pretty(&payload)?);
    } else if added {
        println!("added {module}{} {hash}", if go_mod { GO_MOD_SUFFIX } else { "" });
    } else {
        println!("{module} already has {hash}");
    }
    Ok(EXIT_SUCCESS)
}
