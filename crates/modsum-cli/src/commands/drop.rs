use super::add::split_version;
use super::{json_pretty, read_sum, require_field, write_atomic, EXIT_SUCCESS};
use crate::error::CliError;
use modsum_schema::ModuleVersion;
use std::path::Path;

/// Which hashes of a module version to remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    Zip,
    GoMod,
    All,
}

impl DropTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            DropTarget::Zip => "zip",
            DropTarget::GoMod => "go.mod",
            DropTarget::All => "all",
        }
    }
}

pub fn run(
    path: &Path,
    module_path: &str,
    version: &str,
    target: DropTarget,
    json: bool,
) -> Result<u8, CliError> {
    require_field("module path", module_path)?;
    require_field("version", version)?;
    let (version, suffixed) = split_version(version, false);
    let target = match (target, suffixed) {
        (DropTarget::Zip, true) => DropTarget::GoMod,
        (t, _) => t,
    };

    let mut sum = read_sum(path)?;
    let module = ModuleVersion::new(module_path, version);
    let before = sum.live_len();
    match target {
        DropTarget::Zip => sum.drop_hash(&module, false),
        DropTarget::GoMod => sum.drop_hash(&module, true),
        DropTarget::All => sum.drop_all(&module),
    }
    let removed = before - sum.live_len();
    sum.cleanup();

    if removed > 0 {
        write_atomic(path, &sum.to_bytes())?;
    }

    if json {
        let payload = serde_json::json!({
            "file": path,
            "module": module,
            "target": target.as_str(),
            "removed": removed,
        });
        println!("{}", json_pretty(&payload)?);
    } else if removed > 0 {
        println!("removed {removed} {} hash(es) of {module}", target.as_str());
    } else {
        println!("no {} hashes of {module} in {}", target.as_str(), path.display());
    }
    Ok(EXIT_SUCCESS)
}
