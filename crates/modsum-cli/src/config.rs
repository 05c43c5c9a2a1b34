use crate::error::CliError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings read from `~/.config/modsum/config.json` (or `$MODSUM_CONFIG`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Sum file used when a command is given no path.
    pub default_file: PathBuf,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_file: PathBuf::from("go.sum"),
        }
    }
}

impl CliConfig {
    /// Load the user config, falling back to defaults when none exists.
    pub fn load_default() -> Result<Self, CliError> {
        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| CliError::Config(format!("invalid config {}: {e}", path.display())))?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}

fn default_config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os("MODSUM_CONFIG") {
        return Some(PathBuf::from(explicit));
    }
    let home = std::env::var_os("HOME")?;
    Some(PathBuf::from(home).join(".config/modsum/config.json"))
}
