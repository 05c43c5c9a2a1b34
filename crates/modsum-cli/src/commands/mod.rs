pub mod add;
pub mod completions;
pub mod drop;
pub mod fmt;
pub mod list;
pub mod verify;

use crate::error::CliError;
use modsum_schema::{parse_sum, SumFile};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_PARSE_ERROR: u8 = 2;

pub fn json_pretty(value: &impl serde::Serialize) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn read_bytes(path: &Path) -> Result<Vec<u8>, CliError> {
    std::fs::read(path).map_err(|e| CliError::io(path, e))
}

pub fn label(path: &Path) -> String {
    path.display().to_string()
}

pub fn read_sum(path: &Path) -> Result<SumFile, CliError> {
    let data = read_bytes(path)?;
    Ok(parse_sum(&label(path), &data)?)
}

/// Like [`read_sum`], but a missing file reads as an empty sum file.
pub fn read_sum_or_empty(path: &Path) -> Result<SumFile, CliError> {
    match std::fs::read(path) {
        Ok(data) => Ok(parse_sum(&label(path), &data)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("{} does not exist, starting empty", path.display());
            Ok(SumFile::new())
        }
        Err(e) => Err(CliError::io(path, e)),
    }
}

/// Replace `dest` with `content` via a synced temp file in the same directory.
pub fn write_atomic(dest: &Path, content: &[u8]) -> Result<(), CliError> {
    let dir = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| CliError::io(&dir, e))?;
    tmp.write_all(content).map_err(|e| CliError::io(tmp.path(), e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| CliError::io(tmp.path(), e))?;
    tmp.persist(dest).map_err(|e| CliError::io(dest, e.error))?;
    tracing::debug!("wrote {} ({} bytes)", dest.display(), content.len());
    Ok(())
}

/// Check that a command-line token can be written as one sum file field.
pub fn require_field(name: &str, value: &str) -> Result<(), CliError> {
    if value.is_empty() {
        return Err(CliError::Usage(format!("{name} must not be empty")));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(CliError::Usage(format!(
            "{name} must not contain whitespace: '{value}'"
        )));
    }
    Ok(())
}
