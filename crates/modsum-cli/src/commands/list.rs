use super::{json_pretty, read_sum, EXIT_SUCCESS};
use crate::error::CliError;
use modsum_schema::HashEntry;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct ListEntry<'a> {
    path: &'a str,
    version: &'a str,
    kind: &'static str,
    hash: &'a str,
}

impl<'a> From<&'a HashEntry> for ListEntry<'a> {
    fn from(h: &'a HashEntry) -> Self {
        Self {
            path: &h.module().path,
            version: &h.module().version,
            kind: if h.go_mod() { "go.mod" } else { "zip" },
            hash: h.hash(),
        }
    }
}

pub fn run(path: &Path, json: bool) -> Result<u8, CliError> {
    let sum = read_sum(path)?;
    let entries: Vec<ListEntry<'_>> = sum.live().map(ListEntry::from).collect();

    if json {
        println!("{}", json_pretty(&entries)?);
    } else if entries.is_empty() {
        println!("no entries in {}", path.display());
    } else {
        let width = entries.iter().map(|e| e.path.len()).max().unwrap_or(0);
        for e in &entries {
            println!("{:<width$}  {}  {:<6}  {}", e.path, e.version, e.kind, e.hash);
        }
    }
    Ok(EXIT_SUCCESS)
}
