//! Parsing, editing, and canonical formatting of `go.sum` checksum manifests.
//!
//! This crate is the I/O-free core: raw bytes plus a file label go in
//! (`parse_sum`), an ordered, editable [`SumFile`] comes out, and
//! [`format_sum`] turns it back into canonical bytes. Removal is two-phase:
//! `drop_hash` / `drop_all` tombstone entries, `cleanup` compacts them away.

pub mod entry;
pub mod error;
pub mod parse;
pub mod sumfile;
pub mod types;

pub use entry::{HashEntry, SumLine, GO_MOD_SUFFIX};
pub use error::{Error, ErrorKind, ErrorList, Position};
pub use parse::{parse_sum, parse_sum_str};
pub use sumfile::{format_sum, SumFile};
pub use types::ModuleVersion;
