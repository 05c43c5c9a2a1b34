use crate::entry::HashEntry;
use crate::types::ModuleVersion;
use std::fmt;
use tracing::{debug, trace};

/// The parsed, editable form of a `go.sum` file.
///
/// Entries stay in insertion order. Dropped entries are tombstoned in place
/// and only leave the backing sequence on [`SumFile::cleanup`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SumFile {
    hashes: Vec<HashEntry>,
}

impl SumFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// The backing sequence, tombstoned entries included.
    pub fn hashes(&self) -> &[HashEntry] {
        &self.hashes
    }

    pub(crate) fn push(&mut self, entry: HashEntry) {
        self.hashes.push(entry);
    }

    /// Length of the backing sequence, tombstoned entries included.
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn live_len(&self) -> usize {
        self.live().count()
    }

    /// True when no live entry remains.
    pub fn is_empty(&self) -> bool {
        self.live().next().is_none()
    }

    pub fn live(&self) -> impl Iterator<Item = &HashEntry> {
        self.hashes.iter().filter(|h| h.is_live())
    }

    /// Add a hash entry unless an identical live one (same path, version,
    /// go.mod flag and hash) already exists.
    pub fn add_hash(&mut self, module: ModuleVersion, go_mod: bool, hash: impl Into<String>) {
        let hash = hash.into();
        if self.contains(&module, go_mod, &hash) {
            trace!("add {module} (go_mod={go_mod}): {hash} already present");
            return;
        }
        trace!("add {module} (go_mod={go_mod}): {hash}");
        self.hashes.push(HashEntry::new(module, go_mod, hash));
    }

    /// Drop the `/go.mod` hashes of `module` when `go_mod` is set, its zip
    /// hashes otherwise.
    pub fn drop_hash(&mut self, module: &ModuleVersion, go_mod: bool) {
        let mut dropped = 0;
        for h in &mut self.hashes {
            if h.is_live() && h.is_variant(module, go_mod) {
                h.tombstone();
                dropped += 1;
            }
        }
        trace!("drop {module} (go_mod={go_mod}): {dropped} entries");
    }

    /// Drop every hash of `module`, zip and `/go.mod` alike.
    pub fn drop_all(&mut self, module: &ModuleVersion) {
        let mut dropped = 0;
        for h in &mut self.hashes {
            if h.is_live() && h.module() == module {
                h.tombstone();
                dropped += 1;
            }
        }
        trace!("drop {module} (all): {dropped} entries");
    }

    /// Remove tombstoned entries, keeping the relative order of the rest.
    pub fn cleanup(&mut self) {
        let before = self.hashes.len();
        self.hashes.retain(HashEntry::is_live);
        let removed = before - self.hashes.len();
        if removed > 0 {
            debug!("cleanup removed {removed} dropped entries");
        }
    }

    /// Live hashes pinned for `module` and the given variant, in file order.
    pub fn lookup<'a>(
        &'a self,
        module: &'a ModuleVersion,
        go_mod: bool,
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.live()
            .filter(move |h| h.is_variant(module, go_mod))
            .map(HashEntry::hash)
    }

    pub fn contains(&self, module: &ModuleVersion, go_mod: bool, hash: &str) -> bool {
        self.live().any(|h| h.matches(module, go_mod, hash))
    }

    /// Distinct live module versions in first-seen order.
    pub fn modules(&self) -> Vec<&ModuleVersion> {
        let mut seen: Vec<&ModuleVersion> = Vec::new();
        for h in self.live() {
            if !seen.contains(&h.module()) {
                seen.push(h.module());
            }
        }
        seen
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        format_sum(self)
    }
}

impl fmt::Display for SumFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for h in self.live() {
            writeln!(f, "{} {} {}", h.module().path, h.version_field(), h.hash())?;
        }
        Ok(())
    }
}

/// Render the live entries in canonical form, one `path version hash` line
/// each. An empty file renders as zero bytes.
pub fn format_sum(sum: &SumFile) -> Vec<u8> {
    sum.to_string().into_bytes()
}
