use crate::types::ModuleVersion;
use serde::Serialize;

/// Version suffix marking a hash of the module's `go.mod` file rather than
/// its zip archive.
pub const GO_MOD_SUFFIX: &str = "/go.mod";

/// Raw tokens of a source line, kept for diagnostics and reconstruction.
///
/// Never consulted for equality or lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SumLine {
    pub path: String,
    /// Version token as written, including any `/go.mod` suffix.
    pub version: String,
    pub hash: String,
    offset: Option<usize>,
}

impl SumLine {
    /// Byte offset of the line start in the parsed file, or `None` for an
    /// entry added after parsing.
    pub fn offset(&self) -> Option<usize> {
        self.offset
    }

    pub fn is_synthetic(&self) -> bool {
        self.offset.is_none()
    }
}

/// One hash record of a sum file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashEntry {
    module: ModuleVersion,
    hash: String,
    go_mod: bool,
    #[serde(skip)]
    syntax: SumLine,
    #[serde(skip)]
    live: bool,
}

impl HashEntry {
    /// Build an entry that did not come from a source line.
    pub fn new(module: ModuleVersion, go_mod: bool, hash: impl Into<String>) -> Self {
        let hash = hash.into();
        let syntax = SumLine {
            path: module.path.clone(),
            version: suffixed_version(&module.version, go_mod),
            hash: hash.clone(),
            offset: None,
        };
        Self {
            module,
            hash,
            go_mod,
            syntax,
            live: true,
        }
    }

    /// Interpret the three fields of a source line starting at `offset`.
    pub(crate) fn from_fields(path: &str, version: &str, hash: &str, offset: usize) -> Self {
        let (bare, go_mod) = match version.strip_suffix(GO_MOD_SUFFIX) {
            Some(bare) => (bare, true),
            None => (version, false),
        };
        Self {
            module: ModuleVersion::new(path, bare),
            hash: hash.to_owned(),
            go_mod,
            syntax: SumLine {
                path: path.to_owned(),
                version: version.to_owned(),
                hash: hash.to_owned(),
                offset: Some(offset),
            },
            live: true,
        }
    }

    pub fn module(&self) -> &ModuleVersion {
        &self.module
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// True for a `/go.mod` hash; `module().version` never carries the suffix.
    pub fn go_mod(&self) -> bool {
        self.go_mod
    }

    pub fn syntax(&self) -> &SumLine {
        &self.syntax
    }

    /// False once the entry has been dropped; `SumFile::cleanup` removes it.
    pub fn is_live(&self) -> bool {
        self.live
    }

    pub(crate) fn tombstone(&mut self) {
        self.live = false;
    }

    /// The version field as it appears in canonical output.
    pub fn version_field(&self) -> String {
        suffixed_version(&self.module.version, self.go_mod)
    }

    pub(crate) fn is_variant(&self, module: &ModuleVersion, go_mod: bool) -> bool {
        self.module == *module && self.go_mod == go_mod
    }

    pub(crate) fn matches(&self, module: &ModuleVersion, go_mod: bool, hash: &str) -> bool {
        self.is_variant(module, go_mod) && self.hash == hash
    }
}

fn suffixed_version(version: &str, go_mod: bool) -> String {
    if go_mod {
        format!("{version}{GO_MOD_SUFFIX}")
    } else {
        version.to_owned()
    }
}
