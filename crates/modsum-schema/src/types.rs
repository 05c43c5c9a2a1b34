use serde::{Deserialize, Serialize};
use std::fmt;

/// A specific published version of a module.
///
/// Equality is exact on both fields: no case folding, no normalization.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ModuleVersion {
    pub path: String,
    pub version: String,
}

impl ModuleVersion {
    pub fn new(path: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for ModuleVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.path, self.version)
    }
}

impl<P: Into<String>, V: Into<String>> From<(P, V)> for ModuleVersion {
    fn from((path, version): (P, V)) -> Self {
        Self::new(path, version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_with_at() {
        let m = ModuleVersion::new("golang.org/x/text", "v0.3.0");
        assert_eq!(m.to_string(), "golang.org/x/text@v0.3.0");
    }

    #[test]
    fn equality_is_case_sensitive() {
        let a = ModuleVersion::new("github.com/Foo/bar", "v1.0.0");
        let b = ModuleVersion::new("github.com/foo/bar", "v1.0.0");
        assert_ne!(a, b);
        assert_eq!(a, ModuleVersion::from(("github.com/Foo/bar", "v1.0.0")));
    }

    #[test]
    fn serde_roundtrip() {
        let m = ModuleVersion::new("rsc.io/quote", "v1.5.2");
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"path":"rsc.io/quote","version":"v1.5.2"}"#);
        let back: ModuleVersion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
