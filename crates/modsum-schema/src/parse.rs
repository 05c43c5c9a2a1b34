use crate::entry::HashEntry;
use crate::error::{Error, ErrorKind, ErrorList, Position};
use crate::sumfile::SumFile;
use tracing::debug;

/// Parse the content of a `go.sum` file.
///
/// `file` labels diagnostics only. Blank lines are ignored; every other line
/// must hold exactly three whitespace-separated fields. All malformed lines
/// are reported together and no `SumFile` is returned if there is any. A line
/// that is not valid UTF-8 counts as malformed.
pub fn parse_sum(file: &str, data: &[u8]) -> Result<SumFile, ErrorList> {
    let mut sum = SumFile::default();
    let mut errors = ErrorList::default();

    let mut offset = 0;
    for (index, raw) in data.split(|&b| b == b'\n').enumerate() {
        let line_offset = offset;
        offset += raw.len() + 1;

        let malformed = |text: &str| Error {
            filename: file.to_owned(),
            pos: Position {
                line: index + 1,
                line_rune: 1,
                byte: line_offset,
            },
            kind: ErrorKind::MalformedLine(text.to_owned()),
        };

        // Tokens must survive formatting byte for byte, so a line that is
        // not UTF-8 is rejected rather than decoded lossily.
        let Ok(text) = std::str::from_utf8(raw) else {
            errors.push(malformed(String::from_utf8_lossy(raw).trim()));
            continue;
        };
        let line = text.trim();
        if line.is_empty() {
            continue;
        }

        match split_fields(line) {
            Some((path, version, hash)) => {
                sum.push(HashEntry::from_fields(path, version, hash, line_offset));
            }
            None => errors.push(malformed(line)),
        }
    }

    if !errors.is_empty() {
        debug!("{file}: {} malformed line(s)", errors.len());
        return Err(errors);
    }
    debug!("parsed {file}: {} entries", sum.len());
    Ok(sum)
}

pub fn parse_sum_str(file: &str, text: &str) -> Result<SumFile, ErrorList> {
    parse_sum(file, text.as_bytes())
}

/// Split a trimmed line into module path, version, and hash.
fn split_fields(line: &str) -> Option<(&str, &str, &str)> {
    let mut fields = line.split_whitespace();
    let path = fields.next()?;
    let version = fields.next()?;
    let hash = fields.next()?;
    if fields.next().is_some() {
        return None;
    }
    Some((path, version, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ModuleVersion;

    fn module(path: &str, version: &str) -> ModuleVersion {
        ModuleVersion::new(path, version)
    }

    #[test]
    fn empty_input() {
        let sum = parse_sum("go.sum", b"").unwrap();
        assert_eq!(sum.len(), 0);
    }

    #[test]
    fn whitespace_only_input() {
        let sum = parse_sum("go.sum", b"  \n\t\n   \n").unwrap();
        assert!(sum.is_empty());
        assert_eq!(sum.len(), 0);
    }

    #[test]
    fn single_zip_hash() {
        let sum = parse_sum("go.sum", b"golang.org/x/text v0.3.0 h1:abc123=\n").unwrap();
        assert_eq!(sum.len(), 1);
        let h = &sum.hashes()[0];
        assert_eq!(*h.module(), module("golang.org/x/text", "v0.3.0"));
        assert_eq!(h.hash(), "h1:abc123=");
        assert!(!h.go_mod());
    }

    #[test]
    fn single_go_mod_hash() {
        let sum = parse_sum("go.sum", b"golang.org/x/text v0.3.0/go.mod h1:abc123=\n").unwrap();
        let h = &sum.hashes()[0];
        assert_eq!(*h.module(), module("golang.org/x/text", "v0.3.0"));
        assert!(h.go_mod());
        assert_eq!(h.syntax().version, "v0.3.0/go.mod");
    }

    #[test]
    fn multiple_entries_keep_order() {
        let input = "golang.org/x/text v0.3.0 h1:abc123=\n\
                     golang.org/x/text v0.3.0/go.mod h1:def456=\n\
                     rsc.io/quote v1.5.2 h1:ghi789=\n\
                     rsc.io/quote v1.5.2/go.mod h1:jkl012=\n";
        let sum = parse_sum_str("go.sum", input).unwrap();
        let got: Vec<_> = sum
            .hashes()
            .iter()
            .map(|h| (h.module().path.as_str(), h.hash(), h.go_mod()))
            .collect();
        assert_eq!(
            got,
            vec![
                ("golang.org/x/text", "h1:abc123=", false),
                ("golang.org/x/text", "h1:def456=", true),
                ("rsc.io/quote", "h1:ghi789=", false),
                ("rsc.io/quote", "h1:jkl012=", true),
            ]
        );
    }

    #[test]
    fn blank_lines_ignored() {
        let input = "\ngolang.org/x/text v0.3.0 h1:abc123=\n\nrsc.io/quote v1.5.2 h1:ghi789=\n\n";
        let sum = parse_sum_str("go.sum", input).unwrap();
        assert_eq!(sum.len(), 2);
        assert_eq!(sum.hashes()[0].hash(), "h1:abc123=");
        assert_eq!(sum.hashes()[1].module().path, "rsc.io/quote");
    }

    #[test]
    fn no_trailing_newline() {
        let with = parse_sum_str("go.sum", "golang.org/x/text v0.3.0 h1:abc123=\n").unwrap();
        let without = parse_sum_str("go.sum", "golang.org/x/text v0.3.0 h1:abc123=").unwrap();
        assert_eq!(with.hashes()[0].module(), without.hashes()[0].module());
        assert_eq!(without.len(), 1);
    }

    #[test]
    fn extra_whitespace_between_fields() {
        let sum = parse_sum_str("go.sum", "  rsc.io/quote \t v1.5.2   h1:ghi789=  \r\n").unwrap();
        let h = &sum.hashes()[0];
        assert_eq!(*h.module(), module("rsc.io/quote", "v1.5.2"));
        assert_eq!(h.hash(), "h1:ghi789=");
    }

    #[test]
    fn records_line_offsets() {
        let input = "a v1 h1:x=\n\nb v2 h1:y=\n";
        let sum = parse_sum_str("go.sum", input).unwrap();
        assert_eq!(sum.hashes()[0].syntax().offset(), Some(0));
        assert_eq!(sum.hashes()[1].syntax().offset(), Some(12));
    }

    #[test]
    fn too_few_fields() {
        let err = parse_sum_str("go.sum", "golang.org/x/text v0.3.0\n").unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(
            err[0].kind,
            ErrorKind::MalformedLine("golang.org/x/text v0.3.0".to_owned())
        );
    }

    #[test]
    fn single_field() {
        let err = parse_sum_str("go.sum", "golang.org/x/text\n").unwrap_err();
        assert_eq!(err.len(), 1);
    }

    #[test]
    fn too_many_fields() {
        let err = parse_sum_str("go.sum", "golang.org/x/text v0.3.0 h1:abc123= extra\n").unwrap_err();
        assert_eq!(err.len(), 1);
    }

    #[test]
    fn all_malformed_lines_reported() {
        let input = "a v1 h1:x=\nbroken\nb v2 h1:y=\n\n  c v3 h1:z= d  \n";
        let err = parse_sum_str("deps/go.sum", input).unwrap_err();
        assert_eq!(err.len(), 2);

        assert_eq!(err[0].filename, "deps/go.sum");
        assert_eq!(
            err[0].pos,
            Position {
                line: 2,
                line_rune: 1,
                byte: 11,
            }
        );
        assert_eq!(err[1].pos.line, 5);
        assert_eq!(err[1].pos.byte, 30);

        let msg = err.to_string();
        assert!(msg.contains("deps/go.sum:2: malformed go.sum line: broken"));
        assert!(msg.contains("deps/go.sum:5: malformed go.sum line: c v3 h1:z= d"));
    }

    #[test]
    fn invalid_utf8_line_is_malformed() {
        let input = b"a v1 h1:x=\nexample.com/m v1.0.0 h1:\xffab=\n";
        let err = parse_sum("go.sum", input).unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err[0].pos.line, 2);
        assert_eq!(err[0].pos.byte, 11);
        assert_eq!(
            err[0].kind,
            ErrorKind::MalformedLine("example.com/m v1.0.0 h1:\u{fffd}ab=".to_owned())
        );
    }

    #[test]
    fn split_fields_counts() {
        assert_eq!(split_fields("a b c"), Some(("a", "b", "c")));
        assert_eq!(split_fields("a b"), None);
        assert_eq!(split_fields("a b c d"), None);
    }
}
