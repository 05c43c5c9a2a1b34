use std::fmt::Write;
use std::ops::Deref;

/// Location of a diagnostic in the source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column in runes; parse errors always report 1.
    pub line_rune: usize,
    /// Byte offset of the line start.
    pub byte: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    #[error("malformed go.sum line: {0}")]
    MalformedLine(String),
}

/// A single diagnostic tagged with the file label and position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}{}", location(.filename, .pos), .kind)]
pub struct Error {
    pub filename: String,
    pub pos: Position,
    pub kind: ErrorKind,
}

fn location(filename: &str, pos: &Position) -> String {
    if pos.line_rune > 1 {
        format!("{filename}:{}:{}: ", pos.line, pos.line_rune)
    } else if pos.line > 0 {
        format!("{filename}:{}: ", pos.line)
    } else if !filename.is_empty() {
        format!("{filename}: ")
    } else {
        String::new()
    }
}

/// Every diagnostic produced by one parse, in line order.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{}", join_lines(.0))]
pub struct ErrorList(Vec<Error>);

fn join_lines(errors: &[Error]) -> String {
    let mut out = String::new();
    for (i, e) in errors.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = write!(out, "{e}");
    }
    out
}

impl ErrorList {
    pub(crate) fn push(&mut self, error: Error) {
        self.0.push(error);
    }

    pub fn into_inner(self) -> Vec<Error> {
        self.0
    }
}

impl Deref for ErrorList {
    type Target = [Error];
    fn deref(&self) -> &[Error] {
        &self.0
    }
}

impl From<Vec<Error>> for ErrorList {
    fn from(errors: Vec<Error>) -> Self {
        Self(errors)
    }
}

impl IntoIterator for ErrorList {
    type Item = Error;
    type IntoIter = std::vec::IntoIter<Error>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a Error;
    type IntoIter = std::slice::Iter<'a, Error>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
