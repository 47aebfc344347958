//! Source locations.
//!
//! A [`Span`] points at a file relative to the project root, optionally
//! at a specific line.

use std::path::PathBuf;

/// A location in the inspected project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// File path, relative to the project root.
    pub file: PathBuf,
    /// 1-indexed line, when known.
    pub line: Option<usize>,
}

impl Span {
    /// A span covering a whole file.
    pub fn file(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            line: None,
        }
    }

    /// A span covering a single line.
    pub fn line(file: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            file: file.into(),
            line: Some(line),
        }
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.file.display(), line),
            None => write!(f, "{}", self.file.display()),
        }
    }
}
