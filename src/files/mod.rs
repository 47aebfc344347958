//! Reading the inspected project from disk.
//!
//! - [`discover`] - recursive source file discovery
//! - [`aggregate`] - manifest existence checks and corpus concatenation
//!
//! Every file is read fully into memory with a single blocking call; a
//! file is either present and readable, absent, or a fatal error.

pub mod aggregate;
pub mod discover;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AuditError, Result};

pub use aggregate::{aggregate, missing_paths, read_optional, Aggregate};
pub use discover::discover;

/// A source file read fully into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path on disk (project root joined with `relative`).
    pub path: PathBuf,
    /// Path relative to the project root, used in reports.
    pub relative: PathBuf,
    /// Full text content.
    pub content: String,
}

impl SourceFile {
    /// Read `root/relative` into memory.
    pub fn read(root: &Path, relative: impl Into<PathBuf>) -> Result<Self> {
        let relative = relative.into();
        let path = root.join(&relative);
        let content = read_text(&path)?;
        Ok(Self {
            path,
            relative,
            content,
        })
    }
}

/// Read a whole file as UTF-8 text, mapping failures to `ReadFile`.
pub(crate) fn read_text(path: &Path) -> Result<String> {
    tracing::debug!("Reading {}", path.display());
    fs::read_to_string(path).map_err(|source| AuditError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}
