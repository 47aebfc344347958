//! Manifest existence checks and corpus aggregation.

use std::path::Path;

use super::read_text;
use crate::error::Result;

/// Concatenated text of the present files plus the paths that were absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregate {
    /// Contents of every present file, in manifest order, with no separator.
    pub corpus: String,
    /// Manifest entries that do not exist as files, in manifest order.
    pub missing: Vec<String>,
}

/// Read every file in `paths` (relative to `base`) and concatenate the
/// contents of those that exist.
///
/// # Errors
///
/// A path that exists but cannot be read is a fatal `ReadFile` error.
pub fn aggregate<S: AsRef<str>>(base: &Path, paths: &[S]) -> Result<Aggregate> {
    let mut result = Aggregate::default();

    for relative in paths {
        let relative = relative.as_ref();
        match read_optional(base, relative)? {
            Some(text) => result.corpus.push_str(&text),
            None => result.missing.push(relative.to_string()),
        }
    }

    Ok(result)
}

/// Read `base/relative` if it is a file, `None` if it does not exist.
pub fn read_optional(base: &Path, relative: &str) -> Result<Option<String>> {
    let path = base.join(relative);
    if path.is_file() {
        read_text(&path).map(Some)
    } else {
        Ok(None)
    }
}

/// Manifest entries for which nothing exists at `base/path`.
///
/// Directories count as present.
pub fn missing_paths<S: AsRef<str>>(base: &Path, manifest: &[S]) -> Vec<String> {
    manifest
        .iter()
        .map(|p| p.as_ref())
        .filter(|relative| !base.join(relative).exists())
        .map(str::to_string)
        .collect()
}
