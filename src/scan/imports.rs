//! Import resolution heuristics.
//!
//! Finds `@import("...")` expressions with a regular expression and
//! decides, per import, whether a sibling file should exist on disk. A
//! second whole-file check flags standard-library usage without the
//! canonical `const std = @import("std");` statement.
//!
//! Both checks are textual. Imports inside comments or strings are found
//! like any other, and `std.` anywhere in the text counts as usage.

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::config::AuditProfile;
use crate::error::{AuditError, Result};

/// One import expression found in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRef {
    /// The quoted argument, e.g. `fetch/mod` or `std`.
    pub target: String,
    /// 1-based line of the expression.
    pub line: usize,
}

/// Scanner configured for one language profile.
#[derive(Debug, Clone)]
pub struct ImportScanner {
    pattern: Regex,
    std_namespace: String,
    suffix: String,
    canonical_import: String,
    usage_marker: String,
}

fn line_of(text: &str, offset: usize) -> usize {
    text[..offset].matches('\n').count() + 1
}

impl ImportScanner {
    /// Build a scanner from the profile's keyword, namespace and extension.
    pub fn new(profile: &AuditProfile) -> Result<Self> {
        let source = format!(r#"{}\("([^"]+)"\)"#, regex::escape(&profile.import_keyword));
        let pattern = Regex::new(&source).map_err(|e| AuditError::InvalidPattern {
            message: e.to_string(),
        })?;

        Ok(Self {
            pattern,
            std_namespace: profile.std_namespace.clone(),
            suffix: profile.source_suffix(),
            canonical_import: profile.canonical_std_import(),
            usage_marker: profile.std_usage_marker(),
        })
    }

    /// Every import expression in `text`, in text order.
    pub fn extract_imports(&self, text: &str) -> Vec<ImportRef> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let target = caps.get(1)?;
                Some(ImportRef {
                    target: target.as_str().to_string(),
                    line: line_of(text, whole.start()),
                })
            })
            .collect()
    }

    /// Whether an import argument is a library-style relative import whose
    /// target file is checked on disk.
    ///
    /// Arguments starting with the std namespace, already carrying the
    /// source extension, or without a `/` are out of scope.
    pub fn is_checked(&self, target: &str) -> bool {
        !target.starts_with(&self.std_namespace)
            && !target.ends_with(&self.suffix)
            && target.contains('/')
    }

    /// Where a checked import is expected to live, relative to the
    /// importing file's directory.
    pub fn expected_path(&self, importing_file: &Path, target: &str) -> PathBuf {
        let dir = importing_file.parent().unwrap_or_else(|| Path::new(""));
        dir.join(format!("{}{}", target, self.suffix))
    }

    /// Checked imports in `text` whose expected sibling file is absent.
    ///
    /// `importing_file` must be a path that resolves on disk (absolute or
    /// relative to the working directory).
    pub fn unresolved_imports(&self, importing_file: &Path, text: &str) -> Vec<ImportRef> {
        self.extract_imports(text)
            .into_iter()
            .filter(|import| self.is_checked(&import.target))
            .filter(|import| !self.expected_path(importing_file, &import.target).exists())
            .collect()
    }

    /// If the text uses the standard library without the canonical import
    /// statement, the 1-based line of the first usage.
    pub fn std_without_import(&self, text: &str) -> Option<usize> {
        if text.contains(&self.canonical_import) {
            return None;
        }
        text.find(&self.usage_marker)
            .map(|offset| line_of(text, offset))
    }

    /// The standard-library namespace this scanner checks for.
    pub fn std_namespace(&self) -> &str {
        &self.std_namespace
    }
}
