//! The inspected project, loaded once per run.

use std::path::{Path, PathBuf};

use crate::config::AuditProfile;
use crate::error::Result;
use crate::files::{discover, SourceFile};
use crate::scan::ImportScanner;

/// Everything a rule needs to inspect: the root directory, the profile
/// in effect, and every discovered source file read into memory.
#[derive(Debug)]
pub struct Project {
    root: PathBuf,
    profile: AuditProfile,
    sources: Vec<SourceFile>,
    scanner: ImportScanner,
}

impl Project {
    /// Discover and read the source files under `root`.
    pub fn load(root: impl Into<PathBuf>, profile: AuditProfile) -> Result<Self> {
        let root = root.into();
        let scanner = ImportScanner::new(&profile)?;
        let sources = discover(&root, &profile.source_extension, &profile.exclude_dirs)?;

        Ok(Self {
            root,
            profile,
            sources,
            scanner,
        })
    }

    /// Project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Profile in effect for this run.
    pub fn profile(&self) -> &AuditProfile {
        &self.profile
    }

    /// Discovered source files, sorted by relative path.
    pub fn sources(&self) -> &[SourceFile] {
        &self.sources
    }

    /// Import scanner built from the profile.
    pub fn scanner(&self) -> &ImportScanner {
        &self.scanner
    }
}
