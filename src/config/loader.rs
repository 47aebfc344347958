//! Profile file discovery and loading.
//!
//! A project may carry a `zigaudit.yml` at its root to override the
//! built-in manifest and checklists. When no such file exists the default
//! [`AuditProfile`] is used.

use crate::config::schema::AuditProfile;
use crate::config::validator::validate;
use crate::error::{AuditError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the project-level profile.
pub const PROFILE_FILE_NAME: &str = "zigaudit.yml";

/// Find the project profile at `<project_root>/zigaudit.yml`.
pub fn find_profile(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(PROFILE_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single profile file and parse it into AuditProfile.
///
/// # Errors
///
/// Returns `ProfileNotFound` if the file doesn't exist.
/// Returns `ProfileParseError` if the YAML is invalid.
pub fn load_profile_file(path: &Path) -> Result<AuditProfile> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AuditError::ProfileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            AuditError::ReadFile {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    parse_profile(&content, path)
}

/// Parse YAML content into AuditProfile.
///
/// An empty document yields the default profile.
pub fn parse_profile(content: &str, source_path: &Path) -> Result<AuditProfile> {
    if content.trim().is_empty() {
        return Ok(AuditProfile::default());
    }

    serde_yaml::from_str(content).map_err(|e| AuditError::ProfileParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the profile for a project.
///
/// If `profile_override` is provided it must exist; a relative override is
/// resolved against the current directory, like any command-line path.
/// Otherwise the project profile is used when present, falling back to the
/// built-in defaults.
pub fn load_profile(project_root: &Path, profile_override: Option<&Path>) -> Result<AuditProfile> {
    let source = match profile_override {
        Some(path) => Some(path.to_path_buf()),
        None => find_profile(project_root),
    };

    let Some(path) = source else {
        tracing::debug!("No {} found, using built-in profile", PROFILE_FILE_NAME);
        return Ok(AuditProfile::default());
    };

    tracing::debug!("Loading profile from {}", path.display());
    let profile = load_profile_file(&path)?;
    validate(&profile, &path)?;
    Ok(profile)
}
