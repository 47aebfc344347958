//! Error types for zigaudit operations.
//!
//! This module defines [`AuditError`], the error type for conditions that
//! abort an audit run, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Findings about the inspected project (missing files, unbalanced
//!   delimiters, missing coverage) are never errors. They are collected as
//!   [`crate::lint::LintDiagnostic`] values.
//! - `AuditError` covers failures the audit cannot recover from, such as an
//!   existing file that cannot be read or an unparseable profile.
//! - Use `anyhow::Error` (via `AuditError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for zigaudit operations.
#[derive(Debug, Error)]
pub enum AuditError {
    /// Profile file requested explicitly but not found.
    #[error("Profile not found: {path}")]
    ProfileNotFound { path: PathBuf },

    /// Failed to parse the profile file.
    #[error("Failed to parse profile at {path}: {message}")]
    ProfileParseError { path: PathBuf, message: String },

    /// An existing file could not be read (permissions, invalid UTF-8).
    #[error("Failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed while discovering source files.
    #[error("Failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A profile value produced an invalid search pattern.
    #[error("Invalid pattern: {message}")]
    InvalidPattern { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for zigaudit operations.
pub type Result<T> = std::result::Result<T, AuditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_not_found_displays_path() {
        let err = AuditError::ProfileNotFound {
            path: PathBuf::from("/foo/zigaudit.yml"),
        };
        assert!(err.to_string().contains("/foo/zigaudit.yml"));
    }

    #[test]
    fn profile_parse_error_displays_path_and_message() {
        let err = AuditError::ProfileParseError {
            path: PathBuf::from("/zigaudit.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/zigaudit.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn read_file_displays_path_and_cause() {
        let err = AuditError::ReadFile {
            path: PathBuf::from("src/main.zig"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("src/main.zig"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn walk_error_displays_path() {
        let err = AuditError::Walk {
            path: PathBuf::from("/project/src"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "boom"),
        };
        assert!(err.to_string().contains("/project/src"));
    }

    #[test]
    fn invalid_pattern_displays_message() {
        let err = AuditError::InvalidPattern {
            message: "unclosed group".into(),
        };
        assert!(err.to_string().contains("unclosed group"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: AuditError = io_err.into();
        assert!(matches!(err, AuditError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(AuditError::InvalidPattern {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
