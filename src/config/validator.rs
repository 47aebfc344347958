//! Profile validation.
//!
//! Catches profile values that would make the scanners meaningless, such
//! as an empty source extension.

use crate::config::schema::AuditProfile;
use crate::error::{AuditError, Result};
use std::path::Path;

/// Validate a profile loaded from `source`.
///
/// Errors are reported as `ProfileParseError` against `source`.
pub fn validate(profile: &AuditProfile, source: &Path) -> Result<()> {
    let mut problems = Vec::new();

    if profile.source_extension.is_empty() {
        problems.push("source_extension must not be empty".to_string());
    } else if profile.source_extension.starts_with('.') {
        problems.push(format!(
            "source_extension '{}' must not start with a dot",
            profile.source_extension
        ));
    }

    if profile.std_namespace.is_empty() {
        problems.push("std_namespace must not be empty".to_string());
    }

    if profile.import_keyword.is_empty() {
        problems.push("import_keyword must not be empty".to_string());
    }

    if profile.methods.tokens.iter().any(|t| t.is_empty()) {
        problems.push("methods.tokens must not contain empty strings".to_string());
    }

    if profile.endpoints.tokens.iter().any(|t| t.is_empty()) {
        problems.push("endpoints.tokens must not contain empty strings".to_string());
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(AuditError::ProfileParseError {
            path: source.to_path_buf(),
            message: problems.join("; "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_is_valid() {
        assert!(validate(&AuditProfile::default(), Path::new("zigaudit.yml")).is_ok());
    }

    #[test]
    fn rejects_dotted_extension() {
        let profile = AuditProfile {
            source_extension: ".zig".to_string(),
            ..Default::default()
        };
        let err = validate(&profile, Path::new("profiles/ci.yml")).unwrap_err();
        assert!(err.to_string().contains("must not start with a dot"));
        assert!(err.to_string().contains("profiles/ci.yml"));
    }

    #[test]
    fn reports_every_problem() {
        let profile = AuditProfile {
            std_namespace: String::new(),
            import_keyword: String::new(),
            ..Default::default()
        };
        let msg = validate(&profile, Path::new("zigaudit.yml")).unwrap_err().to_string();
        assert!(msg.contains("std_namespace"));
        assert!(msg.contains("import_keyword"));
    }

    #[test]
    fn rejects_empty_tokens() {
        let mut profile = AuditProfile::default();
        profile.endpoints.tokens.push(String::new());
        assert!(validate(&profile, Path::new("zigaudit.yml")).is_err());
    }
}
