//! Lint rule definitions.
//!
//! This module provides the core traits and types for defining audit rules:
//!
//! - [`LintRule`] - The trait that all rules must implement
//! - [`RuleId`] - Unique identifier for a rule
//! - [`Severity`] - Severity level for diagnostics (Warning, Error)
//! - [`Section`] - Report section a rule's findings are listed under

use serde::Serialize;

use super::diagnostic::LintDiagnostic;
use crate::audit::Project;
use crate::error::Result;

/// Unique identifier for a lint rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity level for lint diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Likely problem worth a look.
    Warning,
    /// Definite problem.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Report section, in the order sections are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Required files are present.
    Structure,
    /// Delimiter balance and import heuristics per source file.
    Syntax,
    /// HTTP method names appear in the module file.
    Methods,
    /// Endpoint fragments appear in the module, test and example files.
    Endpoints,
}

impl Section {
    /// All sections, in report order.
    pub const ALL: [Section; 4] = [
        Self::Structure,
        Self::Syntax,
        Self::Methods,
        Self::Endpoints,
    ];

    /// Heading used by the human report.
    pub fn title(self) -> &'static str {
        match self {
            Self::Structure => "Project Structure",
            Self::Syntax => "Syntax Validation",
            Self::Methods => "HTTP Methods Coverage",
            Self::Endpoints => "Endpoints Coverage",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Structure => write!(f, "structure"),
            Self::Syntax => write!(f, "syntax"),
            Self::Methods => write!(f, "methods"),
            Self::Endpoints => write!(f, "endpoints"),
        }
    }
}

/// An audit rule.
///
/// Each rule checks one kind of problem in a loaded [`Project`] and
/// produces diagnostics. Findings are never errors; `Err` is reserved for
/// failures that abort the run, such as an unreadable file.
pub trait LintRule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Human-readable name of the rule.
    fn name(&self) -> &str;

    /// Description of what this rule checks.
    fn description(&self) -> &str;

    /// Report section this rule's findings belong to.
    fn section(&self) -> Section;

    /// Default severity for this rule.
    fn default_severity(&self) -> Severity;

    /// Check the project and return any diagnostics.
    fn check(&self, project: &Project) -> Result<Vec<LintDiagnostic>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_id_equality() {
        let id1 = RuleId::new("test-rule");
        let id2 = RuleId::new("test-rule");
        let id3 = RuleId::new("other-rule");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn rule_id_display() {
        let id = RuleId::new("my-rule");
        assert_eq!(format!("{}", id), "my-rule");
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn severity_display() {
        assert_eq!(format!("{}", Severity::Warning), "warning");
        assert_eq!(format!("{}", Severity::Error), "error");
    }

    #[test]
    fn sections_in_report_order() {
        let mut sorted = Section::ALL;
        sorted.sort();
        assert_eq!(sorted, Section::ALL);
        assert_eq!(Section::Structure.title(), "Project Structure");
        assert_eq!(Section::Endpoints.to_string(), "endpoints");
    }
}
