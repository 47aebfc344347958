//! Lint diagnostic messages.
//!
//! This module provides the [`LintDiagnostic`] type: a structured
//! [`Issue`] tagged with the rule that found it, a severity, and an
//! optional source location.

use super::issue::Issue;
use super::rule::{RuleId, Section, Severity};
use super::span::Span;

/// A diagnostic produced by a lint rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintDiagnostic {
    /// The rule that produced this diagnostic.
    pub rule_id: RuleId,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// What was found.
    pub issue: Issue,
    /// Optional source location.
    pub span: Option<Span>,
    /// Optional suggestion for fixing the issue.
    pub suggestion: Option<String>,
}

impl LintDiagnostic {
    /// Create a new diagnostic.
    pub fn new(rule_id: RuleId, severity: Severity, issue: Issue) -> Self {
        Self {
            rule_id,
            severity,
            issue,
            span: None,
            suggestion: None,
        }
    }

    /// Add a source span to this diagnostic.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Add a fix suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Human-readable message.
    pub fn message(&self) -> String {
        self.issue.to_string()
    }

    /// Report section of the underlying issue.
    pub fn section(&self) -> Section {
        self.issue.section()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing(path: &str) -> Issue {
        Issue::MissingFile { path: path.into() }
    }

    #[test]
    fn diagnostic_creation() {
        let diag = LintDiagnostic::new(RuleId::new("test-rule"), Severity::Error, missing("build.zig"));

        assert_eq!(diag.rule_id, RuleId::new("test-rule"));
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.message(), "Required file 'build.zig' is missing");
        assert_eq!(diag.section(), Section::Structure);
        assert!(diag.suggestion.is_none());
        assert!(diag.span.is_none());
    }

    #[test]
    fn diagnostic_builder_pattern() {
        let diag = LintDiagnostic::new(RuleId::new("test"), Severity::Warning, missing("a"))
            .with_span(Span::line("a", 10))
            .with_suggestion("Create it");

        assert_eq!(diag.span, Some(Span::line("a", 10)));
        assert_eq!(diag.suggestion.as_deref(), Some("Create it"));
    }
}
