//! Standard library import detection.
//!
//! Flags files that use `std.` without `const std = @import("std");`.
//! One finding per file at most, located at the first usage.

use crate::audit::Project;
use crate::error::Result;
use crate::lint::{Issue, LintDiagnostic, LintRule, RuleId, Section, Severity, Span};

/// Detects standard-library usage without the canonical import.
pub struct StdImportRule;

impl LintRule for StdImportRule {
    fn id(&self) -> RuleId {
        RuleId::new("std-import")
    }

    fn name(&self) -> &str {
        "Std Import"
    }

    fn description(&self) -> &str {
        "Detects files that use the standard library without importing it"
    }

    fn section(&self) -> Section {
        Section::Syntax
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, project: &Project) -> Result<Vec<LintDiagnostic>> {
        let scanner = project.scanner();
        let canonical = project.profile().canonical_std_import();

        Ok(project
            .sources()
            .iter()
            .filter_map(|source| {
                let line = scanner.std_without_import(&source.content)?;
                Some(
                    LintDiagnostic::new(
                        self.id(),
                        self.default_severity(),
                        Issue::StdWithoutImport {
                            file: source.relative.clone(),
                            namespace: scanner.std_namespace().to_string(),
                        },
                    )
                    .with_span(Span::line(&source.relative, line))
                    .with_suggestion(format!("Add `{}`", canonical)),
                )
            })
            .collect())
    }
}
