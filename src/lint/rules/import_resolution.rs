//! Relative import resolution.
//!
//! For imports such as `@import("fetch/mod")` this rule checks that
//! `fetch/mod.zig` exists next to the importing file. Standard-library
//! imports, imports already ending in `.zig`, and imports without a `/`
//! are not checked.

use crate::audit::Project;
use crate::error::Result;
use crate::lint::{Issue, LintDiagnostic, LintRule, RuleId, Section, Severity, Span};

/// Detects relative imports whose target file is absent.
pub struct ImportResolutionRule;

impl LintRule for ImportResolutionRule {
    fn id(&self) -> RuleId {
        RuleId::new("import-resolution")
    }

    fn name(&self) -> &str {
        "Import Resolution"
    }

    fn description(&self) -> &str {
        "Detects library-style relative imports whose target file does not exist"
    }

    fn section(&self) -> Section {
        Section::Syntax
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, project: &Project) -> Result<Vec<LintDiagnostic>> {
        let scanner = project.scanner();
        let mut diagnostics = Vec::new();

        for source in project.sources() {
            for import in scanner.unresolved_imports(&source.path, &source.content) {
                let expected = scanner.expected_path(&source.relative, &import.target);
                diagnostics.push(
                    LintDiagnostic::new(
                        self.id(),
                        self.default_severity(),
                        Issue::UnresolvedImport {
                            file: source.relative.clone(),
                            import: import.target,
                        },
                    )
                    .with_span(Span::line(&source.relative, import.line))
                    .with_suggestion(format!("Expected {}", expected.display())),
                );
            }
        }

        Ok(diagnostics)
    }
}
