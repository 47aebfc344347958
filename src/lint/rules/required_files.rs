//! Required file layout.
//!
//! This rule reports every manifest path that does not exist under the
//! project root.

use crate::audit::Project;
use crate::error::Result;
use crate::files::missing_paths;
use crate::lint::{Issue, LintDiagnostic, LintRule, RuleId, Section, Severity, Span};

/// Detects missing files from the required-file manifest.
pub struct RequiredFilesRule;

impl LintRule for RequiredFilesRule {
    fn id(&self) -> RuleId {
        RuleId::new("required-files")
    }

    fn name(&self) -> &str {
        "Required Files"
    }

    fn description(&self) -> &str {
        "Checks that every path in the required-file manifest exists"
    }

    fn section(&self) -> Section {
        Section::Structure
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, project: &Project) -> Result<Vec<LintDiagnostic>> {
        let missing = missing_paths(project.root(), &project.profile().required_files);

        Ok(missing
            .into_iter()
            .map(|path| {
                LintDiagnostic::new(
                    self.id(),
                    self.default_severity(),
                    Issue::MissingFile { path: path.clone() },
                )
                .with_span(Span::file(&path))
                .with_suggestion(format!("Create {}", path))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::rules::test_support::project_with;

    #[test]
    fn reports_missing_files_in_manifest_order() {
        let (_temp, project) = project_with(&[
            ("src/main.zig", "const std = @import(\"std\");"),
            ("src/fetch/mod.zig", ""),
            ("src/fetch/test.zig", ""),
            ("src/fetch/examples.zig", ""),
            ("src/fetch/README.md", ""),
        ]);

        let diagnostics = RequiredFilesRule.check(&project).unwrap();
        let paths: Vec<_> = diagnostics.iter().map(|d| d.issue.label()).collect();
        assert_eq!(paths, vec!["build.zig", "src/fetch/utils.zig"]);
        assert_eq!(diagnostics[0].span, Some(Span::file("build.zig")));
    }

    #[test]
    fn passes_with_complete_layout() {
        let (_temp, project) = project_with(&[
            ("build.zig", ""),
            ("src/main.zig", ""),
            ("src/fetch/mod.zig", ""),
            ("src/fetch/test.zig", ""),
            ("src/fetch/examples.zig", ""),
            ("src/fetch/utils.zig", ""),
            ("src/fetch/README.md", ""),
        ]);

        assert!(RequiredFilesRule.check(&project).unwrap().is_empty());
    }
}
