//! Delimiter balance.
//!
//! Reports braces, brackets and parentheses whose open and close counts
//! differ within a file. Counting is textual; delimiters in strings and
//! comments are included.

use crate::audit::Project;
use crate::error::Result;
use crate::lint::{Issue, LintDiagnostic, LintRule, RuleId, Section, Severity, Span};
use crate::scan::check_balance;

/// Detects unbalanced delimiter pairs.
pub struct DelimiterBalanceRule;

impl LintRule for DelimiterBalanceRule {
    fn id(&self) -> RuleId {
        RuleId::new("delimiter-balance")
    }

    fn name(&self) -> &str {
        "Delimiter Balance"
    }

    fn description(&self) -> &str {
        "Detects unbalanced braces, brackets and parentheses"
    }

    fn section(&self) -> Section {
        Section::Syntax
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, project: &Project) -> Result<Vec<LintDiagnostic>> {
        let mut diagnostics = Vec::new();

        for source in project.sources() {
            for imbalance in check_balance(&source.content) {
                diagnostics.push(
                    LintDiagnostic::new(
                        self.id(),
                        self.default_severity(),
                        Issue::UnbalancedDelimiter {
                            file: source.relative.clone(),
                            pair: imbalance.pair,
                            difference: imbalance.difference,
                        },
                    )
                    .with_span(Span::file(&source.relative)),
                );
            }
        }

        Ok(diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::rules::test_support::project_with;
    use crate::scan::DelimiterPair;

    #[test]
    fn balanced_file_passes() {
        let (_temp, project) = project_with(&[("a.zig", "fn f() void { const x = [1]u8{0}; }")]);
        assert!(DelimiterBalanceRule.check(&project).unwrap().is_empty());
    }

    #[test]
    fn extra_brace_reports_plus_one() {
        let (_temp, project) = project_with(&[("a.zig", "fn f() void {")]);

        let diagnostics = DelimiterBalanceRule.check(&project).unwrap();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].issue,
            Issue::UnbalancedDelimiter {
                file: "a.zig".into(),
                pair: DelimiterPair::Braces,
                difference: 1,
            }
        );
        assert_eq!(diagnostics[0].message(), "Unbalanced braces: +1");
    }

    #[test]
    fn checks_every_file() {
        let (_temp, project) = project_with(&[("a.zig", "("), ("b.zig", "]")]);
        let diagnostics = DelimiterBalanceRule.check(&project).unwrap();
        let files: Vec<_> = diagnostics.iter().filter_map(|d| d.issue.file()).collect();
        assert_eq!(files, vec![std::path::Path::new("a.zig"), std::path::Path::new("b.zig")]);
    }
}
