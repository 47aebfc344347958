//! HTTP method coverage.
//!
//! Every required method name must appear somewhere in the module file.
//! If the module file itself is missing, a single finding says so.

use crate::audit::Project;
use crate::checklist::Checklist;
use crate::error::Result;
use crate::files::read_optional;
use crate::lint::{Issue, LintDiagnostic, LintRule, RuleId, Section, Severity, Span};

/// Detects required HTTP method names absent from the module file.
pub struct MethodCoverageRule;

impl LintRule for MethodCoverageRule {
    fn id(&self) -> RuleId {
        RuleId::new("method-coverage")
    }

    fn name(&self) -> &str {
        "HTTP Method Coverage"
    }

    fn description(&self) -> &str {
        "Checks that every required HTTP method name appears in the module file"
    }

    fn section(&self) -> Section {
        Section::Methods
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, project: &Project) -> Result<Vec<LintDiagnostic>> {
        let coverage = &project.profile().methods;

        let Some(corpus) = read_optional(project.root(), &coverage.corpus)? else {
            return Ok(vec![LintDiagnostic::new(
                self.id(),
                self.default_severity(),
                Issue::MissingCorpus {
                    path: coverage.corpus.clone(),
                },
            )
            .with_span(Span::file(&coverage.corpus))]);
        };

        let checklist = Checklist::new(coverage.tokens.iter().cloned());
        Ok(checklist
            .missing_from(&corpus)
            .into_iter()
            .map(|token| {
                LintDiagnostic::new(
                    self.id(),
                    self.default_severity(),
                    Issue::MissingMethod {
                        token: token.to_string(),
                    },
                )
                .with_span(Span::file(&coverage.corpus))
            })
            .collect())
    }
}
