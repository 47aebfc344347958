//! Endpoint coverage.
//!
//! Every required endpoint fragment must appear in the concatenated text
//! of the examples, test and module files. Absent corpus files simply
//! contribute nothing.

use crate::audit::Project;
use crate::checklist::Checklist;
use crate::error::Result;
use crate::files::aggregate;
use crate::lint::{Issue, LintDiagnostic, LintRule, RuleId, Section, Severity};

/// Detects required endpoint fragments absent from the endpoint corpus.
pub struct EndpointCoverageRule;

impl LintRule for EndpointCoverageRule {
    fn id(&self) -> RuleId {
        RuleId::new("endpoint-coverage")
    }

    fn name(&self) -> &str {
        "Endpoint Coverage"
    }

    fn description(&self) -> &str {
        "Checks that every required endpoint path appears in the examples, tests or module"
    }

    fn section(&self) -> Section {
        Section::Endpoints
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, project: &Project) -> Result<Vec<LintDiagnostic>> {
        let coverage = &project.profile().endpoints;
        let aggregated = aggregate(project.root(), &coverage.corpus)?;
        if !aggregated.missing.is_empty() {
            tracing::debug!(
                "Endpoint corpus files not found: {}",
                aggregated.missing.join(", ")
            );
        }

        let checklist = Checklist::new(coverage.tokens.iter().cloned());
        Ok(checklist
            .missing_from(&aggregated.corpus)
            .into_iter()
            .map(|token| {
                LintDiagnostic::new(
                    self.id(),
                    self.default_severity(),
                    Issue::MissingEndpoint {
                        token: token.to_string(),
                    },
                )
                .with_suggestion(format!("Add an example or test that calls {}", token))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::rules::test_support::project_with;

    #[test]
    fn searches_across_all_corpus_files() {
        let (_temp, project) = project_with(&[
            ("src/fetch/examples.zig", "/get /post /put /delete /patch"),
            ("src/fetch/test.zig", "/headers /user-agent /basic-auth /bearer"),
            ("src/fetch/mod.zig", "/cookies /redirect /status /json"),
        ]);
        assert!(EndpointCoverageRule.check(&project).unwrap().is_empty());
    }

    #[test]
    fn missing_corpus_files_are_ignored() {
        let (_temp, project) = project_with(&[(
            "src/fetch/mod.zig",
            "/get /post /put /delete /patch /headers /user-agent /basic-auth /bearer /cookies",
        )]);

        let diagnostics = EndpointCoverageRule.check(&project).unwrap();
        let tokens: Vec<_> = diagnostics.iter().map(|d| d.issue.label()).collect();
        assert_eq!(tokens, vec!["/redirect", "/status", "/json"]);
    }

    #[test]
    fn prefix_match_satisfies_endpoint() {
        let mut files = vec![("src/fetch/mod.zig", "\"/getall\"")];
        files.push(("src/fetch/test.zig", ""));
        let (_temp, project) = project_with(&files);

        let diagnostics = EndpointCoverageRule.check(&project).unwrap();
        assert!(!diagnostics.iter().any(|d| d.issue.label() == "/get"));
    }
}
