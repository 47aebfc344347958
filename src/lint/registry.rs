//! Rule registry for managing lint rules.
//!
//! The [`RuleRegistry`] stores rules in registration order, which is also
//! the order their findings appear in the report.

use super::rule::{LintRule, RuleId};
use super::rules::{
    DelimiterBalanceRule, EndpointCoverageRule, ImportResolutionRule, MethodCoverageRule,
    RequiredFilesRule, StdImportRule,
};

/// Ordered registry of audit rules.
pub struct RuleRegistry {
    rules: Vec<Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a registry with all built-in rules, in report order.
    ///
    /// Within the syntax section the std check runs before import
    /// resolution, which runs before delimiter balance.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(RequiredFilesRule));
        registry.register(Box::new(StdImportRule));
        registry.register(Box::new(ImportResolutionRule));
        registry.register(Box::new(DelimiterBalanceRule));
        registry.register(Box::new(MethodCoverageRule));
        registry.register(Box::new(EndpointCoverageRule));
        registry
    }

    /// Register a lint rule.
    ///
    /// A rule with an already registered ID replaces it in place.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        let id = rule.id();
        match self.rules.iter().position(|r| r.id() == id) {
            Some(index) => self.rules[index] = rule,
            None => self.rules.push(rule),
        }
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&dyn LintRule> {
        self.rules
            .iter()
            .find(|r| &r.id() == id)
            .map(|r| r.as_ref())
    }

    /// Iterate over all rules in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Project;
    use crate::error::Result;
    use crate::lint::{LintDiagnostic, Section, Severity};

    struct MockRule {
        id: RuleId,
        name: &'static str,
    }

    impl LintRule for MockRule {
        fn id(&self) -> RuleId {
            self.id.clone()
        }
        fn name(&self) -> &str {
            self.name
        }
        fn description(&self) -> &str {
            "A mock rule for testing"
        }
        fn section(&self) -> Section {
            Section::Structure
        }
        fn default_severity(&self) -> Severity {
            Severity::Warning
        }
        fn check(&self, _project: &Project) -> Result<Vec<LintDiagnostic>> {
            Ok(vec![])
        }
    }

    fn mock(id: &str, name: &'static str) -> Box<MockRule> {
        Box::new(MockRule {
            id: RuleId::new(id),
            name,
        })
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = RuleRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn registry_register_and_get() {
        let mut registry = RuleRegistry::new();
        registry.register(mock("mock", "Mock"));

        assert!(!registry.is_empty());
        assert!(registry.get(&RuleId::new("mock")).is_some());
        assert!(registry.get(&RuleId::new("unknown")).is_none());
    }

    #[test]
    fn registry_keeps_registration_order() {
        let mut registry = RuleRegistry::new();
        registry.register(mock("b", "B"));
        registry.register(mock("a", "A"));

        let ids: Vec<_> = registry.iter().map(|r| r.id().0).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn registry_replaces_same_id_in_place() {
        let mut registry = RuleRegistry::new();
        registry.register(mock("a", "First"));
        registry.register(mock("b", "B"));
        registry.register(mock("a", "Second"));

        assert_eq!(registry.len(), 2);
        let names: Vec<_> = registry.iter().map(|r| r.name().to_string()).collect();
        assert_eq!(names, vec!["Second", "B"]);
    }

    #[test]
    fn registry_default_is_empty() {
        assert!(RuleRegistry::default().is_empty());
    }

    #[test]
    fn registry_with_builtins_in_report_order() {
        let registry = RuleRegistry::with_builtins();
        let ids: Vec<_> = registry.iter().map(|r| r.id().0).collect();
        assert_eq!(
            ids,
            vec![
                "required-files",
                "std-import",
                "import-resolution",
                "delimiter-balance",
                "method-coverage",
                "endpoint-coverage",
            ]
        );

        let sections: Vec<_> = registry.iter().map(|r| r.section()).collect();
        let mut sorted = sections.clone();
        sorted.sort();
        assert_eq!(sections, sorted);
    }
}
