//! Rule-based project checks.
//!
//! This module provides the audit checks through a pluggable rule system.
//!
//! # Overview
//!
//! The lint system consists of:
//!
//! - **Rules** - Individual checks ([`LintRule`] trait)
//! - **Registry** - Ordered collection of rules ([`RuleRegistry`])
//! - **Issues** - Structured findings ([`Issue`])
//! - **Diagnostics** - Findings tagged with rule, severity and location ([`LintDiagnostic`])
//! - **Output** - Human, JSON and SARIF renderers ([`LintFormatter`])
//!
//! # Example
//!
//! ```
//! use zigaudit::lint::{RuleRegistry, RuleId, Severity};
//!
//! let registry = RuleRegistry::with_builtins();
//! assert!(registry.get(&RuleId::new("delimiter-balance")).is_some());
//! assert!(registry.get(&RuleId::new("nonexistent")).is_none());
//!
//! // Severity has ordering
//! assert!(Severity::Warning < Severity::Error);
//! ```

pub mod diagnostic;
pub mod issue;
pub mod output;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod span;

pub use diagnostic::LintDiagnostic;
pub use issue::Issue;
pub use output::{HumanFormatter, JsonFormatter, LintFormatter, OutputFormat, SarifFormatter};
pub use registry::RuleRegistry;
pub use rule::{LintRule, RuleId, Section, Severity};
pub use rules::{
    DelimiterBalanceRule, EndpointCoverageRule, ImportResolutionRule, MethodCoverageRule,
    RequiredFilesRule, StdImportRule,
};
pub use span::Span;
