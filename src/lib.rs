//! zigaudit - Structure and coverage audit for a Zig HTTP client project.
//!
//! zigaudit inspects a project tree and reports, section by section,
//! which required files are missing, which source files have suspicious
//! syntax, and which HTTP methods and test endpoints are not covered.
//! Every finding is a reportable issue; only filesystem failures abort a
//! run.
//!
//! # Modules
//!
//! - [`audit`] - Project loading, rule orchestration and the report
//! - [`checklist`] - Required-token checklists over a text corpus
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Audit profile loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`files`] - Source discovery, required-file checks, corpus aggregation
//! - [`lint`] - Audit rules, diagnostics and output formatters
//! - [`scan`] - Textual delimiter and import heuristics
//! - [`ui`] - Terminal output and styling
//!
//! # Example
//!
//! ```
//! use zigaudit::scan::{check_balance, DelimiterPair};
//!
//! let imbalances = check_balance("fn main() { foo(); ");
//! assert_eq!(imbalances.len(), 1);
//! assert_eq!(imbalances[0].pair, DelimiterPair::Braces);
//! assert_eq!(imbalances[0].difference, 1);
//! ```
//!
//! For whole-project audits, see [`audit::Auditor`].

pub mod audit;
pub mod checklist;
pub mod cli;
pub mod config;
pub mod error;
pub mod files;
pub mod lint;
pub mod scan;
pub mod ui;

pub use error::{AuditError, Result};
