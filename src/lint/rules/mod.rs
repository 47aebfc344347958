//! Built-in audit rules.
//!
//! One rule per check. Structure and coverage rules look at fixed paths
//! under the project root; syntax rules run over every discovered source
//! file.

pub mod delimiter_balance;
pub mod endpoint_coverage;
pub mod import_resolution;
pub mod method_coverage;
pub mod required_files;
pub mod std_import;

pub use delimiter_balance::DelimiterBalanceRule;
pub use endpoint_coverage::EndpointCoverageRule;
pub use import_resolution::ImportResolutionRule;
pub use method_coverage::MethodCoverageRule;
pub use required_files::RequiredFilesRule;
pub use std_import::StdImportRule;
