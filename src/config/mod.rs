//! Audit profile loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use zigaudit::config::{load_profile, AuditProfile};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("zigaudit.yml"), "exclude_dirs: [zig-out]").unwrap();
//!
//! let profile = load_profile(temp.path(), None).unwrap();
//! assert_eq!(profile.exclude_dirs, vec!["zig-out".to_string()]);
//! assert_eq!(profile.required_files, AuditProfile::default().required_files);
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{find_profile, load_profile, load_profile_file, parse_profile, PROFILE_FILE_NAME};
pub use schema::{AuditProfile, EndpointCoverage, MethodCoverage};
pub use validator::validate;
