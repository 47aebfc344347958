//! Audit profile schema definitions.
//!
//! This module contains the struct definitions that map to the
//! `zigaudit.yml` profile format. Every field has a built-in default, so
//! an empty file (or no file at all) audits the standard fetch-library
//! layout.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Root profile structure for zigaudit.yml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AuditProfile {
    /// Extension (without the dot) of source files to scan
    pub source_extension: String,

    /// Standard library namespace, e.g. `std`
    pub std_namespace: String,

    /// Import builtin, e.g. `@import`
    pub import_keyword: String,

    /// Relative paths that must exist under the project root
    pub required_files: Vec<String>,

    /// Directory names skipped during source discovery
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_dirs: Vec<String>,

    /// HTTP method coverage checklist
    pub methods: MethodCoverage,

    /// Endpoint coverage checklist
    pub endpoints: EndpointCoverage,
}

/// Checklist of method names searched in a single module file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MethodCoverage {
    /// Relative path of the file whose text is searched
    pub corpus: String,

    /// Required method names
    pub tokens: Vec<String>,
}

/// Checklist of endpoint path fragments searched across several files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct EndpointCoverage {
    /// Relative paths concatenated, in order, into the searched corpus
    pub corpus: Vec<String>,

    /// Required endpoint fragments
    pub tokens: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for AuditProfile {
    fn default() -> Self {
        Self {
            source_extension: "zig".to_string(),
            std_namespace: "std".to_string(),
            import_keyword: "@import".to_string(),
            required_files: strings(&[
                "build.zig",
                "src/main.zig",
                "src/fetch/mod.zig",
                "src/fetch/test.zig",
                "src/fetch/examples.zig",
                "src/fetch/utils.zig",
                "src/fetch/README.md",
            ]),
            exclude_dirs: Vec::new(),
            methods: MethodCoverage::default(),
            endpoints: EndpointCoverage::default(),
        }
    }
}

impl Default for MethodCoverage {
    fn default() -> Self {
        Self {
            corpus: "src/fetch/mod.zig".to_string(),
            tokens: strings(&["GET", "POST", "PUT", "DELETE", "PATCH", "HEAD", "OPTIONS"]),
        }
    }
}

impl Default for EndpointCoverage {
    fn default() -> Self {
        Self {
            corpus: strings(&[
                "src/fetch/examples.zig",
                "src/fetch/test.zig",
                "src/fetch/mod.zig",
            ]),
            tokens: strings(&[
                "/get",
                "/post",
                "/put",
                "/delete",
                "/patch",
                "/headers",
                "/user-agent",
                "/basic-auth",
                "/bearer",
                "/cookies",
                "/redirect",
                "/status",
                "/json",
            ]),
        }
    }
}

impl AuditProfile {
    /// Suffix that marks a source file, including the leading dot.
    pub fn source_suffix(&self) -> String {
        format!(".{}", self.source_extension)
    }

    /// The statement a file must contain before using the standard library,
    /// e.g. `const std = @import("std");`.
    pub fn canonical_std_import(&self) -> String {
        format!(
            "const {ns} = {kw}(\"{ns}\");",
            ns = self.std_namespace,
            kw = self.import_keyword
        )
    }

    /// Text whose presence marks standard-library usage, e.g. `std.`.
    pub fn std_usage_marker(&self) -> String {
        format!("{}.", self.std_namespace)
    }
}
