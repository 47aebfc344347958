//! SARIF output formatter.
//!
//! SARIF (Static Analysis Results Interchange Format) is an OASIS standard
//! for static analysis tools, supported by GitHub, VS Code, and other tools.

use super::LintFormatter;
use crate::audit::AuditReport;
use crate::lint::{RuleRegistry, Severity};
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::Write;

/// SARIF version we generate.
const SARIF_VERSION: &str = "2.1.0";
const SARIF_SCHEMA: &str = "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";

/// Formats audit output as SARIF.
pub struct SarifFormatter {
    /// Tool name to report.
    pub tool_name: String,
    /// Tool version to report.
    pub tool_version: String,
    registry: Option<RuleRegistry>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLog {
    #[serde(rename = "$schema")]
    schema: &'static str,
    version: &'static str,
    runs: Vec<SarifRun>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifDriver {
    name: String,
    version: String,
    rules: Vec<SarifRule>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRule {
    id: String,
    short_description: SarifMessage,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifResult {
    rule_id: String,
    level: &'static str,
    message: SarifMessage,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    locations: Vec<SarifLocation>,
}

#[derive(Serialize)]
struct SarifMessage {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLocation {
    physical_location: SarifPhysicalLocation,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifPhysicalLocation {
    artifact_location: SarifArtifactLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    region: Option<SarifRegion>,
}

#[derive(Serialize)]
struct SarifArtifactLocation {
    uri: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRegion {
    start_line: usize,
}

impl SarifFormatter {
    /// Create a new SARIF formatter.
    pub fn new(tool_name: impl Into<String>, tool_version: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            tool_version: tool_version.into(),
            registry: None,
        }
    }

    /// Describe rules using the given registry instead of bare IDs.
    pub fn with_registry(mut self, registry: RuleRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    fn severity_to_level(severity: Severity) -> &'static str {
        match severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    fn describe(&self, id: &str) -> String {
        self.registry
            .as_ref()
            .and_then(|r| r.iter().find(|rule| rule.id().0 == id))
            .map(|rule| rule.description().to_string())
            .unwrap_or_else(|| format!("Rule {}", id))
    }
}

impl LintFormatter for SarifFormatter {
    fn format<W: Write>(&self, report: &AuditReport, writer: &mut W) -> std::io::Result<()> {
        let rule_ids: BTreeSet<&str> = report
            .diagnostics
            .iter()
            .map(|d| d.rule_id.0.as_str())
            .collect();

        let rules: Vec<_> = rule_ids
            .into_iter()
            .map(|id| SarifRule {
                id: id.to_string(),
                short_description: SarifMessage {
                    text: self.describe(id),
                },
            })
            .collect();

        let results: Vec<_> = report
            .diagnostics
            .iter()
            .map(|d| {
                let locations = d
                    .span
                    .as_ref()
                    .map(|span| {
                        vec![SarifLocation {
                            physical_location: SarifPhysicalLocation {
                                artifact_location: SarifArtifactLocation {
                                    uri: span.file.display().to_string(),
                                },
                                region: span.line.map(|start_line| SarifRegion { start_line }),
                            },
                        }]
                    })
                    .unwrap_or_default();

                SarifResult {
                    rule_id: d.rule_id.0.clone(),
                    level: Self::severity_to_level(d.severity),
                    message: SarifMessage { text: d.message() },
                    locations,
                }
            })
            .collect();

        let log = SarifLog {
            schema: SARIF_SCHEMA,
            version: SARIF_VERSION,
            runs: vec![SarifRun {
                tool: SarifTool {
                    driver: SarifDriver {
                        name: self.tool_name.clone(),
                        version: self.tool_version.clone(),
                        rules,
                    },
                },
                results,
            }],
        };

        serde_json::to_writer_pretty(&mut *writer, &log).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
