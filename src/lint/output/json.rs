//! JSON output formatter.
//!
//! Formats an audit report as machine-readable JSON for tooling integration.

use super::LintFormatter;
use crate::audit::AuditReport;
use crate::lint::{Issue, Section, Severity};
use serde::Serialize;
use std::io::Write;

/// Formats audit output as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    project_root: String,
    files_scanned: Vec<String>,
    sections: Vec<JsonSection>,
    diagnostics: Vec<JsonDiagnostic<'a>>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonSection {
    name: Section,
    title: &'static str,
    passed: bool,
    issues: usize,
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    rule_id: &'a str,
    severity: &'static str,
    section: Section,
    message: String,
    issue: &'a Issue,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<&'a str>,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    errors: usize,
    warnings: usize,
    files_scanned: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }

    fn severity_to_string(severity: Severity) -> &'static str {
        match severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LintFormatter for JsonFormatter {
    fn format<W: Write>(&self, report: &AuditReport, writer: &mut W) -> std::io::Result<()> {
        let sections = Section::ALL
            .iter()
            .map(|&section| JsonSection {
                name: section,
                title: section.title(),
                passed: report.section_passed(section),
                issues: report.section(section).len(),
            })
            .collect();

        let diagnostics = report
            .diagnostics
            .iter()
            .map(|d| JsonDiagnostic {
                rule_id: &d.rule_id.0,
                severity: Self::severity_to_string(d.severity),
                section: d.section(),
                message: d.message(),
                issue: &d.issue,
                file: d.span.as_ref().map(|s| s.file.display().to_string()),
                line: d.span.as_ref().and_then(|s| s.line),
                suggestion: d.suggestion.as_deref(),
            })
            .collect();

        let summary = JsonSummary {
            total: report.total_issues(),
            errors: report.count_severity(Severity::Error),
            warnings: report.count_severity(Severity::Warning),
            files_scanned: report.files_scanned.len(),
        };

        let output = JsonOutput {
            project_root: report.project_root.display().to_string(),
            files_scanned: report
                .files_scanned
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            sections,
            diagnostics,
            summary,
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
