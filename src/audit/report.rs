//! Audit results.

use std::path::{Path, PathBuf};

use crate::lint::{Issue, LintDiagnostic, Section, Severity};

/// Ordered diagnostics from one audit run, plus what was scanned.
#[derive(Debug, Clone)]
pub struct AuditReport {
    /// Project root the audit ran against.
    pub project_root: PathBuf,
    /// Relative paths of every scanned source file, in scan order.
    pub files_scanned: Vec<PathBuf>,
    /// Every finding, in rule order.
    pub diagnostics: Vec<LintDiagnostic>,
}

impl AuditReport {
    /// Diagnostics belonging to one report section, in order.
    pub fn section(&self, section: Section) -> Vec<&LintDiagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.section() == section)
            .collect()
    }

    /// Whether a section has no findings.
    pub fn section_passed(&self, section: Section) -> bool {
        self.diagnostics.iter().all(|d| d.section() != section)
    }

    /// Required files that were not found, in manifest order.
    pub fn missing_files(&self) -> Vec<&str> {
        self.diagnostics
            .iter()
            .filter_map(|d| match &d.issue {
                Issue::MissingFile { path } => Some(path.as_str()),
                _ => None,
            })
            .collect()
    }

    /// HTTP method names absent from the module file, in checklist order.
    pub fn missing_methods(&self) -> Vec<&str> {
        self.diagnostics
            .iter()
            .filter_map(|d| match &d.issue {
                Issue::MissingMethod { token } => Some(token.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Endpoint fragments absent from the endpoint corpus, in checklist order.
    pub fn missing_endpoints(&self) -> Vec<&str> {
        self.diagnostics
            .iter()
            .filter_map(|d| match &d.issue {
                Issue::MissingEndpoint { token } => Some(token.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Syntax findings grouped by file, in scan order. Files without
    /// findings are omitted.
    pub fn syntax_by_file(&self) -> Vec<(&Path, Vec<&LintDiagnostic>)> {
        self.files_scanned
            .iter()
            .filter_map(|file| {
                let found: Vec<_> = self
                    .diagnostics
                    .iter()
                    .filter(|d| d.issue.file() == Some(file.as_path()))
                    .collect();
                (!found.is_empty()).then_some((file.as_path(), found))
            })
            .collect()
    }

    /// Total number of findings across all sections.
    pub fn total_issues(&self) -> usize {
        self.diagnostics.len()
    }

    /// Whether the audit found nothing.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of findings at the given severity.
    pub fn count_severity(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}
