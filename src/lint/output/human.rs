//! Human-readable output formatter.
//!
//! Prints one block per report section with a pass/fail status line,
//! followed by a summary with the total issue count.

use super::LintFormatter;
use crate::audit::AuditReport;
use crate::lint::{LintDiagnostic, Section};
use crate::ui::{AuditTheme, StatusKind};
use std::io::Write;

const RULE_WIDTH: usize = 50;

/// Formats audit output for human consumption.
pub struct HumanFormatter {
    theme: AuditTheme,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        let theme = if use_color {
            AuditTheme::new()
        } else {
            AuditTheme::plain()
        };
        Self { theme }
    }

    /// Status and text of the final summary line.
    pub fn summary(report: &AuditReport) -> (StatusKind, String) {
        match report.total_issues() {
            0 => (
                StatusKind::Success,
                "All validations passed! The project looks good.".to_string(),
            ),
            1 => (
                StatusKind::Warning,
                "Found 1 issue that may need attention.".to_string(),
            ),
            n => (
                StatusKind::Warning,
                format!("Found {} issues that may need attention.", n),
            ),
        }
    }

    /// The summary line, styled.
    pub fn summary_line(&self, report: &AuditReport) -> String {
        let (status, text) = Self::summary(report);
        status.format(&self.theme, &text)
    }

    fn pass_message(section: Section, report: &AuditReport) -> String {
        match section {
            Section::Structure => "All required files present".to_string(),
            Section::Syntax => format!(
                "No syntax issues found in {} file(s)",
                report.files_scanned.len()
            ),
            Section::Methods => "All HTTP methods implemented".to_string(),
            Section::Endpoints => "All required endpoints covered".to_string(),
        }
    }

    fn fail_heading(section: Section) -> &'static str {
        match section {
            Section::Structure => "Missing files:",
            Section::Syntax => "Syntax issues:",
            Section::Methods => "Missing HTTP methods:",
            Section::Endpoints => "Missing endpoints:",
        }
    }

    fn bullet<W: Write>(&self, writer: &mut W, diag: &LintDiagnostic) -> std::io::Result<()> {
        let label = diag.issue.label();
        match diag.span.as_ref().and_then(|s| s.line) {
            Some(line) if matches!(diag.issue.section(), Section::Syntax) => writeln!(
                writer,
                "   - {} {}",
                label,
                self.theme.dim.apply_to(format!("(line {})", line))
            ),
            _ => writeln!(writer, "   - {}", label),
        }
    }

    fn format_syntax<W: Write>(&self, report: &AuditReport, writer: &mut W) -> std::io::Result<()> {
        for (file, diagnostics) in report.syntax_by_file() {
            writeln!(
                writer,
                "{}",
                StatusKind::Failed.format(&self.theme, &format!("{}:", file.display()))
            )?;
            for diag in diagnostics {
                self.bullet(writer, diag)?;
            }
        }
        Ok(())
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(&self, report: &AuditReport, writer: &mut W) -> std::io::Result<()> {
        writeln!(
            writer,
            "{}",
            self.theme.format_header(&format!(
                "Auditing {}",
                report.project_root.display()
            ))
        )?;
        writeln!(writer, "{}", self.theme.border.apply_to("=".repeat(RULE_WIDTH)))?;

        for section in Section::ALL {
            writeln!(writer)?;
            writeln!(writer, "{}", self.theme.header.apply_to(section.title()))?;

            if report.section_passed(section) {
                writeln!(
                    writer,
                    "{}",
                    StatusKind::Success.format(&self.theme, &Self::pass_message(section, report))
                )?;
                continue;
            }

            if section == Section::Syntax {
                self.format_syntax(report, writer)?;
                continue;
            }

            writeln!(
                writer,
                "{}",
                StatusKind::Failed.format(&self.theme, Self::fail_heading(section))
            )?;
            for diag in report.section(section) {
                self.bullet(writer, diag)?;
            }
        }

        writeln!(writer)?;
        writeln!(writer, "{}", self.theme.header.apply_to("Summary"))?;
        writeln!(writer, "{}", self.summary_line(report))?;

        Ok(())
    }
}
