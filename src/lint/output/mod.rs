//! Report output formatters.
//!
//! This module provides formatters for rendering an [`AuditReport`]
//! in different formats (human-readable, JSON, SARIF).

pub mod human;
pub mod json;
pub mod sarif;

use crate::audit::AuditReport;
use std::io::Write;
use std::str::FromStr;

/// Output format for audit results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
    Sarif,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            "sarif" => Ok(Self::Sarif),
            _ => Err(format!("unknown output format: {}", s)),
        }
    }
}

/// Trait for formatting audit output.
pub trait LintFormatter {
    /// Format the report to the given writer.
    fn format<W: Write>(&self, report: &AuditReport, writer: &mut W) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
pub use sarif::SarifFormatter;
