//! Audit orchestration.
//!
//! [`Auditor`] loads a [`Project`] from disk and runs every registered
//! rule against it in order: required files, per-file syntax heuristics,
//! HTTP method coverage, endpoint coverage. The result is an
//! [`AuditReport`] whose `total_issues` is the sum over all sections.
//!
//! # Example
//!
//! ```
//! use zigaudit::audit::Auditor;
//! use zigaudit::config::AuditProfile;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let report = Auditor::new(temp.path(), AuditProfile::default()).run().unwrap();
//!
//! // An empty directory is missing every required file and endpoint.
//! assert_eq!(report.missing_files().len(), 7);
//! assert_eq!(report.missing_endpoints().len(), 13);
//! ```

pub mod project;
pub mod report;

use std::path::PathBuf;

pub use project::Project;
pub use report::AuditReport;

use crate::config::AuditProfile;
use crate::error::Result;
use crate::lint::{LintDiagnostic, RuleRegistry};

/// Runs the rule registry against a project directory.
pub struct Auditor {
    project_root: PathBuf,
    profile: AuditProfile,
    registry: RuleRegistry,
}

impl Auditor {
    /// Create an auditor with the built-in rules.
    pub fn new(project_root: impl Into<PathBuf>, profile: AuditProfile) -> Self {
        Self::with_registry(project_root, profile, RuleRegistry::with_builtins())
    }

    /// Create an auditor with a custom rule set.
    pub fn with_registry(
        project_root: impl Into<PathBuf>,
        profile: AuditProfile,
        registry: RuleRegistry,
    ) -> Self {
        Self {
            project_root: project_root.into(),
            profile,
            registry,
        }
    }

    /// The rules this auditor runs, in order.
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Load the project and run every rule.
    ///
    /// # Errors
    ///
    /// Fails only on conditions that abort the run (unreadable files,
    /// directory traversal errors). Findings are returned in the report.
    pub fn run(&self) -> Result<AuditReport> {
        let project = Project::load(&self.project_root, self.profile.clone())?;
        self.run_on(&project)
    }

    /// Run every rule against an already loaded project.
    pub fn run_on(&self, project: &Project) -> Result<AuditReport> {
        let mut diagnostics: Vec<LintDiagnostic> = Vec::new();

        for rule in self.registry.iter() {
            let found = rule.check(project)?;
            tracing::debug!("Rule {} produced {} diagnostic(s)", rule.id(), found.len());
            diagnostics.extend(found);
        }

        Ok(AuditReport {
            project_root: project.root().to_path_buf(),
            files_scanned: project
                .sources()
                .iter()
                .map(|f| f.relative.clone())
                .collect(),
            diagnostics,
        })
    }
}
