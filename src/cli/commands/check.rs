//! Check command implementation.
//!
//! The `zigaudit check` command audits the project tree and prints the
//! sectioned report.

use std::path::{Path, PathBuf};

use crate::audit::{AuditReport, Auditor};
use crate::cli::args::CheckArgs;
use crate::config::load_profile;
use crate::error::Result;
use crate::lint::{
    HumanFormatter, JsonFormatter, LintFormatter, OutputFormat, RuleRegistry, SarifFormatter,
};
use crate::ui::{StatusKind, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    profile_path: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            profile_path: None,
            args,
        }
    }

    /// Use an explicit profile file.
    pub fn with_profile(mut self, profile_path: Option<PathBuf>) -> Self {
        self.profile_path = profile_path;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    fn output_format(&self) -> OutputFormat {
        self.args.format.parse().unwrap_or_default()
    }

    /// Render the report in the requested format.
    fn format_output(&self, report: &AuditReport, colors: bool) -> Result<String> {
        let mut output = Vec::new();

        match self.output_format() {
            OutputFormat::Json => JsonFormatter::new().format(report, &mut output)?,
            OutputFormat::Sarif => SarifFormatter::new("zigaudit", env!("CARGO_PKG_VERSION"))
                .with_registry(RuleRegistry::with_builtins())
                .format(report, &mut output)?,
            OutputFormat::Human => HumanFormatter::new(colors).format(report, &mut output)?,
        }

        Ok(String::from_utf8_lossy(&output).into_owned())
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !self.project_root.is_dir() {
            ui.error(&format!(
                "Project directory not found: {}",
                self.project_root.display()
            ));
            return Ok(CommandResult::failure(2));
        }

        let profile = load_profile(&self.project_root, self.profile_path.as_deref())?;
        let report = Auditor::new(&self.project_root, profile).run()?;

        tracing::debug!(
            "Audit of {} found {} issue(s)",
            self.project_root.display(),
            report.total_issues()
        );

        let human = self.output_format() == OutputFormat::Human;
        if human && !ui.output_mode().shows_details() {
            match HumanFormatter::summary(&report) {
                (StatusKind::Success, text) => ui.success(&text),
                (_, text) => ui.warning(&text),
            }
        } else {
            let output = self.format_output(&report, ui.use_colors())?;
            for line in output.lines() {
                ui.message(line);
            }
        }

        if self.args.strict && !report.is_clean() {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{MockUI, OutputMode};
    use std::fs;
    use tempfile::TempDir;

    const METHODS: &str = "pub const Method = enum { GET, POST, PUT, DELETE, PATCH, HEAD, OPTIONS };";
    const ENDPOINTS: &str = "/get /post /put /delete /patch /headers /user-agent \
        /basic-auth /bearer /cookies /redirect /status /json";

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    /// A project that passes every check.
    fn clean_project() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write(root, "build.zig", "const std = @import(\"std\");\npub fn build() void {}\n");
        write(root, "src/main.zig", "const std = @import(\"std\");\n");
        write(root, "src/fetch/mod.zig", METHODS);
        write(root, "src/fetch/utils.zig", "");
        write(root, "src/fetch/examples.zig", ENDPOINTS);
        write(root, "src/fetch/test.zig", "");
        write(root, "src/fetch/README.md", "# fetch\n");
        temp
    }

    fn run(root: &Path, args: CheckArgs, ui: &mut MockUI) -> CommandResult {
        CheckCommand::new(root, args).execute(ui).unwrap()
    }

    #[test]
    fn check_command_creation() {
        let temp = TempDir::new().unwrap();
        let cmd = CheckCommand::new(temp.path(), CheckArgs::default());
        assert_eq!(cmd.project_root(), temp.path());
        assert_eq!(cmd.args().format, "human");
    }

    #[test]
    fn clean_project_passes() {
        let temp = clean_project();
        let mut ui = MockUI::new();

        let result = run(temp.path(), CheckArgs::default(), &mut ui);

        assert!(result.success);
        assert!(ui.has_message("All required files present"));
        assert!(ui.has_message("All validations passed!"));
    }

    #[test]
    fn issues_exit_zero_without_strict() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = run(temp.path(), CheckArgs::default(), &mut ui);

        assert!(result.success);
        assert!(ui.has_message("Found 21 issues that may need attention."));
    }

    #[test]
    fn strict_fails_on_issues() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let args = CheckArgs {
            strict: true,
            ..Default::default()
        };

        let result = run(temp.path(), args, &mut ui);

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn strict_passes_clean_project() {
        let temp = clean_project();
        let mut ui = MockUI::new();
        let args = CheckArgs {
            strict: true,
            ..Default::default()
        };

        assert!(run(temp.path(), args, &mut ui).success);
    }

    #[test]
    fn quiet_prints_only_summary() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::with_mode(OutputMode::Quiet);

        run(temp.path(), CheckArgs::default(), &mut ui);

        assert!(ui.messages().is_empty());
        assert!(ui.has_warning("Found 21 issues"));
    }

    #[test]
    fn quiet_clean_project_is_success_line() {
        let temp = clean_project();
        let mut ui = MockUI::with_mode(OutputMode::Quiet);

        run(temp.path(), CheckArgs::default(), &mut ui);

        assert!(ui.has_success("All validations passed!"));
    }

    #[test]
    fn json_format_is_parseable() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let args = CheckArgs {
            format: "json".to_string(),
            ..Default::default()
        };

        run(temp.path(), args, &mut ui);

        let parsed: serde_json::Value = serde_json::from_str(&ui.output()).unwrap();
        assert_eq!(parsed["summary"]["total"], 21);
    }

    #[test]
    fn json_ignores_quiet() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        let args = CheckArgs {
            format: "json".to_string(),
            ..Default::default()
        };

        run(temp.path(), args, &mut ui);

        assert!(serde_json::from_str::<serde_json::Value>(&ui.output()).is_ok());
    }

    #[test]
    fn sarif_format_is_parseable() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let args = CheckArgs {
            format: "sarif".to_string(),
            ..Default::default()
        };

        run(temp.path(), args, &mut ui);

        let parsed: serde_json::Value = serde_json::from_str(&ui.output()).unwrap();
        assert_eq!(parsed["version"], "2.1.0");
    }

    #[test]
    fn missing_project_directory_exits_two() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = run(&temp.path().join("absent"), CheckArgs::default(), &mut ui);

        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("Project directory not found"));
    }

    #[test]
    fn project_profile_is_applied() {
        let temp = clean_project();
        write(
            temp.path(),
            "zigaudit.yml",
            "required_files:\n  - build.zig\n  - README.md\n",
        );
        let mut ui = MockUI::new();

        run(temp.path(), CheckArgs::default(), &mut ui);

        assert!(ui.has_message("   - README.md"));
        assert!(ui.has_message("Found 1 issue that may need attention."));
    }
}
