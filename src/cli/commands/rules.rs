//! Rules command implementation.
//!
//! The `zigaudit rules` command lists the built-in audit rules.

use serde::Serialize;

use crate::cli::args::RulesArgs;
use crate::error::Result;
use crate::lint::{RuleRegistry, Section};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The rules command implementation.
pub struct RulesCommand {
    args: RulesArgs,
}

#[derive(Serialize)]
struct RuleInfo {
    id: String,
    name: String,
    section: Section,
    severity: String,
    description: String,
}

impl RulesCommand {
    /// Create a new rules command.
    pub fn new(args: RulesArgs) -> Self {
        Self { args }
    }

    fn collect(registry: &RuleRegistry) -> Vec<RuleInfo> {
        registry
            .iter()
            .map(|rule| RuleInfo {
                id: rule.id().0,
                name: rule.name().to_string(),
                section: rule.section(),
                severity: rule.default_severity().to_string(),
                description: rule.description().to_string(),
            })
            .collect()
    }
}

impl Command for RulesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let rules = Self::collect(&RuleRegistry::with_builtins());

        if self.args.json {
            let json = serde_json::to_string_pretty(&rules).map_err(anyhow::Error::from)?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        let width = rules.iter().map(|r| r.id.len()).max().unwrap_or(0);
        for rule in &rules {
            ui.message(&format!(
                "{:<width$}  {:<9} {:<7}  {}",
                rule.id,
                rule.section.to_string(),
                rule.severity,
                rule.description,
                width = width
            ));
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn lists_every_builtin_rule() {
        let mut ui = MockUI::new();
        let result = RulesCommand::new(RulesArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(ui.messages().len(), 6);
        assert!(ui.messages()[0].starts_with("required-files"));
        assert!(ui.messages()[5].starts_with("endpoint-coverage"));
    }

    #[test]
    fn json_output() {
        let mut ui = MockUI::new();
        RulesCommand::new(RulesArgs { json: true })
            .execute(&mut ui)
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&ui.output()).unwrap();
        let rules = parsed.as_array().unwrap();
        assert_eq!(rules.len(), 6);
        assert_eq!(rules[3]["id"], "delimiter-balance");
        assert_eq!(rules[3]["section"], "syntax");
        assert_eq!(rules[3]["severity"], "error");
    }
}
