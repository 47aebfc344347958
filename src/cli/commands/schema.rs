//! Schema command implementation.
//!
//! The `zigaudit schema` command prints the JSON Schema of `zigaudit.yml`
//! so editors can validate and complete profile files.

use crate::config::AuditProfile;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
#[derive(Debug, Default)]
pub struct SchemaCommand;

impl SchemaCommand {
    /// Create a new schema command.
    pub fn new() -> Self {
        Self
    }

    /// Render the profile schema as pretty-printed JSON.
    pub fn render() -> Result<String> {
        let schema = schemars::schema_for!(AuditProfile);
        Ok(serde_json::to_string_pretty(&schema).map_err(anyhow::Error::from)?)
    }
}

impl Command for SchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message(&Self::render()?);
        Ok(CommandResult::success())
    }
}
