//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`zigaudit check`, `zigaudit rules`)
//! - Shared initialization logic
//! - Consistent global flag handling

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod rules;
pub mod schema;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
