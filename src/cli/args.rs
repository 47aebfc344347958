//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// zigaudit - Structure and coverage audit for a Zig HTTP client project.
#[derive(Debug, Parser)]
#[command(name = "zigaudit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to profile file (overrides default zigaudit.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Only print the summary line
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Audit the project (default if no command specified)
    Check(CheckArgs),

    /// List the built-in audit rules
    Rules(RulesArgs),

    /// Print the JSON Schema of the profile file
    Schema,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Output format: human, json, sarif
    #[arg(long, default_value = "human", value_parser = ["human", "json", "sarif"])]
    pub format: String,

    /// Exit with status 1 when any issue is found
    #[arg(long)]
    pub strict: bool,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            format: "human".to_string(),
            strict: false,
        }
    }
}

/// Arguments for the `rules` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RulesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
