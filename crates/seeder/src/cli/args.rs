//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Provision and seed the Category and SalesOrder demonstration tables
#[derive(Parser, Debug)]
#[command(name = "seeder")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file to load; when given it must exist
    #[arg(short, long, global = true, env = "SEEDER_ENV_FILE")]
    pub env_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Create the tables if missing and insert the seed rows
    Seed,

    /// Show server version and table row counts
    Status(StatusArgs),
}

/// Arguments for the status command
#[derive(Parser, Debug, PartialEq, Eq)]
pub struct StatusArgs {
    /// List every row of the existing tables
    #[arg(long)]
    pub rows: bool,
}

impl Cli {
    /// The requested command, defaulting to `seed`.
    pub fn selected_command(&self) -> &Commands {
        self.command.as_ref().unwrap_or(&Commands::Seed)
    }
}
