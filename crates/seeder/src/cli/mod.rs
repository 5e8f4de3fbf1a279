//! CLI module - Command-line interface for the seeder.
//!
//! Provides commands for:
//! - `seed` - Create the demonstration tables and insert the seed rows (default)
//! - `status` - Report the server version and row counts without writing

pub mod args;

pub use args::{Cli, Commands, StatusArgs};
