//! Database seeder library
//!
//! Connects to PostgreSQL, prints the server version, creates the
//! `Category` and `SalesOrder` demonstration tables when they are missing,
//! inserts a fixed set of rows into each and reports the row counts.
//!
//! # Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Settings file and environment loading
//! - **infra**: Database connection and SQL statements
//! - **repository**: Data access behind the `SeedRepository` trait
//! - **service**: The seeding sequence
//!
//! # CLI Usage
//!
//! ```bash
//! # Seed using .env in the working directory, if present
//! cargo run --bin seeder
//!
//! # Seed with a mandatory settings file
//! cargo run --bin seeder -- --env-file prod.env seed
//!
//! # Show row counts and rows without writing
//! cargo run --bin seeder -- status --rows
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

// Re-export commonly used types at crate root
pub use common::{AppError, AppResult, DatabaseConfig};
pub use infra::Database;
pub use repository::{SeedRepository, SeedStore};
pub use service::{SeedReport, Seeder};
