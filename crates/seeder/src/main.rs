//! Seeder - Application entry point
//!
//! Parses the CLI, loads configuration and dispatches to a command. This is
//! the only place that turns an error into a log line and an exit status.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seeder_lib::{
    cli::{Cli, Commands},
    commands, config, AppResult,
};

#[tokio::main]
async fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    // Handle errors
    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.code(), "Command failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> AppResult<()> {
    // Load configuration before any SQL is issued
    let config = config::load(cli.env_file.as_deref())?;

    match cli.selected_command() {
        Commands::Seed => commands::seed::execute(config).await.map(|_| ()),
        Commands::Status(args) => commands::status::execute(args, config).await,
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| config::DEFAULT_LOG_FILTER.to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
