//! Status command - Read-only report of the demonstration tables.

use std::io;
use std::sync::Arc;

use common::{AppResult, DatabaseConfig};

use crate::cli::StatusArgs;
use crate::infra::Database;
use crate::repository::SeedStore;
use crate::service::Seeder;

/// Execute the status command
pub async fn execute(args: &StatusArgs, config: DatabaseConfig) -> AppResult<()> {
    tracing::info!("Checking table status...");

    let db = Database::connect(&config).await?;
    let seeder = Seeder::new(Arc::new(SeedStore::new(db.shared_connection())));
    let outcome = seeder.status(&mut io::stdout(), args.rows).await;

    // The store shares the connection; release it before closing
    drop(seeder);
    db.close().await;

    outcome
}
