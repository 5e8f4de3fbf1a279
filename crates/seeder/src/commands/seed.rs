//! Seed command - Provision and populate the demonstration tables.

use std::io;
use std::sync::Arc;

use common::{AppResult, DatabaseConfig};

use crate::infra::Database;
use crate::repository::SeedStore;
use crate::service::{SeedReport, Seeder};

/// Execute the seed command
pub async fn execute(config: DatabaseConfig) -> AppResult<SeedReport> {
    tracing::info!("Running seed command...");

    let db = Database::connect(&config).await?;
    let seeder = Seeder::new(Arc::new(SeedStore::new(db.shared_connection())));
    let outcome = seeder.run(&mut io::stdout()).await;

    // The store shares the connection; release it before closing
    drop(seeder);
    db.close().await;

    let report = outcome?;
    tracing::info!(
        categories = report.category_count,
        sales_orders = report.sales_order_count,
        "Seeding completed successfully"
    );
    Ok(report)
}
