//! Database connection and initialization.

use std::sync::Arc;
use std::time::Duration;

use sea_orm::{ConnectOptions, Database as SeaDatabase, DatabaseConnection};

use common::{AppError, AppResult, DatabaseConfig};

/// Database wrapper for connection management.
///
/// Holds a pool capped at one connection, opened eagerly so that an
/// unreachable server is reported here rather than at the first query.
/// The connection is shared through an `Arc` because `DatabaseConnection`
/// is not `Clone` when sea-orm's `mock` feature is enabled.
pub struct Database {
    connection: Arc<DatabaseConnection>,
}

impl Database {
    /// Open the connection described by `config`.
    ///
    /// The pool gives up after `config.connect_timeout_secs`; without that cap
    /// sqlx keeps retrying a refused connection for half a minute.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let timeout = Duration::from_secs(config.connect_timeout_secs);

        let mut options = ConnectOptions::new(config.connection_url());
        options
            .max_connections(1)
            .min_connections(1)
            .connect_timeout(timeout)
            .acquire_timeout(timeout)
            .sqlx_logging(false);

        let connection = SeaDatabase::connect(options)
            .await
            .map_err(|e| AppError::connection(&config.host, e))?;

        tracing::info!(host = %config.host, database = %config.name, "Database connected");

        Ok(Self {
            connection: Arc::new(connection),
        })
    }

    /// Get a reference to the database connection.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    /// Get a shared handle to the database connection.
    pub fn shared_connection(&self) -> Arc<DatabaseConnection> {
        Arc::clone(&self.connection)
    }

    /// Release the connection.
    ///
    /// Every shared handle must have been dropped first. A failure here
    /// cannot change the outcome of the command, so it is only logged.
    pub async fn close(self) {
        let connection = match Arc::try_unwrap(self.connection) {
            Ok(connection) => connection,
            Err(_) => {
                tracing::warn!("Database connection still in use; leaving it to be dropped");
                return;
            }
        };

        match connection.close().await {
            Ok(()) => tracing::debug!("Database connection closed"),
            Err(e) => tracing::warn!("Failed to close database connection: {}", e),
        }
    }
}
