//! Unified error handling.
//!
//! Every step of a command returns `AppResult`; the binary's top-level
//! handler logs the error and turns it into the exit status.

use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Configuration
    #[error("missing configuration value: {0}")]
    MissingConfig(&'static str),

    #[error("{0}")]
    Config(String),

    // Database
    #[cfg(feature = "database")]
    #[error("database connection to {host} failed: {source}")]
    Connection {
        host: String,
        #[source]
        source: sea_orm::DbErr,
    },

    #[cfg(feature = "database")]
    #[error("{context}: {source}")]
    Statement {
        context: String,
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("{0} returned no rows")]
    EmptyResult(String),

    // Console output
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    // Internal
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Broad error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or invalid settings, unreachable server
    Configuration,
    /// Schema creation, insert or query failure
    Statement,
    /// Writing to the console failed
    Output,
}

impl AppError {
    /// Get a stable error code for log output
    pub fn code(&self) -> &'static str {
        match self {
            AppError::MissingConfig(_) | AppError::Config(_) => "CONFIG_ERROR",
            #[cfg(feature = "database")]
            AppError::Connection { .. } => "CONNECTION_ERROR",
            #[cfg(feature = "database")]
            AppError::Statement { .. } => "STATEMENT_ERROR",
            AppError::EmptyResult(_) => "STATEMENT_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get the error category
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::MissingConfig(_) | AppError::Config(_) => ErrorKind::Configuration,
            #[cfg(feature = "database")]
            AppError::Connection { .. } => ErrorKind::Configuration,
            AppError::Io(_) => ErrorKind::Output,
            _ => ErrorKind::Statement,
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    #[cfg(feature = "database")]
    pub fn connection(host: impl Into<String>, source: sea_orm::DbErr) -> Self {
        AppError::Connection {
            host: host.into(),
            source,
        }
    }

    #[cfg(feature = "database")]
    pub fn statement(context: impl Into<String>, source: sea_orm::DbErr) -> Self {
        AppError::Statement {
            context: context.into(),
            source,
        }
    }

    pub fn empty_result(query: impl Into<String>) -> Self {
        AppError::EmptyResult(query.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
