//! Configuration keys and defaults.

// =============================================================================
// Environment variables
// =============================================================================

/// Database user name
pub const ENV_DB_USER: &str = "DB_USER";

/// Database password
pub const ENV_DB_PASSWORD: &str = "DB_PASSWORD";

/// Database host, optionally with `:port`
pub const ENV_DB_HOST: &str = "DB_HOST";

/// Database name
pub const ENV_DB_NAME: &str = "DB_NAME";

/// Optional `sslmode` override
pub const ENV_DB_SSLMODE: &str = "DB_SSLMODE";

/// Required keys, in the order they are checked
pub const REQUIRED_KEYS: [&str; 4] = [ENV_DB_USER, ENV_DB_PASSWORD, ENV_DB_HOST, ENV_DB_NAME];

/// `sslmode` values accepted by libpq-compatible clients
pub const VALID_SSL_MODES: &[&str] = &["disable", "allow", "prefer", "require", "verify-ca", "verify-full"];

/// Settings file looked up in the working directory and its parents
pub const DEFAULT_SETTINGS_FILE: &str = ".env";

// =============================================================================
// Logging
// =============================================================================

/// Log filter used when neither `--verbose` nor `RUST_LOG` is given
pub const DEFAULT_LOG_FILTER: &str = "info";
