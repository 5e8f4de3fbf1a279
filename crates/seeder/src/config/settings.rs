//! Settings loaded from an optional settings file and the environment.
//!
//! The environment is read in exactly one place, `from_env`; everything
//! downstream receives a `DatabaseConfig`.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use common::{AppError, AppResult, DatabaseConfig};

use super::constants::{DEFAULT_SETTINGS_FILE, ENV_DB_SSLMODE, REQUIRED_KEYS, VALID_SSL_MODES};

/// Load key-value pairs from a settings file into the process environment.
///
/// An explicitly given file is mandatory. Without one, a `.env` file is
/// picked up if it exists; a `.env` that exists but cannot be read or
/// parsed is still an error. Variables already set in the environment are
/// never overridden. Returns the path of the file that was loaded.
pub fn load_settings_file(env_file: Option<&Path>) -> AppResult<Option<PathBuf>> {
    match env_file {
        Some(path) => {
            dotenvy::from_path(path).map_err(|e| settings_error(&path.display(), e))?;
            Ok(Some(path.to_path_buf()))
        }
        None => optional_settings(dotenvy::dotenv(), DEFAULT_SETTINGS_FILE),
    }
}

/// Accept a missing optional settings file and reject every other failure.
fn optional_settings(
    result: Result<PathBuf, dotenvy::Error>,
    name: &str,
) -> AppResult<Option<PathBuf>> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(dotenvy::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(settings_error(&name, e)),
    }
}

fn settings_error(name: &dyn std::fmt::Display, e: dotenvy::Error) -> AppError {
    AppError::config(format!("Error loading {} settings file: {}", name, e))
}

/// Build the database configuration from an arbitrary key lookup.
///
/// Unset and empty values are both reported as missing.
pub fn from_lookup<F>(lookup: F) -> AppResult<DatabaseConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let value = |key: &str| lookup(key).filter(|v| !v.is_empty());
    let required = |key: &'static str| value(key).ok_or(AppError::MissingConfig(key));

    // Arguments evaluate left to right, so the first missing key is reported
    let [user, password, host, name] = REQUIRED_KEYS.map(required);
    let mut config = DatabaseConfig::new(user?, password?, host?, name?);

    if let Some(ssl_mode) = value(ENV_DB_SSLMODE) {
        if !VALID_SSL_MODES.contains(&ssl_mode.as_str()) {
            return Err(AppError::config(format!(
                "invalid {} value: {}",
                ENV_DB_SSLMODE, ssl_mode
            )));
        }
        config = config.with_ssl_mode(ssl_mode);
    }

    Ok(config)
}

/// Build the database configuration from the process environment.
pub fn from_env() -> AppResult<DatabaseConfig> {
    from_lookup(|key| env::var(key).ok())
}

/// Load the settings file, then read the configuration from the environment.
pub fn load(env_file: Option<&Path>) -> AppResult<DatabaseConfig> {
    if let Some(path) = load_settings_file(env_file)? {
        tracing::debug!(path = %path.display(), "Settings file loaded");
    }

    let config = from_env()?;
    tracing::debug!(?config, "Configuration loaded");
    Ok(config)
}
