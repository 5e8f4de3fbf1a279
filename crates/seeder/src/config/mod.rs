//! Seeder configuration module
//!
//! Handles the settings file, environment variables and related constants.

mod constants;
pub mod settings;

pub use constants::*;
pub use settings::{from_env, from_lookup, load, load_settings_file};
