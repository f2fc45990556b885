//! Environment lookups: bot token and settings file location.
//!
//! Values come from the process environment, which `main` first populates
//! from an optional `.env` file.

use crate::errors::Result;
use std::path::PathBuf;

/// Settings file used when `CART_CONFIG_PATH` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Location of the settings file, from `CART_CONFIG_PATH` or `./config.toml`.
#[must_use]
pub fn config_path() -> PathBuf {
    std::env::var("CART_CONFIG_PATH")
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
}

/// Discord bot token from `DISCORD_BOT_TOKEN`.
///
/// # Errors
/// Returns [`crate::errors::Error::EnvVar`] if the variable is missing.
pub fn discord_token() -> Result<String> {
    Ok(std::env::var("DISCORD_BOT_TOKEN")?)
}
