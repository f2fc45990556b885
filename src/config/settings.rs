//! Application settings loading from config.toml
//!
//! The settings file holds the currency format, the products the cart starts
//! with and how long a rendered cart keeps its buttons active. Every key is
//! optional, so an empty file yields a usable configuration.

use crate::{
    core::{format::CurrencyFormat, product::Product},
    errors::{Error, Result},
};
use serde::Deserialize;
use std::{path::Path, time::Duration};

/// Default idle time before a rendered cart stops accepting clicks.
pub const DEFAULT_SESSION_TIMEOUT_SECS: u64 = 300;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Currency formatting for prices, subtotals and totals
    #[serde(default)]
    pub currency: CurrencyFormat,
    /// Products the cart is seeded with, in display order
    #[serde(default)]
    pub cart: Vec<Product>,
    /// Seconds of inactivity after which cart buttons are removed
    #[serde(default = "default_session_timeout_secs")]
    pub session_timeout_secs: u64,
}

const fn default_session_timeout_secs() -> u64 {
    DEFAULT_SESSION_TIMEOUT_SECS
}

impl AppConfig {
    /// Idle timeout of an interactive cart message.
    #[must_use]
    pub const fn session_timeout(&self) -> Duration {
        Duration::from_secs(self.session_timeout_secs)
    }
}

/// Loads the application configuration from a TOML file
///
/// # Arguments
/// * `path` - Path to the config.toml file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - A field has the wrong type
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);

    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path_ref:?}: {e}"),
    })?;

    parse_config(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse TOML from config file {path_ref:?}: {e}"),
    })
}

fn parse_config(contents: &str) -> std::result::Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            session_timeout_secs = 60

            [currency]
            symbol = "$"
            decimal_separator = "."
            thousands_separator = ","
            space_after_symbol = false

            [[cart]]
            id = 1
            title = "Tênis de Caminhada"
            price = 179.9
            image = "https://example.com/1.jpg"
            amount = 2

            [[cart]]
            id = 2
            title = "Tênis VR Caminhada"
            price = 139.9
            image = "https://example.com/2.jpg"
            amount = 1
        "#;

        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.session_timeout(), Duration::from_secs(60));
        assert_eq!(config.currency, CurrencyFormat::usd());
        assert_eq!(config.cart.len(), 2);
        assert_eq!(config.cart[0].title, "Tênis de Caminhada");
        assert_eq!(config.cart[0].price, 179.9);
        assert_eq!(config.cart[0].amount, 2);
        assert_eq!(config.cart[1].id, 2);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert!(config.cart.is_empty());
        assert_eq!(config.currency, CurrencyFormat::brl());
        assert_eq!(config.session_timeout_secs, DEFAULT_SESSION_TIMEOUT_SECS);
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let toml_str = r#"
            [[cart]]
            id = 1
            title = "A"
            price = 1.0
            image = "https://example.com/1.jpg"
            amount = -1
        "#;
        assert!(parse_config(toml_str).is_err());
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = load_config("definitely/not/here/config.toml");
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
