/// Environment variables (bot token, settings path)
pub mod env;

/// Application settings loading from config.toml
pub mod settings;

pub use settings::{AppConfig, load_config};
