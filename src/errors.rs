//! Unified error types for `CartBuddy`.
//!
//! The cart view itself has no failure modes; these errors cover loading
//! configuration, seeding the in-memory cart and running the Discord bot.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// A product used to seed the cart violates the line item invariants.
    #[error("Invalid product {id}: {reason}")]
    InvalidProduct {
        /// Id of the offending product
        id: i64,
        /// Which invariant was violated
        reason: String,
    },

    /// Filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required environment variable is missing or not unicode.
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Error bubbled up from serenity while talking to Discord.
    #[error("Serenity/Poise framework error: {0}")]
    #[allow(clippy::enum_variant_names)]
    FrameworkError(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::FrameworkError(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
