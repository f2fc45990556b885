//! Bot layer - Discord-specific interface, commands and button handlers
//!
//! This module provides the Discord interface for the `CartBuddy` application:
//! the `/cart` command, its button handling and bot startup.

/// Discord command implementations (cart, general)
pub mod commands;
/// Discord interaction handlers (cart buttons)
pub mod handlers;
/// Embeds and button rows built from the cart display model
pub mod render;

use crate::{
    config::AppConfig,
    core::{format::CurrencyFormat, store::InMemoryCart},
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;
use std::{sync::Arc, time::Duration};
use tracing::{error, info, instrument};

/// Shared data available to all bot commands.
#[derive(Debug)]
pub struct BotData {
    /// The cart every `/cart` message renders and edits
    pub cart: Arc<InMemoryCart>,
    /// Currency formatting for the rendered prices
    pub currency: CurrencyFormat,
    /// Idle time after which a cart message stops accepting clicks
    pub session_timeout: Duration,
}

impl BotData {
    /// Creates the bot state from a seeded cart and the loaded settings.
    #[must_use]
    pub fn new(cart: Arc<InMemoryCart>, config: &AppConfig) -> Self {
        Self {
            cart,
            currency: config.currency.clone(),
            session_timeout: config.session_timeout(),
        }
    }
}

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {:?}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {:?}", ctx.command().name, error);
            if let Err(e) = ctx.say(format!("An error occurred: {error}")).await {
                error!("Failed to send error message: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

/// Connects to Discord and serves commands until the client stops.
///
/// # Errors
/// Returns an error if the client cannot be built or the gateway connection
/// fails.
#[instrument(skip(token, data))]
pub async fn run_bot(token: String, data: BotData) -> Result<()> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![commands::cart(), commands::ping(), commands::help()],
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                info!("Registering commands globally...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(data)
            })
        })
        .build();

    let intents = serenity::GatewayIntents::non_privileged();

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::Client::builder(&token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| error!("Error creating client: {:?}", e))?;

    info!("Starting bot client...");
    client
        .start()
        .await
        .inspect_err(|e| error!("Client error: {:?}", e))?;

    Ok(())
}
