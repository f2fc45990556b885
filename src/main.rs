use cart_buddy::{
    bot::{self, BotData},
    config::{self, env},
    core::store::InMemoryCart,
    errors::Result,
};
use dotenvy::dotenv;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the application configuration
    let config_path = env::config_path();
    let app_config = config::load_config(&config_path)
        .inspect(|_| info!("Loaded configuration from {:?}", config_path))
        .inspect_err(|e| error!("Critical error loading application configuration: {}", e))?;

    // 4. Seed the cart
    let cart = InMemoryCart::from_products(app_config.cart.iter().cloned())
        .inspect_err(|e| error!("Failed to seed cart: {}", e))?;

    // 5. Run the bot
    let token =
        env::discord_token().inspect_err(|e| error!("DISCORD_BOT_TOKEN not found: {}", e))?;
    let data = BotData::new(Arc::new(cart), &app_config);

    bot::run_bot(token, data).await
}
