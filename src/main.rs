mod server;

use serenity::http::Http;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    bot,
    config::Config,
    error::AppError,
    scheduler::world_events,
    startup,
    state::AppState,
    util::clock::{SystemClock, SystemRandom},
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("world_events=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let catalog = startup::load_template_catalog(&config)?;

    let discord_http = config
        .discord_bot_token
        .as_deref()
        .map(|token| Arc::new(Http::new(token)));

    let state = AppState::new(
        db,
        catalog,
        Arc::new(SystemClock::new()),
        Arc::new(SystemRandom::new()),
        discord_http,
        config.announcement_channel_id,
    );

    tracing::info!("Starting world events service");

    match &config.discord_bot_token {
        Some(token) => {
            let bot_client = bot::start::init_bot(token, state.clone()).await?;

            tokio::spawn(async move {
                if let Err(e) = bot::start::start_bot(bot_client).await {
                    tracing::error!("Discord bot error: {}", e);
                }
            });
        }
        None => {
            tracing::info!("DISCORD_BOT_TOKEN not set; running without the Discord bot");
            if config.announcement_channel_id.is_some() {
                tracing::warn!("ANNOUNCEMENT_CHANNEL_ID is set but announcements need the bot");
            }
        }
    }

    let mut scheduler = world_events::start_scheduler(state, &config.scheduler_cron).await?;

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("Shutting down");
    scheduler.shutdown().await?;

    Ok(())
}
