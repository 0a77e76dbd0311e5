use serenity::all::{Client, GatewayIntents};

use crate::server::{bot::handler::Handler, error::AppError, state::AppState};

/// Builds the Discord client without connecting
///
/// `state` should already carry its Discord HTTP client so handlers see the same state as
/// the scheduler.
///
/// # Arguments
/// - `token` - Discord bot token
/// - `state` - Application state handed to the event handler
///
/// # Returns
/// - `Ok(Client)` - Client ready to start
/// - `Err(AppError::DiscordErr)` - Client could not be built
pub async fn init_bot(token: &str, state: AppState) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS;

    let client = Client::builder(token, intents)
        .event_handler(Handler::new(state))
        .await?;

    Ok(client)
}

/// Runs the gateway connection until it shuts down
///
/// Call from within a `tokio::spawn` task; this does not return while the bot is connected.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
