//! Ready event handler.
//!
//! Fired once per gateway connection after the handshake. The handler logs the connection
//! and shows the running world event, if any, as the bot's activity.

use serenity::all::{ActivityData, Context, Ready};

use crate::server::{model::world_event::WorldEvent, state::AppState};

const IDLE_ACTIVITY: &str = "Waiting for the next world event";

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Shared application state used to look up the active event
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &AppState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    let active = match state.world_events().get_active_event().await {
        Ok(active) => active,
        Err(e) => {
            tracing::error!("Failed to load active event for bot activity: {}", e);
            None
        }
    };

    ctx.set_activity(Some(activity_for(active.as_ref())));
}

fn activity_for(active: Option<&WorldEvent>) -> ActivityData {
    match active {
        Some(event) => ActivityData::playing(activity_text(event)),
        None => ActivityData::custom(IDLE_ACTIVITY),
    }
}

fn activity_text(event: &WorldEvent) -> String {
    format!("{} {}", event.emoji, event.name)
}
