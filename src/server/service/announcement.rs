//! Lifecycle announcements posted to a Discord channel.

use serenity::{
    all::{ChannelId, CreateMessage},
    http::Http,
};
use std::sync::Arc;

use crate::server::{error::AppError, model::world_event::WorldEvent};

pub struct AnnouncementService {
    http: Arc<Http>,
    channel_id: ChannelId,
}

impl AnnouncementService {
    /// Creates a new AnnouncementService instance.
    ///
    /// # Arguments
    /// - `http` - Arc-wrapped Discord HTTP client
    /// - `channel_id` - Channel that receives announcements
    ///
    /// # Returns
    /// - `AnnouncementService` - New service instance
    pub fn new(http: Arc<Http>, channel_id: u64) -> Self {
        Self {
            http,
            channel_id: ChannelId::new(channel_id),
        }
    }

    pub async fn announce_started(&self, event: &WorldEvent) -> Result<(), AppError> {
        self.post(started_message(event)).await
    }

    pub async fn announce_completed(&self, event: &WorldEvent) -> Result<(), AppError> {
        self.post(completed_message(event)).await
    }

    async fn post(&self, content: String) -> Result<(), AppError> {
        let message = CreateMessage::new().content(content);
        self.channel_id.send_message(&self.http, message).await?;

        Ok(())
    }
}

pub fn started_message(event: &WorldEvent) -> String {
    format!(
        "{} **{}** has begun! {} Ends <t:{}:R>. Join with /event join.",
        event.emoji,
        event.name,
        event.description,
        event.scheduled_end.timestamp()
    )
}

pub fn completed_message(event: &WorldEvent) -> String {
    match event.top_contributors.first() {
        Some(top) => format!(
            "{} **{}** has ended! {} participants took part. Top contributor: {} with {} points.",
            event.emoji, event.name, event.stats.total_participants, top.username, top.contribution
        ),
        None => format!(
            "{} **{}** has ended with no participants.",
            event.emoji, event.name
        ),
    }
}
