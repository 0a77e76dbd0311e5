//! Application state shared by the scheduler, the bot and command handlers.
//!
//! The state is built once during startup and cloned into every task that needs it.
//! Clones are cheap: the database handle is a pool and everything else sits behind an `Arc`.

use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::sync::Arc;

use crate::server::{
    catalog::TemplateCatalog,
    service::{
        announcement::AnnouncementService, lifecycle::LifecycleService,
        world_event::WorldEventService,
    },
    util::clock::{ClockPort, RandomPort},
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Validated event templates.
    pub catalog: Arc<TemplateCatalog>,

    pub clock: Arc<dyn ClockPort>,
    pub random: Arc<dyn RandomPort>,

    /// Discord HTTP client, present when the bot is configured.
    pub discord_http: Option<Arc<Http>>,

    /// Channel for lifecycle announcements.
    pub announcement_channel_id: Option<u64>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `catalog` - Event template catalog
    /// - `clock` - Time source for every event operation
    /// - `random` - Dice for probabilistic actions and event ids
    /// - `discord_http` - Discord HTTP client, if the bot is running
    /// - `announcement_channel_id` - Channel for lifecycle announcements, if configured
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        catalog: TemplateCatalog,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
        discord_http: Option<Arc<Http>>,
        announcement_channel_id: Option<u64>,
    ) -> Self {
        Self {
            db,
            catalog: Arc::new(catalog),
            clock,
            random,
            discord_http,
            announcement_channel_id,
        }
    }

    pub fn world_events(&self) -> WorldEventService<'_> {
        WorldEventService::new(
            &self.db,
            &self.catalog,
            self.clock.as_ref(),
            self.random.as_ref(),
        )
    }

    pub fn lifecycle(&self) -> LifecycleService<'_> {
        LifecycleService::new(&self.db, self.clock.as_ref())
    }

    /// Announcement sink, available only when both the bot and a channel are configured.
    pub fn announcements(&self) -> Option<AnnouncementService> {
        match (&self.discord_http, self.announcement_channel_id) {
            (Some(http), Some(channel_id)) => {
                Some(AnnouncementService::new(http.clone(), channel_id))
            }
            _ => None,
        }
    }
}
