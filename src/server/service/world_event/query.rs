use crate::server::{
    data::world_event::WorldEventRepository,
    error::AppError,
    model::{
        template::EventTemplate,
        world_event::{RankingEntry, WorldEvent},
    },
    service::world_event::WorldEventService,
};

impl<'a> WorldEventService<'a> {
    pub async fn get_active_event(&self) -> Result<Option<WorldEvent>, AppError> {
        WorldEventRepository::new(self.db).find_active().await
    }

    /// Upcoming events ordered by scheduled start.
    pub async fn get_scheduled_events(&self) -> Result<Vec<WorldEvent>, AppError> {
        WorldEventRepository::new(self.db).find_scheduled().await
    }

    /// Finished events, most recent first.
    pub async fn get_event_history(&self, limit: u64) -> Result<Vec<WorldEvent>, AppError> {
        WorldEventRepository::new(self.db).find_history(limit).await
    }

    /// Live ranking of the active event.
    ///
    /// # Returns
    /// - `Ok(Vec<RankingEntry>)` - Up to `limit` participants by contribution, positions from 1
    /// - `Err(EventError::NotFound)` - No active event
    pub async fn get_event_ranking(&self, limit: usize) -> Result<Vec<RankingEntry>, AppError> {
        let event = self.load_active().await?;

        Ok(event.ranking(limit))
    }

    pub fn list_templates(&self) -> &[EventTemplate] {
        self.catalog.all()
    }
}
