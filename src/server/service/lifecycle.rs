//! Time-driven event lifecycle.
//!
//! Promotes scheduled events whose start has passed and retires active events whose end has
//! passed. Both checks are meant to run on a fixed cadence from the scheduler. Each event is
//! handled independently, so one failing event does not block the rest.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{active_slot::ActiveSlotRepository, world_event::WorldEventRepository},
    error::{internal::InternalError, AppError},
    model::world_event::WorldEvent,
    service::reward::RewardService,
    util::clock::ClockPort,
};

pub struct LifecycleService<'a> {
    db: &'a DatabaseConnection,
    clock: &'a dyn ClockPort,
}

impl<'a> LifecycleService<'a> {
    /// Creates a new LifecycleService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `clock` - Time source
    ///
    /// # Returns
    /// - `LifecycleService` - New service instance
    pub fn new(db: &'a DatabaseConnection, clock: &'a dyn ClockPort) -> Self {
        Self { db, clock }
    }

    /// Activates every scheduled event whose start time has passed.
    ///
    /// An event only starts if it can take the active slot. While another event is active, a
    /// due event stays scheduled and is retried on the next run.
    ///
    /// # Returns
    /// - `Ok(Vec<WorldEvent>)` - Events promoted by this call
    /// - `Err(AppError)` - The due events could not be listed
    pub async fn check_and_start_scheduled(&self) -> Result<Vec<WorldEvent>, AppError> {
        let now = self.clock.now();
        let due = WorldEventRepository::new(self.db)
            .find_due_scheduled(now)
            .await?;

        let mut started = Vec::new();
        for event in due {
            match self.start(&event).await {
                Ok(Some(event)) => started.push(event),
                Ok(None) => {}
                Err(e) => tracing::error!("Failed to start event {}: {}", event.event_id, e),
            }
        }

        Ok(started)
    }

    /// Completes every active event whose end time has passed and distributes its rewards.
    ///
    /// # Returns
    /// - `Ok(Vec<WorldEvent>)` - Events retired by this call, with their top contributors
    /// - `Err(AppError)` - The expired events could not be listed
    pub async fn check_and_end_expired(&self) -> Result<Vec<WorldEvent>, AppError> {
        let now = self.clock.now();
        let expired = WorldEventRepository::new(self.db)
            .find_expired_active(now)
            .await?;

        let mut ended = Vec::new();
        for event in expired {
            match self.retire(&event).await {
                Ok(Some(event)) => ended.push(event),
                Ok(None) => {}
                Err(e) => tracing::error!("Failed to end event {}: {}", event.event_id, e),
            }
        }

        Ok(ended)
    }

    async fn start(&self, event: &WorldEvent) -> Result<Option<WorldEvent>, AppError> {
        let repo = WorldEventRepository::new(self.db);
        let slots = ActiveSlotRepository::new(self.db);

        if !slots.claim(event.id).await? {
            tracing::warn!(
                "Event {} is due but another event is active; leaving it scheduled",
                event.event_id
            );
            return Ok(None);
        }

        if !repo.activate_if_scheduled(event.id, self.clock.now()).await? {
            slots.release(event.id).await?;
            return Ok(None);
        }

        let started = repo
            .find_by_id(event.id)
            .await?
            .ok_or(InternalError::EventVanished(event.id))?;

        tracing::info!("Started scheduled event {} ({})", started.event_id, started.name);

        Ok(Some(started))
    }

    async fn retire(&self, event: &WorldEvent) -> Result<Option<WorldEvent>, AppError> {
        let repo = WorldEventRepository::new(self.db);

        if !repo.complete_if_active(event.id, self.clock.now()).await? {
            tracing::debug!("Event {} already left the active state", event.event_id);
            return Ok(None);
        }

        let mut ended = repo
            .find_by_id(event.id)
            .await?
            .ok_or(InternalError::EventVanished(event.id))?;

        tracing::info!("Event {} reached its end time", ended.event_id);

        RewardService::new(self.db)
            .settle_completion(&mut ended)
            .await?;

        Ok(Some(ended))
    }
}
