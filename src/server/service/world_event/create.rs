use chrono::{DateTime, Duration, Utc};

use crate::server::{
    data::{active_slot::ActiveSlotRepository, world_event::WorldEventRepository},
    error::{event::EventError, internal::InternalError, AppError},
    model::world_event::{EventStats, EventStatus, WorldEvent},
    service::{
        reward::{DistributionReport, RewardService},
        world_event::WorldEventService,
    },
};

impl<'a> WorldEventService<'a> {
    /// Instantiates an event from a catalog template.
    ///
    /// Without a start time the event starts immediately and takes the active slot. With a
    /// start time it is stored as scheduled and promoted later by the lifecycle scheduler.
    ///
    /// # Arguments
    /// - `template_id` - Catalog key of the template
    /// - `start` - Optional scheduled start
    ///
    /// # Returns
    /// - `Ok(WorldEvent)` - The stored event
    /// - `Err(EventError::NotFound)` - Unknown template
    /// - `Err(EventError::Conflict)` - Immediate start while another event is active
    pub async fn create_event(
        &self,
        template_id: &str,
        start: Option<DateTime<Utc>>,
    ) -> Result<WorldEvent, AppError> {
        let template = self
            .catalog
            .get(template_id)
            .ok_or_else(|| EventError::unknown_template(template_id))?;

        let now = self.clock.now();
        let (status, scheduled_start, actual_start) = match start {
            Some(start) => (EventStatus::Scheduled, start, None),
            None => (EventStatus::Active, now, Some(now)),
        };

        let event = WorldEvent {
            id: 0,
            event_id: format!(
                "{}-{}-{:08x}",
                template.id,
                now.timestamp(),
                self.random.id_suffix()
            ),
            template_id: template.id.clone(),
            event_type: template.event_type,
            name: template.name.clone(),
            description: template.description.clone(),
            emoji: template.emoji.clone(),
            status,
            scheduled_start,
            actual_start,
            scheduled_end: scheduled_start + Duration::hours(template.duration_hours),
            actual_end: None,
            min_level: template.min_level,
            objectives: template
                .objectives
                .iter()
                .map(|objective| objective.instantiate())
                .collect(),
            participants: Vec::new(),
            sub_state: template.initial_sub_state(),
            global_rewards: template.global_rewards.clone(),
            top_contributor_rewards: template.top_contributor_rewards.clone(),
            top_contributors: Vec::new(),
            stats: EventStats::default(),
            version: 0,
            created_at: now,
        };

        let repo = WorldEventRepository::new(self.db);
        let created = repo.create(&event).await?;

        if created.status == EventStatus::Active
            && !ActiveSlotRepository::new(self.db).claim(created.id).await?
        {
            repo.delete(created.id).await?;
            return Err(EventError::slot_taken().into());
        }

        tracing::info!(
            "Created {} event {} ({})",
            created.status,
            created.event_id,
            created.name
        );

        Ok(created)
    }

    /// Replaces whatever event is active with a new one.
    ///
    /// The current active event, if any, is completed first. Its participants receive their
    /// rewards and its slot is released before the new event is created.
    ///
    /// # Returns
    /// - `Ok(WorldEvent)` - The new event
    /// - `Err(EventError::NotFound)` - Unknown template
    pub async fn admin_create_event(
        &self,
        template_id: &str,
        start: Option<DateTime<Utc>>,
    ) -> Result<WorldEvent, AppError> {
        if self.catalog.get(template_id).is_none() {
            return Err(EventError::unknown_template(template_id).into());
        }

        let repo = WorldEventRepository::new(self.db);
        if let Some(active) = repo.find_active().await? {
            if repo.complete_if_active(active.id, self.clock.now()).await? {
                let mut completed = repo
                    .find_by_id(active.id)
                    .await?
                    .ok_or(InternalError::EventVanished(active.id))?;

                RewardService::new(self.db)
                    .settle_completion(&mut completed)
                    .await?;

                tracing::info!(
                    "Force-completed event {} to make room for {}",
                    completed.event_id,
                    template_id
                );
            } else {
                // completed concurrently; that writer settles it
                ActiveSlotRepository::new(self.db).release(active.id).await?;
            }
        }

        self.create_event(template_id, start).await
    }

    /// Ends the active event now and distributes its rewards.
    ///
    /// # Returns
    /// - `Ok((WorldEvent, DistributionReport))` - The completed event and distribution summary
    /// - `Err(EventError::NotFound)` - No active event, or it completed concurrently
    pub async fn admin_end_event(&self) -> Result<(WorldEvent, DistributionReport), AppError> {
        let repo = WorldEventRepository::new(self.db);
        let active = self.load_active().await?;

        if !repo.complete_if_active(active.id, self.clock.now()).await? {
            return Err(EventError::no_active_event().into());
        }

        let mut event = repo
            .find_by_id(active.id)
            .await?
            .ok_or(InternalError::EventVanished(active.id))?;

        let report = RewardService::new(self.db)
            .settle_completion(&mut event)
            .await?;

        tracing::info!("Admin ended event {}", event.event_id);

        Ok((event, report))
    }

    /// Cancels a scheduled or active event without rewards.
    ///
    /// # Arguments
    /// - `event_id` - Public event identifier
    ///
    /// # Returns
    /// - `Ok(WorldEvent)` - The cancelled event
    /// - `Err(EventError::NotFound)` - Unknown event id
    /// - `Err(EventError::Invalid)` - The event already finished
    pub async fn cancel_event(&self, event_id: &str) -> Result<WorldEvent, AppError> {
        let repo = WorldEventRepository::new(self.db);
        let event = repo
            .find_by_event_id(event_id)
            .await?
            .ok_or_else(|| EventError::NotFound(format!("No event with id '{}'.", event_id)))?;

        if event.status.is_final() || !repo.cancel_if_open(event.id, self.clock.now()).await? {
            return Err(EventError::Invalid(format!(
                "{} has already finished and cannot be cancelled.",
                event.name
            ))
            .into());
        }

        ActiveSlotRepository::new(self.db).release(event.id).await?;

        tracing::info!("Cancelled event {}", event.event_id);

        let cancelled = repo
            .find_by_id(event.id)
            .await?
            .ok_or(InternalError::EventVanished(event.id))?;

        Ok(cancelled)
    }
}
