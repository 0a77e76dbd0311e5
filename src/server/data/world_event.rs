//! World event data repository.
//!
//! Every write to an event row is conditional. Whole-record saves are guarded by the row's
//! `version`, and lifecycle transitions are guarded by the current `status`. A method that
//! loses the race reports it through its return value instead of overwriting the winner.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::{
    data::active_slot::ActiveSlotRepository,
    error::AppError,
    model::world_event::{encode_json, EventStatus, TopContributor, WorldEvent},
};

pub struct WorldEventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WorldEventRepository<'a> {
    /// Creates a new WorldEventRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `WorldEventRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new event record.
    ///
    /// The `id` of the passed event is ignored; the database assigns one. The stored version
    /// starts at whatever the event carries (zero for fresh events).
    ///
    /// # Arguments
    /// - `event` - Fully initialized event record
    ///
    /// # Returns
    /// - `Ok(WorldEvent)` - The stored event with its database id
    /// - `Err(AppError::DbErr)` - Insert failed (for example a duplicate `event_id`)
    pub async fn create(&self, event: &WorldEvent) -> Result<WorldEvent, AppError> {
        let mut model = to_active_model(event)?;
        model.event_id = ActiveValue::Set(event.event_id.clone());
        model.created_at = ActiveValue::Set(event.created_at);
        model.version = ActiveValue::Set(event.version);

        let entity = model.insert(self.db).await?;

        WorldEvent::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<WorldEvent>, AppError> {
        let entity = entity::prelude::WorldEvent::find_by_id(id)
            .one(self.db)
            .await?;

        entity.map(WorldEvent::from_entity).transpose()
    }

    pub async fn find_by_event_id(&self, event_id: &str) -> Result<Option<WorldEvent>, AppError> {
        let entity = entity::prelude::WorldEvent::find()
            .filter(entity::world_event::Column::EventId.eq(event_id))
            .one(self.db)
            .await?;

        entity.map(WorldEvent::from_entity).transpose()
    }

    /// Finds the event currently holding the active slot.
    ///
    /// A slot pointing at an event that is no longer active (for example after a crash between
    /// completion and release) is treated as empty.
    ///
    /// # Returns
    /// - `Ok(Some(WorldEvent))` - The active event
    /// - `Ok(None)` - No event is active
    /// - `Err(AppError)` - Database error or undecodable row
    pub async fn find_active(&self) -> Result<Option<WorldEvent>, AppError> {
        let Some(event_id) = ActiveSlotRepository::new(self.db).current().await? else {
            return Ok(None);
        };

        let event = self.find_by_id(event_id).await?;

        Ok(event.filter(|event| event.status == EventStatus::Active))
    }

    /// Scheduled events whose start time has passed, oldest start first.
    pub async fn find_due_scheduled(&self, now: DateTime<Utc>) -> Result<Vec<WorldEvent>, AppError> {
        let entities = entity::prelude::WorldEvent::find()
            .filter(entity::world_event::Column::Status.eq(EventStatus::Scheduled.as_str()))
            .filter(entity::world_event::Column::ScheduledStart.lte(now))
            .order_by_asc(entity::world_event::Column::ScheduledStart)
            .order_by_asc(entity::world_event::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(WorldEvent::from_entity).collect()
    }

    /// Active events whose scheduled end has passed.
    pub async fn find_expired_active(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<WorldEvent>, AppError> {
        let entities = entity::prelude::WorldEvent::find()
            .filter(entity::world_event::Column::Status.eq(EventStatus::Active.as_str()))
            .filter(entity::world_event::Column::ScheduledEnd.lte(now))
            .order_by_asc(entity::world_event::Column::ScheduledEnd)
            .all(self.db)
            .await?;

        entities.into_iter().map(WorldEvent::from_entity).collect()
    }

    /// All scheduled events ordered by start time ascending.
    pub async fn find_scheduled(&self) -> Result<Vec<WorldEvent>, AppError> {
        let entities = entity::prelude::WorldEvent::find()
            .filter(entity::world_event::Column::Status.eq(EventStatus::Scheduled.as_str()))
            .order_by_asc(entity::world_event::Column::ScheduledStart)
            .order_by_asc(entity::world_event::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(WorldEvent::from_entity).collect()
    }

    /// Completed and cancelled events, most recently ended first.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of events to return
    pub async fn find_history(&self, limit: u64) -> Result<Vec<WorldEvent>, AppError> {
        let entities = entity::prelude::WorldEvent::find()
            .filter(entity::world_event::Column::Status.is_in([
                EventStatus::Completed.as_str(),
                EventStatus::Cancelled.as_str(),
            ]))
            .order_by_desc(entity::world_event::Column::ActualEnd)
            .order_by_desc(entity::world_event::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        entities.into_iter().map(WorldEvent::from_entity).collect()
    }

    /// Writes the whole record if nobody else has written it since it was loaded.
    ///
    /// On success the event's `version` is bumped to match the stored row.
    ///
    /// # Returns
    /// - `Ok(true)` - Record written
    /// - `Ok(false)` - Stored version moved on; reload and retry
    /// - `Err(AppError)` - Database or serialization error
    pub async fn save_if_version(&self, event: &mut WorldEvent) -> Result<bool, AppError> {
        let mut model = to_active_model(event)?;
        model.version = ActiveValue::Set(event.version + 1);

        let result = entity::prelude::WorldEvent::update_many()
            .set(model)
            .filter(entity::world_event::Column::Id.eq(event.id))
            .filter(entity::world_event::Column::Version.eq(event.version))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(false);
        }

        event.version += 1;
        Ok(true)
    }

    /// Moves a scheduled event to active, stamping `actual_start`.
    ///
    /// # Returns
    /// - `Ok(true)` - This call performed the transition
    /// - `Ok(false)` - The event was not scheduled anymore
    pub async fn activate_if_scheduled(
        &self,
        id: i32,
        now: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        self.transition(
            id,
            &[EventStatus::Scheduled],
            EventStatus::Active,
            entity::world_event::Column::ActualStart,
            now,
        )
        .await
    }

    /// Moves an active event to completed, stamping `actual_end`.
    ///
    /// Only one caller can ever observe `Ok(true)` for a given event, which makes it the
    /// single owner of slot release and reward distribution.
    pub async fn complete_if_active(&self, id: i32, now: DateTime<Utc>) -> Result<bool, AppError> {
        self.transition(
            id,
            &[EventStatus::Active],
            EventStatus::Completed,
            entity::world_event::Column::ActualEnd,
            now,
        )
        .await
    }

    /// Cancels a scheduled or active event, stamping `actual_end`.
    pub async fn cancel_if_open(&self, id: i32, now: DateTime<Utc>) -> Result<bool, AppError> {
        self.transition(
            id,
            &[EventStatus::Scheduled, EventStatus::Active],
            EventStatus::Cancelled,
            entity::world_event::Column::ActualEnd,
            now,
        )
        .await
    }

    /// Records the ranked top contributors of a completed event.
    pub async fn save_top_contributors(
        &self,
        id: i32,
        top_contributors: &[TopContributor],
    ) -> Result<(), AppError> {
        let encoded = encode_json("top_contributors", &top_contributors)?;

        entity::prelude::WorldEvent::update_many()
            .col_expr(
                entity::world_event::Column::TopContributors,
                Expr::value(encoded),
            )
            .col_expr(
                entity::world_event::Column::Version,
                Expr::col(entity::world_event::Column::Version).add(1),
            )
            .filter(entity::world_event::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes an event row.
    ///
    /// # Returns
    /// - `Ok(true)` - Row deleted
    /// - `Ok(false)` - No row with that id
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::WorldEvent::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn transition(
        &self,
        id: i32,
        from: &[EventStatus],
        to: EventStatus,
        stamp: entity::world_event::Column,
        now: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let result = entity::prelude::WorldEvent::update_many()
            .col_expr(entity::world_event::Column::Status, Expr::value(to.as_str()))
            .col_expr(stamp, Expr::value(now))
            .col_expr(
                entity::world_event::Column::Version,
                Expr::col(entity::world_event::Column::Version).add(1),
            )
            .filter(entity::world_event::Column::Id.eq(id))
            .filter(
                entity::world_event::Column::Status
                    .is_in(from.iter().map(|status| status.as_str())),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

/// Builds an active model carrying every mutable column of the event.
///
/// Identity columns (`id`, `event_id`, `created_at`) and `version` are left unset.
fn to_active_model(event: &WorldEvent) -> Result<entity::world_event::ActiveModel, AppError> {
    let sub_state = match &event.sub_state {
        Some(state) => Some(encode_json("sub_state", state)?),
        None => None,
    };

    Ok(entity::world_event::ActiveModel {
        id: ActiveValue::NotSet,
        event_id: ActiveValue::NotSet,
        template_id: ActiveValue::Set(event.template_id.clone()),
        event_type: ActiveValue::Set(event.event_type.as_str().to_string()),
        name: ActiveValue::Set(event.name.clone()),
        description: ActiveValue::Set(event.description.clone()),
        emoji: ActiveValue::Set(event.emoji.clone()),
        status: ActiveValue::Set(event.status.as_str().to_string()),
        scheduled_start: ActiveValue::Set(event.scheduled_start),
        actual_start: ActiveValue::Set(event.actual_start),
        scheduled_end: ActiveValue::Set(event.scheduled_end),
        actual_end: ActiveValue::Set(event.actual_end),
        min_level: ActiveValue::Set(event.min_level),
        objectives: ActiveValue::Set(encode_json("objectives", &event.objectives)?),
        participants: ActiveValue::Set(encode_json("participants", &event.participants)?),
        sub_state: ActiveValue::Set(sub_state),
        global_rewards: ActiveValue::Set(encode_json("global_rewards", &event.global_rewards)?),
        top_contributor_rewards: ActiveValue::Set(encode_json(
            "top_contributor_rewards",
            &event.top_contributor_rewards,
        )?),
        top_contributors: ActiveValue::Set(encode_json(
            "top_contributors",
            &event.top_contributors,
        )?),
        stats: ActiveValue::Set(encode_json("stats", &event.stats)?),
        version: ActiveValue::NotSet,
        created_at: ActiveValue::NotSet,
    })
}
