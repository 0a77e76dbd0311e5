//! Repository for the single active event slot.
//!
//! The slot is one row (`id = 1`) whose `event_id` points at the active world event. Claiming
//! and releasing are compare-and-swap updates on that row, so at most one event can hold it.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter,
};

use crate::server::model::world_event::EventStatus;

/// Primary key of the slot row.
pub const ACTIVE_SLOT_ID: i32 = 1;

pub struct ActiveSlotRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActiveSlotRepository<'a> {
    /// Creates a new ActiveSlotRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ActiveSlotRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the slot row if migrations have not seeded it.
    pub async fn ensure_row(&self) -> Result<(), DbErr> {
        let existing = entity::prelude::ActiveEventSlot::find_by_id(ACTIVE_SLOT_ID)
            .one(self.db)
            .await?;

        if existing.is_none() {
            entity::active_event_slot::ActiveModel {
                id: ActiveValue::Set(ACTIVE_SLOT_ID),
                event_id: ActiveValue::Set(None),
                updated_at: ActiveValue::Set(Utc::now()),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Returns the row id of the event holding the slot, if any.
    pub async fn current(&self) -> Result<Option<i32>, DbErr> {
        let slot = entity::prelude::ActiveEventSlot::find_by_id(ACTIVE_SLOT_ID)
            .one(self.db)
            .await?;

        Ok(slot.and_then(|slot| slot.event_id))
    }

    /// Claims the slot for an event.
    ///
    /// Succeeds when the slot is empty, already held by `event_id`, or held by an event that
    /// is no longer active. The last case recovers a slot left behind by an interrupted
    /// completion.
    ///
    /// # Arguments
    /// - `event_id` - Row id of the event claiming the slot
    ///
    /// # Returns
    /// - `Ok(true)` - The slot now points at `event_id`
    /// - `Ok(false)` - Another active event holds the slot
    /// - `Err(DbErr)` - Database error
    pub async fn claim(&self, event_id: i32) -> Result<bool, DbErr> {
        self.ensure_row().await?;

        if self.swap(None, Some(event_id)).await? {
            return Ok(true);
        }

        let Some(holder) = self.current().await? else {
            // Released between the two statements.
            return self.swap(None, Some(event_id)).await;
        };

        if holder == event_id {
            return Ok(true);
        }

        let holder_active = entity::prelude::WorldEvent::find_by_id(holder)
            .filter(entity::world_event::Column::Status.eq(EventStatus::Active.as_str()))
            .one(self.db)
            .await?
            .is_some();

        if holder_active {
            return Ok(false);
        }

        tracing::warn!(
            "Active slot pointed at inactive event {}; reassigning to {}",
            holder,
            event_id
        );
        self.swap(Some(holder), Some(event_id)).await
    }

    /// Releases the slot if it is held by `event_id`.
    ///
    /// # Returns
    /// - `Ok(true)` - The slot was held by `event_id` and is now empty
    /// - `Ok(false)` - The slot was empty or held by another event
    pub async fn release(&self, event_id: i32) -> Result<bool, DbErr> {
        self.swap(Some(event_id), None).await
    }

    async fn swap(&self, expected: Option<i32>, next: Option<i32>) -> Result<bool, DbErr> {
        let update = entity::prelude::ActiveEventSlot::update_many()
            .col_expr(
                entity::active_event_slot::Column::EventId,
                Expr::value(next),
            )
            .col_expr(
                entity::active_event_slot::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .filter(entity::active_event_slot::Column::Id.eq(ACTIVE_SLOT_ID));

        let update = match expected {
            Some(expected) => {
                update.filter(entity::active_event_slot::Column::EventId.eq(expected))
            }
            None => update.filter(entity::active_event_slot::Column::EventId.is_null()),
        };

        let result = update.exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
