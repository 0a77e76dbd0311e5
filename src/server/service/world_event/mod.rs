//! World event service.
//!
//! `WorldEventService` is the entry point for every player and admin operation on world
//! events. The shared event record is changed through a load, mutate and conditional-save loop:
//! when the save loses to a concurrent writer the operation reloads and re-applies its change,
//! up to `MAX_WRITE_ATTEMPTS` times.
//!
//! The service is organized into separate modules by concern:
//! - `create` - Event creation, admin swaps and cancellation
//! - `participation` - Joining the active event
//! - `action` - Player actions against the active event
//! - `query` - Read-only views
//! - `engine` - Pure action application
//! - `kind` - Per-type action behaviour

pub mod action;
pub mod create;
pub mod engine;
pub mod kind;
pub mod participation;
pub mod query;

use sea_orm::DatabaseConnection;

use crate::server::{
    catalog::TemplateCatalog,
    data::world_event::WorldEventRepository,
    error::{event::EventError, AppError},
    model::world_event::WorldEvent,
    util::clock::{ClockPort, RandomPort},
};

/// Attempts at a conditional save before giving up with `Conflict`.
pub const MAX_WRITE_ATTEMPTS: usize = 5;

pub struct WorldEventService<'a> {
    db: &'a DatabaseConnection,
    catalog: &'a TemplateCatalog,
    clock: &'a dyn ClockPort,
    random: &'a dyn RandomPort,
}

impl<'a> WorldEventService<'a> {
    /// Creates a new WorldEventService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `catalog` - Validated event template catalog
    /// - `clock` - Time source
    /// - `random` - Source for success rolls and id suffixes
    ///
    /// # Returns
    /// - `WorldEventService` - New service instance
    pub fn new(
        db: &'a DatabaseConnection,
        catalog: &'a TemplateCatalog,
        clock: &'a dyn ClockPort,
        random: &'a dyn RandomPort,
    ) -> Self {
        Self {
            db,
            catalog,
            clock,
            random,
        }
    }

    /// Loads the active event or fails with `NotFound`.
    async fn load_active(&self) -> Result<WorldEvent, AppError> {
        WorldEventRepository::new(self.db)
            .find_active()
            .await?
            .ok_or_else(|| EventError::no_active_event().into())
    }
}
