use crate::server::{
    data::{active_slot::ActiveSlotRepository, world_event::WorldEventRepository},
    error::AppError,
    model::world_event::{EventStatus, EventSubState, EventType, TopContributor},
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory, fixture};

mod create;
mod find_active;
mod find_by_status;
mod save_if_version;
mod top_contributors;
mod transition;
