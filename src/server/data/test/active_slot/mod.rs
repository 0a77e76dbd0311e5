use crate::server::data::active_slot::ActiveSlotRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, fixture};

mod claim;
mod release;
