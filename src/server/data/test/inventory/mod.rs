use crate::server::data::inventory::InventoryRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add_item;
