use crate::server::{data::character::CharacterRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod find_by_discord_id;
