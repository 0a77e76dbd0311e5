use crate::server::{data::user::UserRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod add_balance;
mod find_by_discord_id;
