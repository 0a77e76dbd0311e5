//! User ledger domain model.

use crate::server::{error::AppError, util::parse::parse_u64_from_string};

/// A player's ledger entry: display name and balances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Discord ID of the user
    pub discord_id: u64,
    /// Display name of the user.
    pub name: String,
    pub coins: i64,
    pub xp: i64,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored Discord ID is not a u64
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        Ok(Self {
            discord_id: parse_u64_from_string(entity.discord_id)?,
            name: entity.name,
            coins: entity.coins,
            xp: entity.xp,
        })
    }
}
