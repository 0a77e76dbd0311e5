//! Character stats consumed by the action engine.

use crate::server::{error::AppError, util::parse::parse_u64_from_string};

/// Combat stats of a player's character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterStats {
    pub discord_id: u64,
    pub class: String,
    pub level: i32,
    pub attack: i32,
    pub defense: i32,
}

impl CharacterStats {
    /// Converts an entity model to character stats at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(CharacterStats)` - The converted stats
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored Discord ID is not a u64
    pub fn from_entity(entity: entity::character::Model) -> Result<Self, AppError> {
        Ok(Self {
            discord_id: parse_u64_from_string(entity.discord_id)?,
            class: entity.class,
            level: entity.level,
            attack: entity.attack,
            defense: entity.defense,
        })
    }
}
