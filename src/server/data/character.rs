//! Character stats repository.

use sea_orm::{DatabaseConnection, EntityTrait};

use crate::server::{error::AppError, model::character::CharacterStats};

pub struct CharacterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterRepository<'a> {
    /// Creates a new CharacterRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CharacterRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the character owned by a Discord user.
    ///
    /// # Arguments
    /// - `discord_id` - Discord user ID as u64
    ///
    /// # Returns
    /// - `Ok(Some(CharacterStats))` - Character found
    /// - `Ok(None)` - The user has no character
    /// - `Err(AppError)` - Database error during query
    pub async fn find_by_discord_id(
        &self,
        discord_id: u64,
    ) -> Result<Option<CharacterStats>, AppError> {
        let entity = entity::prelude::Character::find_by_id(discord_id.to_string())
            .one(self.db)
            .await?;

        entity.map(CharacterStats::from_entity).transpose()
    }
}
