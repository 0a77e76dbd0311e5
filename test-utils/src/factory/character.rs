//! Character factory for creating test character (stats) entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test characters with customizable combat stats.
///
/// The owning user must already exist.
pub struct CharacterFactory<'a> {
    db: &'a DatabaseConnection,
    discord_id: String,
    class: String,
    level: i32,
    attack: i32,
    defense: i32,
}

impl<'a> CharacterFactory<'a> {
    /// Creates a new CharacterFactory with default values.
    ///
    /// Defaults:
    /// - class: `"warrior"`
    /// - level: `10`
    /// - attack: `50`
    /// - defense: `20`
    pub fn new(db: &'a DatabaseConnection, discord_id: impl Into<String>) -> Self {
        Self {
            db,
            discord_id: discord_id.into(),
            class: "warrior".to_string(),
            level: 10,
            attack: 50,
            defense: 20,
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    pub fn attack(mut self, attack: i32) -> Self {
        self.attack = attack;
        self
    }

    pub fn defense(mut self, defense: i32) -> Self {
        self.defense = defense;
        self
    }

    /// Builds and inserts the character entity into the database.
    pub async fn build(self) -> Result<entity::character::Model, DbErr> {
        entity::character::ActiveModel {
            discord_id: ActiveValue::Set(self.discord_id),
            class: ActiveValue::Set(self.class),
            level: ActiveValue::Set(self.level),
            attack: ActiveValue::Set(self.attack),
            defense: ActiveValue::Set(self.defense),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a character with default stats for an existing user.
pub async fn create_character(
    db: &DatabaseConnection,
    discord_id: impl Into<String>,
) -> Result<entity::character::Model, DbErr> {
    CharacterFactory::new(db, discord_id).build().await
}
