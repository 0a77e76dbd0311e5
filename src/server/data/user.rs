//! User ledger repository.
//!
//! Balance changes are applied as single `UPDATE ... SET coins = coins + n` statements, so
//! concurrent credits to the same user never overwrite each other.

use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

use crate::server::{error::AppError, model::user::User};

/// Repository providing database operations for the user ledger.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by their Discord ID.
    ///
    /// # Arguments
    /// - `discord_id` - Discord user ID as u64
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user found with that Discord ID
    /// - `Err(AppError)` - Database error during query
    pub async fn find_by_discord_id(&self, discord_id: u64) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(discord_id.to_string())
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Adds coins to a user's balance.
    ///
    /// # Arguments
    /// - `discord_id` - Discord user ID as u64
    /// - `amount` - Coins to add
    ///
    /// # Returns
    /// - `Ok(true)` - Balance updated
    /// - `Ok(false)` - No user with that Discord ID
    /// - `Err(AppError)` - Database error during update
    pub async fn add_coins(&self, discord_id: u64, amount: i64) -> Result<bool, AppError> {
        self.increment(discord_id, entity::user::Column::Coins, amount)
            .await
    }

    /// Adds experience to a user's balance.
    ///
    /// # Returns
    /// - `Ok(true)` - Balance updated
    /// - `Ok(false)` - No user with that Discord ID
    /// - `Err(AppError)` - Database error during update
    pub async fn add_xp(&self, discord_id: u64, amount: i64) -> Result<bool, AppError> {
        self.increment(discord_id, entity::user::Column::Xp, amount)
            .await
    }

    async fn increment(
        &self,
        discord_id: u64,
        column: entity::user::Column,
        amount: i64,
    ) -> Result<bool, AppError> {
        let result = entity::prelude::User::update_many()
            .col_expr(column, Expr::col(column).add(amount))
            .filter(entity::user::Column::DiscordId.eq(discord_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
