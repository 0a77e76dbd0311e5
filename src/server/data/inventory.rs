//! Inventory repository for material rewards.

use migration::OnConflict;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveValue, DatabaseConnection, DbErr, EntityTrait,
};

pub struct InventoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InventoryRepository<'a> {
    /// Creates a new InventoryRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `InventoryRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a quantity of an item to a user's inventory.
    ///
    /// Inserts the item row on first grant, otherwise increments the stored quantity in
    /// the same statement.
    ///
    /// # Arguments
    /// - `discord_id` - Discord user ID as u64
    /// - `item_id` - Inventory item key
    /// - `quantity` - Amount to add
    ///
    /// # Returns
    /// - `Ok(())` - Inventory updated
    /// - `Err(DbErr)` - Database error, including a missing owning user
    pub async fn add_item(
        &self,
        discord_id: u64,
        item_id: &str,
        quantity: i64,
    ) -> Result<(), DbErr> {
        entity::prelude::InventoryItem::insert(entity::inventory_item::ActiveModel {
            discord_id: ActiveValue::Set(discord_id.to_string()),
            item_id: ActiveValue::Set(item_id.to_string()),
            quantity: ActiveValue::Set(quantity),
        })
        .on_conflict(
            OnConflict::columns([
                entity::inventory_item::Column::DiscordId,
                entity::inventory_item::Column::ItemId,
            ])
            .value(
                entity::inventory_item::Column::Quantity,
                Expr::col((
                    entity::inventory_item::Entity,
                    entity::inventory_item::Column::Quantity,
                ))
                .add(quantity),
            )
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Returns how many of an item a user owns, zero if none.
    pub async fn quantity(&self, discord_id: u64, item_id: &str) -> Result<i64, DbErr> {
        let item = entity::prelude::InventoryItem::find_by_id((
            discord_id.to_string(),
            item_id.to_string(),
        ))
        .one(self.db)
        .await?;

        Ok(item.map(|item| item.quantity).unwrap_or(0))
    }
}
