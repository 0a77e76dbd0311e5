use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InventoryItem::Table)
                    .if_not_exists()
                    .col(string(InventoryItem::DiscordId))
                    .col(string(InventoryItem::ItemId))
                    .col(big_integer(InventoryItem::Quantity).default(0))
                    .primary_key(
                        Index::create()
                            .col(InventoryItem::DiscordId)
                            .col(InventoryItem::ItemId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inventory_item_discord_id")
                            .from(InventoryItem::Table, InventoryItem::DiscordId)
                            .to(User::Table, User::DiscordId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InventoryItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum InventoryItem {
    Table,
    DiscordId,
    ItemId,
    Quantity,
}
