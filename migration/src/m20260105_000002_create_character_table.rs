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
                    .table(Character::Table)
                    .if_not_exists()
                    .col(string(Character::DiscordId).primary_key())
                    .col(string(Character::Class))
                    .col(integer(Character::Level).default(1))
                    .col(integer(Character::Attack))
                    .col(integer(Character::Defense))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_character_discord_id")
                            .from(Character::Table, Character::DiscordId)
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
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    DiscordId,
    Class,
    Level,
    Attack,
    Defense,
}
