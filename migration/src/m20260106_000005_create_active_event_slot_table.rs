use sea_orm_migration::{prelude::*, schema::*};

use super::m20260106_000004_create_world_event_table::WorldEvent;

/// Id of the only row in `active_event_slot`.
const ACTIVE_SLOT_ID: i32 = 1;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ActiveEventSlot::Table)
                    .if_not_exists()
                    .col(integer(ActiveEventSlot::Id).primary_key())
                    .col(integer_null(ActiveEventSlot::EventId))
                    .col(
                        timestamp(ActiveEventSlot::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_active_event_slot_event_id")
                            .from(ActiveEventSlot::Table, ActiveEventSlot::EventId)
                            .to(WorldEvent::Table, WorldEvent::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        let seed = Query::insert()
            .into_table(ActiveEventSlot::Table)
            .columns([ActiveEventSlot::Id, ActiveEventSlot::UpdatedAt])
            .values([
                Expr::val(ACTIVE_SLOT_ID).into(),
                Expr::current_timestamp().into(),
            ])
            .map_err(|e| DbErr::Custom(e.to_string()))?
            .to_owned();

        manager.exec_stmt(seed).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ActiveEventSlot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ActiveEventSlot {
    Table,
    Id,
    EventId,
    UpdatedAt,
}
