use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorldEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(WorldEvent::Id))
                    .col(string_uniq(WorldEvent::EventId))
                    .col(string(WorldEvent::TemplateId))
                    .col(string(WorldEvent::EventType))
                    .col(string(WorldEvent::Name))
                    .col(text(WorldEvent::Description))
                    .col(string(WorldEvent::Emoji))
                    .col(string(WorldEvent::Status))
                    .col(timestamp(WorldEvent::ScheduledStart))
                    .col(timestamp_null(WorldEvent::ActualStart))
                    .col(timestamp(WorldEvent::ScheduledEnd))
                    .col(timestamp_null(WorldEvent::ActualEnd))
                    .col(integer(WorldEvent::MinLevel).default(1))
                    .col(text(WorldEvent::Objectives))
                    .col(text(WorldEvent::Participants))
                    .col(text_null(WorldEvent::SubState))
                    .col(text(WorldEvent::GlobalRewards))
                    .col(text(WorldEvent::TopContributorRewards))
                    .col(text(WorldEvent::TopContributors))
                    .col(text(WorldEvent::Stats))
                    .col(integer(WorldEvent::Version).default(0))
                    .col(
                        timestamp(WorldEvent::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_world_event_status")
                    .table(WorldEvent::Table)
                    .col(WorldEvent::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorldEvent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WorldEvent {
    Table,
    Id,
    EventId,
    TemplateId,
    EventType,
    Name,
    Description,
    Emoji,
    Status,
    ScheduledStart,
    ActualStart,
    ScheduledEnd,
    ActualEnd,
    MinLevel,
    Objectives,
    Participants,
    SubState,
    GlobalRewards,
    TopContributorRewards,
    TopContributors,
    Stats,
    Version,
    CreatedAt,
}
