use sea_orm::entity::prelude::*;

/// Persisted world event.
///
/// List and struct valued parts of the aggregate (objectives, participants, type-specific
/// sub-state, reward tables, stats) are stored as JSON text and decoded by the service crate.
/// `version` is bumped on every write and is used as the optimistic concurrency token.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "world_event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub event_id: String,
    pub template_id: String,
    pub event_type: String,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub emoji: String,
    pub status: String,
    pub scheduled_start: DateTimeUtc,
    pub actual_start: Option<DateTimeUtc>,
    pub scheduled_end: DateTimeUtc,
    pub actual_end: Option<DateTimeUtc>,
    pub min_level: i32,
    #[sea_orm(column_type = "Text")]
    pub objectives: String,
    #[sea_orm(column_type = "Text")]
    pub participants: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub sub_state: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub global_rewards: String,
    #[sea_orm(column_type = "Text")]
    pub top_contributor_rewards: String,
    #[sea_orm(column_type = "Text")]
    pub top_contributors: String,
    #[sea_orm(column_type = "Text")]
    pub stats: String,
    pub version: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
