//! World event factory for inserting events built from fixtures.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, IntoActiveModel};

use crate::fixture::world_event::WorldEventEntityBuilder;

/// Inserts a world event built with the fixture builder.
///
/// The fixture's placeholder id is discarded so the database assigns one.
///
/// # Example
///
/// ```rust,ignore
/// let event = insert_world_event(
///     &db,
///     fixture::world_event::entity_builder().invasion(2, 10),
/// )
/// .await?;
/// ```
pub async fn insert_world_event(
    db: &DatabaseConnection,
    builder: WorldEventEntityBuilder,
) -> Result<entity::world_event::Model, DbErr> {
    let mut active = builder.build().into_active_model();
    active.id = ActiveValue::NotSet;

    active.insert(db).await
}

/// Inserts the default active boss event.
pub async fn create_world_event(
    db: &DatabaseConnection,
) -> Result<entity::world_event::Model, DbErr> {
    insert_world_event(db, WorldEventEntityBuilder::new()).await
}
