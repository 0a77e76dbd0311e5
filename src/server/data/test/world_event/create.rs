use super::*;

/// Tests that a stored event round-trips through the repository.
///
/// Verifies that JSON columns written by `create` decode back into the same domain values
/// and that the database assigns an id.
///
/// Expected: Ok(WorldEvent) equal to the input apart from the id
#[tokio::test]
async fn creates_event_with_json_columns() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_world_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let template = crate::server::model::world_event::WorldEvent::from_entity(
        fixture::world_event::entity_builder()
            .invasion(3, 20)
            .build(),
    )?;

    let repo = WorldEventRepository::new(db);
    let created = repo.create(&template).await?;

    assert!(created.id > 0);
    assert_eq!(created.event_type, EventType::Invasion);
    assert_eq!(created.objectives, template.objectives);
    assert_eq!(created.sub_state, template.sub_state);
    assert_eq!(created.top_contributor_rewards, template.top_contributor_rewards);

    let found = repo.find_by_event_id(&template.event_id).await?.unwrap();
    assert_eq!(found.id, created.id);

    Ok(())
}

/// Tests that an unknown id yields None.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_world_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WorldEventRepository::new(db);

    assert!(repo.find_by_id(9999).await?.is_none());
    assert!(repo.find_by_event_id("missing").await?.is_none());

    Ok(())
}

/// Tests deleting an event row.
///
/// Expected: Ok(true) once, then Ok(false)
#[tokio::test]
async fn deletes_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_world_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let event = factory::create_world_event(db).await?;

    let repo = WorldEventRepository::new(db);

    assert!(repo.delete(event.id).await?);
    assert!(!repo.delete(event.id).await?);
    assert!(repo.find_by_id(event.id).await?.is_none());

    Ok(())
}

/// Tests that a corrupt JSON column surfaces as an internal error.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn reports_corrupt_json_column() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_world_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let event = factory::world_event::insert_world_event(
        db,
        fixture::world_event::entity_builder().participants(serde_json::json!("oops")),
    )
    .await?;

    let repo = WorldEventRepository::new(db);
    let result = repo.find_by_id(event.id).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
