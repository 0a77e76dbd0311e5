use super::*;

/// Tests that the active event is resolved through the slot.
///
/// Expected: Ok(Some(event)) after the slot is claimed, Ok(None) before
#[tokio::test]
async fn finds_event_holding_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_world_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let event = factory::create_world_event(db).await?;

    let repo = WorldEventRepository::new(db);
    assert!(repo.find_active().await?.is_none());

    ActiveSlotRepository::new(db).claim(event.id).await?;

    let active = repo.find_active().await?.unwrap();
    assert_eq!(active.id, event.id);
    assert_eq!(active.status, EventStatus::Active);

    Ok(())
}

/// Tests that a slot pointing at a completed event is treated as empty.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_slot_pointing_at_completed_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_world_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let event = factory::create_world_event(db).await?;
    ActiveSlotRepository::new(db).claim(event.id).await?;

    let repo = WorldEventRepository::new(db);
    repo.complete_if_active(event.id, Utc::now()).await?;

    assert!(repo.find_active().await?.is_none());

    Ok(())
}
