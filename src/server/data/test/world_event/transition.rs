use super::*;

/// Tests that only one caller wins the active to completed transition.
///
/// Expected: first call Ok(true), second call Ok(false), status completed with actual_end
#[tokio::test]
async fn completes_active_event_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_world_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let entity = factory::create_world_event(db).await?;
    let now = Utc::now();

    let repo = WorldEventRepository::new(db);

    assert!(repo.complete_if_active(entity.id, now).await?);
    assert!(!repo.complete_if_active(entity.id, now).await?);

    let stored = repo.find_by_id(entity.id).await?.unwrap();
    assert_eq!(stored.status, EventStatus::Completed);
    assert!(stored.actual_end.is_some());
    assert_eq!(stored.version, 1);

    Ok(())
}

/// Tests promoting a scheduled event.
///
/// Expected: Ok(true) with actual_start set, then Ok(false) on repeat
#[tokio::test]
async fn activates_scheduled_event_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_world_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();
    let entity = factory::world_event::insert_world_event(
        db,
        fixture::world_event::entity_builder().scheduled(now, now + Duration::hours(1)),
    )
    .await?;

    let repo = WorldEventRepository::new(db);

    assert!(repo.activate_if_scheduled(entity.id, now).await?);
    assert!(!repo.activate_if_scheduled(entity.id, now).await?);

    let stored = repo.find_by_id(entity.id).await?.unwrap();
    assert_eq!(stored.status, EventStatus::Active);
    assert!(stored.actual_start.is_some());

    Ok(())
}

/// Tests that finished events cannot be cancelled.
///
/// Expected: Ok(false) for a completed event, Ok(true) for a scheduled one
#[tokio::test]
async fn cancels_only_open_events() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_world_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();
    let completed = factory::world_event::insert_world_event(
        db,
        fixture::world_event::entity_builder().status("completed"),
    )
    .await?;
    let scheduled = factory::world_event::insert_world_event(
        db,
        fixture::world_event::entity_builder()
            .scheduled(now + Duration::hours(1), now + Duration::hours(2)),
    )
    .await?;

    let repo = WorldEventRepository::new(db);

    assert!(!repo.cancel_if_open(completed.id, now).await?);
    assert!(repo.cancel_if_open(scheduled.id, now).await?);

    let stored = repo.find_by_id(scheduled.id).await?.unwrap();
    assert_eq!(stored.status, EventStatus::Cancelled);

    Ok(())
}
