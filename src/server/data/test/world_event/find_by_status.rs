use super::*;

/// Tests that only scheduled events whose start has passed are due.
///
/// Expected: the past-start event only, ordered by start
#[tokio::test]
async fn finds_due_scheduled_events() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_world_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();
    let due = factory::world_event::insert_world_event(
        db,
        fixture::world_event::entity_builder()
            .scheduled(now - Duration::minutes(5), now + Duration::hours(1)),
    )
    .await?;
    let later = factory::world_event::insert_world_event(
        db,
        fixture::world_event::entity_builder()
            .scheduled(now + Duration::hours(2), now + Duration::hours(3)),
    )
    .await?;

    let repo = WorldEventRepository::new(db);

    let due_events = repo.find_due_scheduled(now).await?;
    assert_eq!(due_events.len(), 1);
    assert_eq!(due_events[0].id, due.id);

    let scheduled: Vec<i32> = repo
        .find_scheduled()
        .await?
        .into_iter()
        .map(|event| event.id)
        .collect();
    assert_eq!(scheduled, vec![due.id, later.id]);

    Ok(())
}

/// Tests that only active events past their end are expired.
///
/// Expected: the ended active event only
#[tokio::test]
async fn finds_expired_active_events() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_world_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();
    let expired = factory::world_event::insert_world_event(
        db,
        fixture::world_event::entity_builder()
            .window(now - Duration::hours(2), now - Duration::minutes(1)),
    )
    .await?;
    factory::create_world_event(db).await?;
    factory::world_event::insert_world_event(
        db,
        fixture::world_event::entity_builder()
            .status("completed")
            .window(now - Duration::hours(2), now - Duration::minutes(1)),
    )
    .await?;

    let repo = WorldEventRepository::new(db);
    let events = repo.find_expired_active(now).await?;

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, expired.id);

    Ok(())
}

/// Tests that history lists finished events newest first and respects the limit.
///
/// Expected: the two most recently ended events, newest first
#[tokio::test]
async fn lists_history_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_world_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();
    let repo = WorldEventRepository::new(db);

    let oldest = factory::create_world_event(db).await?;
    let middle = factory::create_world_event(db).await?;
    let newest = factory::create_world_event(db).await?;
    factory::create_world_event(db).await?;

    repo.complete_if_active(oldest.id, now - Duration::hours(3)).await?;
    repo.cancel_if_open(middle.id, now - Duration::hours(2)).await?;
    repo.complete_if_active(newest.id, now - Duration::hours(1)).await?;

    let history: Vec<i32> = repo
        .find_history(2)
        .await?
        .into_iter()
        .map(|event| event.id)
        .collect();

    assert_eq!(history, vec![newest.id, middle.id]);

    Ok(())
}
