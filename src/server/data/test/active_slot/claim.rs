use super::*;

/// Tests claiming an empty slot.
///
/// Verifies that the slot row is created on demand and then points at the claiming event.
///
/// Expected: Ok(true) and current() returns the event id
#[tokio::test]
async fn claims_empty_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_world_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let event = factory::create_world_event(db).await?;

    let repo = ActiveSlotRepository::new(db);

    assert_eq!(repo.current().await?, None);
    assert!(repo.claim(event.id).await?);
    assert_eq!(repo.current().await?, Some(event.id));

    Ok(())
}

/// Tests claiming a slot held by another active event.
///
/// Expected: Ok(false) and the holder is unchanged
#[tokio::test]
async fn rejects_claim_while_another_event_is_active() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_world_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let holder = factory::create_world_event(db).await?;
    let contender = factory::create_world_event(db).await?;

    let repo = ActiveSlotRepository::new(db);
    assert!(repo.claim(holder.id).await?);

    assert!(!repo.claim(contender.id).await?);
    assert_eq!(repo.current().await?, Some(holder.id));

    Ok(())
}

/// Tests that claiming twice for the same event is accepted.
///
/// Expected: Ok(true) both times
#[tokio::test]
async fn reclaim_by_holder_succeeds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_world_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let event = factory::create_world_event(db).await?;

    let repo = ActiveSlotRepository::new(db);

    assert!(repo.claim(event.id).await?);
    assert!(repo.claim(event.id).await?);

    Ok(())
}

/// Tests recovering a slot left pointing at a completed event.
///
/// Expected: Ok(true) and the slot moves to the new event
#[tokio::test]
async fn reassigns_slot_held_by_inactive_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_world_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let stale = factory::world_event::insert_world_event(
        db,
        fixture::world_event::entity_builder().status("completed"),
    )
    .await?;
    let fresh = factory::create_world_event(db).await?;

    let repo = ActiveSlotRepository::new(db);
    assert!(repo.claim(stale.id).await?);

    assert!(repo.claim(fresh.id).await?);
    assert_eq!(repo.current().await?, Some(fresh.id));

    Ok(())
}
