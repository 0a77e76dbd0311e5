use super::*;

/// Tests releasing the slot by its holder.
///
/// Expected: Ok(true) and the slot is empty afterwards
#[tokio::test]
async fn releases_held_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_world_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let event = factory::create_world_event(db).await?;

    let repo = ActiveSlotRepository::new(db);
    repo.claim(event.id).await?;

    assert!(repo.release(event.id).await?);
    assert_eq!(repo.current().await?, None);

    Ok(())
}

/// Tests that a non-holder cannot release the slot.
///
/// Expected: Ok(false) and the holder keeps the slot
#[tokio::test]
async fn ignores_release_by_non_holder() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_world_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let holder = factory::create_world_event(db).await?;
    let other = factory::create_world_event(db).await?;

    let repo = ActiveSlotRepository::new(db);
    repo.claim(holder.id).await?;

    assert!(!repo.release(other.id).await?);
    assert_eq!(repo.current().await?, Some(holder.id));

    Ok(())
}
