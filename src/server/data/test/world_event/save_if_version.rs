use super::*;

/// Tests that a save with the loaded version succeeds and bumps the version.
///
/// Expected: Ok(true), version incremented in memory and in storage
#[tokio::test]
async fn saves_when_version_matches() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_world_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let entity = factory::create_world_event(db).await?;

    let repo = WorldEventRepository::new(db);
    let mut event = repo.find_by_id(entity.id).await?.unwrap();
    if let Some(EventSubState::Boss(boss)) = event.sub_state.as_mut() {
        boss.hp -= 100;
    }
    event.stats.total_contribution = 100;

    assert!(repo.save_if_version(&mut event).await?);
    assert_eq!(event.version, 1);

    let stored = repo.find_by_id(entity.id).await?.unwrap();
    assert_eq!(stored.version, 1);
    assert_eq!(stored.stats.total_contribution, 100);
    assert!(matches!(
        stored.sub_state,
        Some(EventSubState::Boss(ref boss)) if boss.hp == fixture::world_event::DEFAULT_BOSS_HP - 100
    ));

    Ok(())
}

/// Tests that a stale copy cannot overwrite a newer write.
///
/// Expected: Ok(false) and the first writer's data is kept
#[tokio::test]
async fn rejects_stale_version() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_world_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let entity = factory::create_world_event(db).await?;

    let repo = WorldEventRepository::new(db);
    let mut first = repo.find_by_id(entity.id).await?.unwrap();
    let mut second = first.clone();

    first.stats.total_contribution = 10;
    second.stats.total_contribution = 20;

    assert!(repo.save_if_version(&mut first).await?);
    assert!(!repo.save_if_version(&mut second).await?);
    assert_eq!(second.version, 0);

    let stored = repo.find_by_id(entity.id).await?.unwrap();
    assert_eq!(stored.stats.total_contribution, 10);

    Ok(())
}
