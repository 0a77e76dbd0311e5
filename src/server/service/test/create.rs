use super::*;

/// Tests creating an event that starts immediately.
///
/// Expected: active event holding the slot, with fresh objectives and boss state
#[tokio::test]
async fn creates_active_event_from_template() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_world_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = catalog();
    let clock = clock();
    let random = FixedRandom::lucky();
    let service = WorldEventService::new(db, &catalog, &clock, &random);

    let event = service.create_event("test_boss", None).await?;

    assert_eq!(event.status, EventStatus::Active);
    assert_eq!(event.actual_start, Some(clock.now()));
    assert_eq!(event.scheduled_end, clock.now() + Duration::hours(2));
    assert!(event.event_id.starts_with("test_boss-"));
    assert_eq!(event.objectives.len(), 1);
    assert_eq!(event.objectives[0].current, 0);
    assert!(event.participants.is_empty());
    assert!(matches!(
        event.sub_state,
        Some(EventSubState::Boss(ref boss)) if boss.hp == 1000 && boss.max_hp == 1000
    ));

    let slot = ActiveSlotRepository::new(db).current().await?;
    assert_eq!(slot, Some(event.id));

    let active = service.get_active_event().await?.unwrap();
    assert_eq!(active.id, event.id);

    Ok(())
}

/// Tests creating an event with a future start.
///
/// Expected: scheduled event that does not take the slot
#[tokio::test]
async fn creates_scheduled_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_world_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = catalog();
    let clock = clock();
    let random = FixedRandom::lucky();
    let service = WorldEventService::new(db, &catalog, &clock, &random);

    let start = clock.now() + Duration::hours(3);
    let event = service.create_event("test_invasion", Some(start)).await?;

    assert_eq!(event.status, EventStatus::Scheduled);
    assert_eq!(event.scheduled_start, start);
    assert_eq!(event.actual_start, None);
    assert_eq!(event.scheduled_end, start + Duration::hours(2));

    assert!(service.get_active_event().await?.is_none());
    let scheduled = service.get_scheduled_events().await?;
    assert_eq!(scheduled.len(), 1);
    assert_eq!(scheduled[0].id, event.id);

    Ok(())
}

/// Tests that an unknown template id is reported.
///
/// Expected: Err(NotFound) naming the template
#[tokio::test]
async fn rejects_unknown_template() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_world_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = catalog();
    let clock = clock();
    let random = FixedRandom::lucky();
    let service = WorldEventService::new(db, &catalog, &clock, &random);

    let result = service.create_event("no_such_event", None).await;

    match result {
        Err(AppError::EventErr(EventError::NotFound(message))) => {
            assert!(message.contains("no_such_event"));
        }
        other => panic!("expected NotFound, got {:?}", other),
    }

    Ok(())
}

/// Tests that a second immediate event cannot start while one is active.
///
/// Expected: Err(Conflict), the rejected record is not kept
#[tokio::test]
async fn rejects_second_active_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_world_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = catalog();
    let clock = clock();
    let random = FixedRandom::lucky();
    let service = WorldEventService::new(db, &catalog, &clock, &random);

    let first = service.create_event("test_boss", None).await?;
    let result = service.create_event("test_invasion", None).await;

    assert!(matches!(
        result,
        Err(AppError::EventErr(EventError::Conflict(_)))
    ));

    let active = service.get_active_event().await?.unwrap();
    assert_eq!(active.id, first.id);
    assert!(WorldEventRepository::new(db)
        .find_by_id(first.id + 1)
        .await?
        .is_none());

    Ok(())
}

/// Tests that an admin create replaces the active event.
///
/// Expected: old event completed with its rewards distributed, new event active
#[tokio::test]
async fn admin_create_replaces_active_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_world_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = catalog();
    let clock = clock();
    let random = FixedRandom::lucky();
    let service = WorldEventService::new(db, &catalog, &clock, &random);

    let alice = player(db, 10, 50).await;
    let old = service.create_event("test_boss", None).await?;
    service.join_event(alice).await?;

    let new = service.admin_create_event("test_invasion", None).await?;

    let old = WorldEventRepository::new(db).find_by_id(old.id).await?.unwrap();
    assert_eq!(old.status, EventStatus::Completed);
    assert_eq!(old.actual_end, Some(clock.now()));
    assert_eq!(old.top_contributors.len(), 1);
    assert_eq!(old.top_contributors[0].discord_id, alice);
    // global 100 plus the top1 bonus of 500
    assert_eq!(coins(db, alice).await, 600);
    assert_eq!(
        InventoryRepository::new(db)
            .quantity(alice, "boss_token")
            .await?,
        1
    );

    assert_eq!(new.status, EventStatus::Active);
    let active = service.get_active_event().await?.unwrap();
    assert_eq!(active.id, new.id);

    Ok(())
}

/// Tests that an admin create with an unknown template leaves the active event alone.
///
/// Expected: Err(NotFound), original event still active
#[tokio::test]
async fn admin_create_with_unknown_template_keeps_active_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_world_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = catalog();
    let clock = clock();
    let random = FixedRandom::lucky();
    let service = WorldEventService::new(db, &catalog, &clock, &random);

    let current = service.create_event("test_boss", None).await?;
    let result = service.admin_create_event("missing", None).await;

    assert!(matches!(
        result,
        Err(AppError::EventErr(EventError::NotFound(_)))
    ));
    assert_eq!(service.get_active_event().await?.unwrap().id, current.id);

    Ok(())
}

/// Tests ending the active event by hand.
///
/// Expected: event completed, rewards distributed, slot free
#[tokio::test]
async fn admin_end_distributes_rewards() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_world_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = catalog();
    let clock = clock();
    let random = FixedRandom::lucky();
    let service = WorldEventService::new(db, &catalog, &clock, &random);

    let alice = player(db, 10, 50).await;
    service.create_event("test_boss", None).await?;
    service.join_event(alice).await?;
    wait_cooldown(&clock);
    service.perform_action(alice, EventAction::Attack).await?;

    clock.advance(Duration::minutes(5));
    let (event, report) = service.admin_end_event().await?;

    assert_eq!(event.status, EventStatus::Completed);
    assert_eq!(event.actual_end, Some(clock.now()));
    assert_eq!(event.top_contributors.len(), 1);
    assert_eq!(event.top_contributors[0].discord_id, alice);
    // coins + material globally, coins bonus credited, title skipped
    assert_eq!(report.credited, 3);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.failed, 0);
    assert_eq!(coins(db, alice).await, 600);

    assert!(service.get_active_event().await?.is_none());
    assert!(ActiveSlotRepository::new(db).current().await?.is_none());

    Ok(())
}

/// Tests ending when nothing is active.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn admin_end_without_active_event_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_world_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = catalog();
    let clock = clock();
    let random = FixedRandom::lucky();
    let service = WorldEventService::new(db, &catalog, &clock, &random);

    let result = service.admin_end_event().await;

    assert!(matches!(
        result,
        Err(AppError::EventErr(EventError::NotFound(_)))
    ));

    Ok(())
}

/// Tests cancelling scheduled and active events.
///
/// Expected: both cancelled, slot freed for a new event, finished events cannot be cancelled
#[tokio::test]
async fn cancels_open_events() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_world_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = catalog();
    let clock = clock();
    let random = FixedRandom::lucky();
    let service = WorldEventService::new(db, &catalog, &clock, &random);

    let scheduled = service
        .create_event("test_meteor", Some(clock.now() + Duration::hours(1)))
        .await?;
    let active = service.create_event("test_boss", None).await?;

    let cancelled = service.cancel_event(&scheduled.event_id).await?;
    assert_eq!(cancelled.status, EventStatus::Cancelled);
    assert_eq!(cancelled.actual_end, Some(clock.now()));

    let cancelled = service.cancel_event(&active.event_id).await?;
    assert_eq!(cancelled.status, EventStatus::Cancelled);
    assert!(service.get_active_event().await?.is_none());

    let again = service.cancel_event(&active.event_id).await;
    assert!(matches!(again, Err(AppError::EventErr(EventError::Invalid(_)))));

    let missing = service.cancel_event("unknown-event").await;
    assert!(matches!(missing, Err(AppError::EventErr(EventError::NotFound(_)))));

    service.create_event("test_invasion", None).await?;

    Ok(())
}

/// Tests cancelling an event that already completed.
///
/// Expected: Err(Invalid), event stays completed
#[tokio::test]
async fn rejects_cancelling_completed_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_world_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = catalog();
    let clock = clock();
    let random = FixedRandom::lucky();
    let service = WorldEventService::new(db, &catalog, &clock, &random);

    let created = service.create_event("test_invasion", None).await?;
    service.admin_end_event().await?;

    let result = service.cancel_event(&created.event_id).await;
    assert!(matches!(result, Err(AppError::EventErr(EventError::Invalid(_)))));

    let stored = WorldEventRepository::new(db)
        .find_by_id(created.id)
        .await?
        .unwrap();
    assert_eq!(stored.status, EventStatus::Completed);

    Ok(())
}
