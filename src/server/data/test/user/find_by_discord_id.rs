use super::*;

/// Tests finding an existing user by Discord ID.
///
/// Expected: Ok(Some(User)) with matching ledger data
#[tokio::test]
async fn finds_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::user::UserFactory::new(db)
        .discord_id("123456789")
        .name("TestUser")
        .coins(40)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_discord_id(123456789).await?.unwrap();

    assert_eq!(user.discord_id, 123456789);
    assert_eq!(user.name, "TestUser");
    assert_eq!(user.coins, 40);
    assert_eq!(user.xp, 0);

    Ok(())
}

/// Tests querying for a non-existent user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.find_by_discord_id(999999999).await?.is_none());

    Ok(())
}
