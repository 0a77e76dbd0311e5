use super::*;

/// Tests that coin and XP credits accumulate on the stored balance.
///
/// Expected: balances equal the starting values plus every credit
#[tokio::test]
async fn increments_coins_and_xp() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::user::UserFactory::new(db)
        .coins(100)
        .xp(5)
        .build()
        .await?;
    let discord_id: u64 = user.discord_id.parse().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.add_coins(discord_id, 50).await?);
    assert!(repo.add_coins(discord_id, 25).await?);
    assert!(repo.add_xp(discord_id, 70).await?);

    let stored = repo.find_by_discord_id(discord_id).await?.unwrap();
    assert_eq!(stored.coins, 175);
    assert_eq!(stored.xp, 75);

    Ok(())
}

/// Tests crediting a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(!repo.add_coins(404, 10).await?);
    assert!(!repo.add_xp(404, 10).await?);

    Ok(())
}
