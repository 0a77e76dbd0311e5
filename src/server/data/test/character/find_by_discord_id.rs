use super::*;

/// Tests loading a character's combat stats.
///
/// Expected: Ok(Some(CharacterStats)) with the stored stats
#[tokio::test]
async fn finds_character_stats() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, _) = factory::helpers::create_player_with_attack(db, 15, 80).await?;
    let discord_id: u64 = user.discord_id.parse().unwrap();

    let repo = CharacterRepository::new(db);
    let character = repo.find_by_discord_id(discord_id).await?.unwrap();

    assert_eq!(character.discord_id, discord_id);
    assert_eq!(character.level, 15);
    assert_eq!(character.attack, 80);

    Ok(())
}

/// Tests that a user without a character yields None.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_character() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = CharacterRepository::new(db);

    assert!(repo
        .find_by_discord_id(user.discord_id.parse().unwrap())
        .await?
        .is_none());

    Ok(())
}
