use super::*;

/// Tests that repeated grants of the same item accumulate.
///
/// Expected: quantity equals the sum of all grants
#[tokio::test]
async fn accumulates_item_quantity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let discord_id: u64 = user.discord_id.parse().unwrap();

    let repo = InventoryRepository::new(db);

    assert_eq!(repo.quantity(discord_id, "dragon_scale").await?, 0);

    repo.add_item(discord_id, "dragon_scale", 2).await?;
    repo.add_item(discord_id, "dragon_scale", 3).await?;
    repo.add_item(discord_id, "meteor_shard", 1).await?;

    assert_eq!(repo.quantity(discord_id, "dragon_scale").await?, 5);
    assert_eq!(repo.quantity(discord_id, "meteor_shard").await?, 1);

    Ok(())
}
