use super::*;
use crate::server::model::reward::Reward;

/// Tests persisting the ranked top contributors.
///
/// Expected: stored list decodes to the saved entries
#[tokio::test]
async fn saves_top_contributors() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_world_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let entity = factory::create_world_event(db).await?;

    let top = vec![TopContributor {
        rank: 1,
        discord_id: 42,
        username: "Hero".to_string(),
        contribution: 900,
        rewards: vec![Reward::coins(500)],
    }];

    let repo = WorldEventRepository::new(db);
    repo.save_top_contributors(entity.id, &top).await?;

    let stored = repo.find_by_id(entity.id).await?.unwrap();
    assert_eq!(stored.top_contributors, top);

    Ok(())
}
