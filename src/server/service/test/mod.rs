use chrono::{Duration, SubsecRound, Utc};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory, fixture};

use crate::server::{
    catalog::TemplateCatalog,
    data::{
        active_slot::ActiveSlotRepository, inventory::InventoryRepository, user::UserRepository,
        world_event::WorldEventRepository,
    },
    error::{event::EventError, AppError},
    model::world_event::{EventAction, EventStatus, EventSubState},
    service::{
        lifecycle::LifecycleService, reward::RewardService, world_event::WorldEventService,
    },
    util::clock::{ClockPort, FixedClock, FixedRandom},
};

mod create;

/// Small catalog with round numbers so expected values are easy to derive.
const TEST_TEMPLATES: &str = r#"[
  {
    "id": "test_boss",
    "type": "boss_world",
    "name": "Test Boss",
    "description": "A boss for tests.",
    "emoji": "B",
    "duration_hours": 2,
    "min_level": 5,
    "cooldown_hours": 0,
    "objectives": [
      { "id": "deal_damage", "description": "Deal 1000 damage", "metric": "damage", "target": 1000 }
    ],
    "global_rewards": [
      { "type": "coins", "amount": 100 },
      { "type": "material", "amount": 1, "item_id": "boss_token" }
    ],
    "top_contributor_rewards": {
      "top1": [{ "type": "coins", "amount": 500 }, { "type": "title", "amount": 1, "item_id": "slayer" }],
      "top3": [{ "type": "coins", "amount": 250 }],
      "top10": [{ "type": "coins", "amount": 100 }]
    },
    "boss_config": { "hp": 1000, "attack": 50, "defense": 10 }
  },
  {
    "id": "test_invasion",
    "type": "invasion",
    "name": "Test Invasion",
    "description": "An invasion for tests.",
    "emoji": "I",
    "duration_hours": 2,
    "min_level": 1,
    "cooldown_hours": 0,
    "objectives": [
      { "id": "repel", "description": "Defeat 20 monsters", "metric": "kills", "target": 20 }
    ],
    "global_rewards": [{ "type": "coins", "amount": 50 }],
    "top_contributor_rewards": { "top1": [{ "type": "coins", "amount": 200 }] },
    "invasion_config": { "total_waves": 2, "monsters_per_wave": 10 }
  },
  {
    "id": "test_treasure",
    "type": "treasure_hunt",
    "name": "Test Treasure",
    "description": "A treasure hunt for tests.",
    "emoji": "T",
    "duration_hours": 2,
    "min_level": 1,
    "cooldown_hours": 0,
    "objectives": [
      { "id": "find", "description": "Find the treasure", "metric": "treasures_found", "target": 1 }
    ],
    "global_rewards": [{ "type": "coins", "amount": 40 }],
    "top_contributor_rewards": { "top1": [{ "type": "coins", "amount": 400 }] },
    "treasure_config": { "total_treasures": 1, "clues": ["Look under the bridge."] }
  },
  {
    "id": "test_double_xp",
    "type": "double_xp",
    "name": "Test Double XP",
    "description": "Training for tests.",
    "emoji": "X",
    "duration_hours": 2,
    "min_level": 1,
    "cooldown_hours": 0,
    "objectives": [
      { "id": "train", "description": "Earn 1000 XP", "metric": "xp", "target": 1000 }
    ],
    "global_rewards": [{ "type": "coins", "amount": 10 }]
  },
  {
    "id": "test_meteor",
    "type": "meteor_shower",
    "name": "Test Meteor",
    "description": "Falling stars for tests.",
    "emoji": "M",
    "duration_hours": 2,
    "min_level": 1,
    "cooldown_hours": 0,
    "objectives": [
      { "id": "collect", "description": "Collect 10 fragments", "metric": "items_found", "target": 10 }
    ]
  }
]"#;

fn catalog() -> TemplateCatalog {
    TemplateCatalog::from_json(TEST_TEMPLATES).unwrap()
}

/// Clock frozen at the current second.
fn clock() -> FixedClock {
    FixedClock::new(Utc::now().trunc_subsecs(0))
}

/// Creates a user with a character and returns the Discord ID.
async fn player(db: &DatabaseConnection, level: i32, attack: i32) -> u64 {
    let (user, _) = factory::helpers::create_player_with_attack(db, level, attack)
        .await
        .unwrap();
    user.discord_id.parse().unwrap()
}

async fn coins(db: &DatabaseConnection, discord_id: u64) -> i64 {
    UserRepository::new(db)
        .find_by_discord_id(discord_id)
        .await
        .unwrap()
        .unwrap()
        .coins
}

async fn xp(db: &DatabaseConnection, discord_id: u64) -> i64 {
    UserRepository::new(db)
        .find_by_discord_id(discord_id)
        .await
        .unwrap()
        .unwrap()
        .xp
}

/// Moves the clock past the action cooldown.
fn wait_cooldown(clock: &FixedClock) {
    clock.advance(Duration::seconds(30));
}
