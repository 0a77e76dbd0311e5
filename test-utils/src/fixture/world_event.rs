//! World event fixtures for creating in-memory test data.
//!
//! The JSON columns are written in the same shape the service crate serializes, so models
//! built here decode cleanly through `WorldEvent::from_entity`.

use chrono::{DateTime, Duration, Utc};
use entity::world_event;
use serde_json::{json, Value};

use crate::factory::helpers::next_id;

/// Default boss hit points.
pub const DEFAULT_BOSS_HP: i64 = 1000;

/// Default boss defense.
pub const DEFAULT_BOSS_DEFENSE: i64 = 10;

/// Default coins granted to every participant on completion.
pub const DEFAULT_GLOBAL_COINS: i64 = 100;

/// Default coin bonus for the top contributor.
pub const DEFAULT_TOP1_COINS: i64 = 500;

/// Creates a world event entity model with default values.
///
/// # Default Values
/// - event_type: `"boss_world"` with 1000 HP, attack 50, defense 10
/// - status: `"active"`, started an hour ago and ending in an hour
/// - min_level: `1`
/// - one `damage` objective targeting the boss HP
/// - 100 coins to everyone, 500/250/100 coin tier bonuses
pub fn entity() -> world_event::Model {
    entity_builder().build()
}

/// Creates a builder for a world event entity model with custom values.
pub fn entity_builder() -> WorldEventEntityBuilder {
    WorldEventEntityBuilder::new()
}

/// Builder for in-memory world event models.
pub struct WorldEventEntityBuilder {
    model: world_event::Model,
    objectives: Vec<Value>,
}

impl WorldEventEntityBuilder {
    pub fn new() -> Self {
        let now = Utc::now();

        let model = world_event::Model {
            id: 0,
            event_id: format!("fixture-{}", next_id()),
            template_id: "ancient_dragon".to_string(),
            event_type: "boss_world".to_string(),
            name: "Ancient Dragon".to_string(),
            description: "A dragon descends upon the realm.".to_string(),
            emoji: "🐉".to_string(),
            status: "active".to_string(),
            scheduled_start: now - Duration::hours(1),
            actual_start: Some(now - Duration::hours(1)),
            scheduled_end: now + Duration::hours(1),
            actual_end: None,
            min_level: 1,
            objectives: "[]".to_string(),
            participants: "[]".to_string(),
            sub_state: Some(
                json!({
                    "kind": "boss",
                    "hp": DEFAULT_BOSS_HP,
                    "max_hp": DEFAULT_BOSS_HP,
                    "attack": 50,
                    "defense": DEFAULT_BOSS_DEFENSE,
                })
                .to_string(),
            ),
            global_rewards: json!([{ "type": "coins", "amount": DEFAULT_GLOBAL_COINS }])
                .to_string(),
            top_contributor_rewards: json!({
                "top1": [{ "type": "coins", "amount": DEFAULT_TOP1_COINS }],
                "top3": [{ "type": "coins", "amount": 250 }],
                "top10": [{ "type": "coins", "amount": 100 }],
            })
            .to_string(),
            top_contributors: "[]".to_string(),
            stats: json!({
                "total_participants": 0,
                "total_contribution": 0,
                "completion_percentage": 0.0,
            })
            .to_string(),
            version: 0,
            created_at: now,
        };

        Self {
            model,
            objectives: vec![objective_json("deal_damage", "damage", DEFAULT_BOSS_HP)],
        }
    }

    pub fn event_id(mut self, event_id: impl Into<String>) -> Self {
        self.model.event_id = event_id.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.model.status = status.into();
        self
    }

    pub fn min_level(mut self, min_level: i32) -> Self {
        self.model.min_level = min_level;
        self
    }

    /// Sets the schedule window of an already started event.
    pub fn window(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.model.scheduled_start = start;
        self.model.scheduled_end = end;
        self.model.actual_start = Some(start);
        self
    }

    /// Turns the event into a scheduled event that has not started yet.
    pub fn scheduled(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.model.status = "scheduled".to_string();
        self.model.scheduled_start = start;
        self.model.scheduled_end = end;
        self.model.actual_start = None;
        self
    }

    pub fn boss(mut self, hp: i64, defense: i64) -> Self {
        self.model.event_type = "boss_world".to_string();
        self.model.sub_state = Some(
            json!({
                "kind": "boss",
                "hp": hp,
                "max_hp": hp,
                "attack": 50,
                "defense": defense,
            })
            .to_string(),
        );
        self.objectives = vec![objective_json("deal_damage", "damage", hp)];
        self
    }

    pub fn invasion(mut self, total_waves: i64, monsters_per_wave: i64) -> Self {
        self.model.template_id = "goblin_invasion".to_string();
        self.model.event_type = "invasion".to_string();
        self.model.name = "Goblin Invasion".to_string();
        self.model.sub_state = Some(
            json!({
                "kind": "invasion",
                "total_waves": total_waves,
                "current_wave": 1,
                "monsters_per_wave": monsters_per_wave,
                "monsters_defeated": 0,
                "monsters_remaining": monsters_per_wave,
            })
            .to_string(),
        );
        self.objectives = vec![objective_json(
            "repel_invaders",
            "kills",
            total_waves * monsters_per_wave,
        )];
        self
    }

    pub fn treasure_hunt(mut self, total_treasures: i64, clues: &[&str]) -> Self {
        self.model.template_id = "lost_treasure".to_string();
        self.model.event_type = "treasure_hunt".to_string();
        self.model.name = "Lost Treasure".to_string();
        self.model.sub_state = Some(
            json!({
                "kind": "treasure_hunt",
                "total_treasures": total_treasures,
                "found_treasures": 0,
                "clues": clues,
                "current_clue": 0,
            })
            .to_string(),
        );
        self.objectives = vec![objective_json(
            "find_treasures",
            "treasures_found",
            total_treasures,
        )];
        self
    }

    /// Turns the event into a type without sub-state (`meteor_shower` or `double_xp`).
    pub fn stateless(mut self, event_type: &str, metric: &str, target: i64) -> Self {
        self.model.template_id = event_type.to_string();
        self.model.event_type = event_type.to_string();
        self.model.sub_state = None;
        self.objectives = vec![objective_json("community_goal", metric, target)];
        self
    }

    /// Removes the type-specific sub-state, producing a malformed event.
    pub fn without_sub_state(mut self) -> Self {
        self.model.sub_state = None;
        self
    }

    pub fn participants(mut self, participants: Value) -> Self {
        self.model.participants = participants.to_string();
        self
    }

    pub fn build(mut self) -> world_event::Model {
        self.model.objectives = Value::Array(self.objectives).to_string();
        self.model
    }
}

impl Default for WorldEventEntityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a participant JSON value seeded with the given contribution.
pub fn participant_json(discord_id: u64, username: &str, contribution: i64) -> Value {
    let joined_at = Utc::now() - Duration::minutes(10);
    json!({
        "discord_id": discord_id,
        "username": username,
        "contribution": contribution,
        "damage": 0,
        "kills": 0,
        "items_found": 0,
        "joined_at": joined_at,
        "last_action_at": joined_at,
    })
}

fn objective_json(id: &str, metric: &str, target: i64) -> Value {
    json!({
        "id": id,
        "description": format!("Reach {} {}", target, metric),
        "metric": metric,
        "target": target,
        "current": 0,
        "completed": false,
        "rewards": [],
    })
}
