//! Event template catalog entries.
//!
//! Templates are immutable catalog data. An event record is instantiated from a template
//! and copies everything it needs, so editing the catalog never changes a running event.

use serde::{Deserialize, Serialize};

use crate::server::{
    error::config::ConfigError,
    model::{
        reward::{Reward, TopContributorRewards},
        world_event::{
            BossState, EventSubState, EventType, InvasionState, Objective, ObjectiveMetric,
            TreasureHuntState,
        },
    },
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventTemplate {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub name: String,
    pub description: String,
    pub emoji: String,
    pub duration_hours: i64,
    pub min_level: i32,
    pub cooldown_hours: i64,
    pub objectives: Vec<ObjectiveTemplate>,
    #[serde(default)]
    pub global_rewards: Vec<Reward>,
    #[serde(default)]
    pub top_contributor_rewards: TopContributorRewards,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boss_config: Option<BossConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invasion_config: Option<InvasionConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub treasure_config: Option<TreasureConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveTemplate {
    pub id: String,
    pub description: String,
    pub metric: ObjectiveMetric,
    pub target: i64,
    #[serde(default)]
    pub rewards: Vec<Reward>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BossConfig {
    pub hp: i64,
    pub attack: i64,
    pub defense: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvasionConfig {
    pub total_waves: i64,
    pub monsters_per_wave: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasureConfig {
    pub total_treasures: i64,
    #[serde(default)]
    pub clues: Vec<String>,
}

impl ObjectiveTemplate {
    /// Fresh objective with no progress.
    pub fn instantiate(&self) -> Objective {
        Objective {
            id: self.id.clone(),
            description: self.description.clone(),
            metric: self.metric,
            target: self.target,
            current: 0,
            completed: false,
            rewards: self.rewards.clone(),
        }
    }
}

impl EventTemplate {
    /// Builds the type-specific sub-state for a fresh event.
    ///
    /// Returns `None` for types that track progress through objectives only, and for
    /// templates missing their config block (rejected earlier by `validate`).
    pub fn initial_sub_state(&self) -> Option<EventSubState> {
        match self.event_type {
            EventType::BossWorld => self.boss_config.as_ref().map(|config| {
                EventSubState::Boss(BossState {
                    hp: config.hp,
                    max_hp: config.hp,
                    attack: config.attack,
                    defense: config.defense,
                })
            }),
            EventType::Invasion => self.invasion_config.as_ref().map(|config| {
                EventSubState::Invasion(InvasionState {
                    total_waves: config.total_waves,
                    current_wave: 1,
                    monsters_per_wave: config.monsters_per_wave,
                    monsters_defeated: 0,
                    monsters_remaining: config.monsters_per_wave,
                })
            }),
            EventType::TreasureHunt => self.treasure_config.as_ref().map(|config| {
                EventSubState::TreasureHunt(TreasureHuntState {
                    total_treasures: config.total_treasures,
                    found_treasures: 0,
                    clues: config.clues.clone(),
                    current_clue: 0,
                })
            }),
            EventType::DoubleXp | EventType::MeteorShower => None,
        }
    }

    /// Checks the template for values the engine cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidTemplate {
            template_id: self.id.clone(),
            reason: reason.to_string(),
        };

        if self.duration_hours <= 0 {
            return Err(invalid("duration_hours must be positive"));
        }
        if self.objectives.iter().any(|objective| objective.target <= 0) {
            return Err(invalid("objective targets must be positive"));
        }

        match self.event_type {
            EventType::BossWorld => match &self.boss_config {
                Some(config) if config.hp > 0 => {}
                Some(_) => return Err(invalid("boss hp must be positive")),
                None => return Err(invalid("boss_world templates require boss_config")),
            },
            EventType::Invasion => match &self.invasion_config {
                Some(config) if config.total_waves > 0 && config.monsters_per_wave > 0 => {}
                Some(_) => return Err(invalid("invasion waves and monsters must be positive")),
                None => return Err(invalid("invasion templates require invasion_config")),
            },
            EventType::TreasureHunt => match &self.treasure_config {
                Some(config) if config.total_treasures > 0 => {}
                Some(_) => return Err(invalid("total_treasures must be positive")),
                None => return Err(invalid("treasure_hunt templates require treasure_config")),
            },
            EventType::DoubleXp | EventType::MeteorShower => {}
        }

        Ok(())
    }
}
