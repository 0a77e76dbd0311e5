//! Domain models for world event records.
//!
//! `WorldEvent` is the mutable aggregate for one instantiated event. Scalar fields map to
//! columns; objectives, participants, sub-state, reward tables and stats are JSON columns
//! decoded here at the repository boundary.

use chrono::{DateTime, Duration, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::server::{
    error::{event::EventError, internal::InternalError, AppError},
    model::reward::{Reward, TopContributorRewards},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Invasion,
    BossWorld,
    TreasureHunt,
    DoubleXp,
    MeteorShower,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Invasion => "invasion",
            Self::BossWorld => "boss_world",
            Self::TreasureHunt => "treasure_hunt",
            Self::DoubleXp => "double_xp",
            Self::MeteorShower => "meteor_shower",
        }
    }

    /// The only action this event type accepts.
    pub fn action(&self) -> EventAction {
        match self {
            Self::Invasion | Self::BossWorld => EventAction::Attack,
            Self::TreasureHunt => EventAction::Search,
            Self::MeteorShower => EventAction::Collect,
            Self::DoubleXp => EventAction::Train,
        }
    }

    fn from_column(value: String) -> Result<Self, InternalError> {
        match value.as_str() {
            "invasion" => Ok(Self::Invasion),
            "boss_world" => Ok(Self::BossWorld),
            "treasure_hunt" => Ok(Self::TreasureHunt),
            "double_xp" => Ok(Self::DoubleXp),
            "meteor_shower" => Ok(Self::MeteorShower),
            _ => Err(InternalError::UnknownEnumValue {
                field: "event_type",
                value,
            }),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventStatus {
    Scheduled,
    Active,
    Completed,
    Cancelled,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Completed and cancelled events are historical and never mutated again.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    fn from_column(value: String) -> Result<Self, InternalError> {
        match value.as_str() {
            "scheduled" => Ok(Self::Scheduled),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(InternalError::UnknownEnumValue {
                field: "status",
                value,
            }),
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Player action submitted to an active event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventAction {
    Attack,
    Search,
    Collect,
    Train,
}

impl EventAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Attack => "attack",
            Self::Search => "search",
            Self::Collect => "collect",
            Self::Train => "train",
        }
    }
}

impl fmt::Display for EventAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventAction {
    type Err = EventError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "attack" => Ok(Self::Attack),
            "search" => Ok(Self::Search),
            "collect" => Ok(Self::Collect),
            "train" => Ok(Self::Train),
            other => Err(EventError::Invalid(format!(
                "Unknown action '{}'. Use attack, search, collect or train.",
                other
            ))),
        }
    }
}

/// Counter an objective tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectiveMetric {
    Damage,
    Kills,
    TreasuresFound,
    ItemsFound,
    Xp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    pub id: String,
    pub description: String,
    pub metric: ObjectiveMetric,
    pub target: i64,
    /// Never decreases while the event runs; may overshoot `target` by the last increment.
    pub current: i64,
    pub completed: bool,
    #[serde(default)]
    pub rewards: Vec<Reward>,
}

impl Objective {
    pub fn advance(&mut self, amount: i64) {
        self.current += amount.max(0);
        if self.current >= self.target {
            self.completed = true;
        }
    }

    /// Progress ratio clamped to `[0, 1]`.
    pub fn ratio(&self) -> f64 {
        if self.target <= 0 {
            return 0.0;
        }
        (self.current as f64 / self.target as f64).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub discord_id: u64,
    /// Username captured when the participant joined.
    pub username: String,
    pub contribution: i64,
    #[serde(default)]
    pub damage: i64,
    #[serde(default)]
    pub kills: i64,
    #[serde(default)]
    pub items_found: i64,
    pub joined_at: DateTime<Utc>,
    /// Set on join and on every action; the action cooldown runs from here.
    pub last_action_at: DateTime<Utc>,
}

impl Participant {
    pub fn new(discord_id: u64, username: String, now: DateTime<Utc>) -> Self {
        Self {
            discord_id,
            username,
            contribution: 0,
            damage: 0,
            kills: 0,
            items_found: 0,
            joined_at: now,
            last_action_at: now,
        }
    }

    /// Whole seconds left before this participant may act again, if any.
    pub fn cooldown_remaining(&self, now: DateTime<Utc>, cooldown: Duration) -> Option<i64> {
        let elapsed = now - self.last_action_at;
        if elapsed >= cooldown {
            return None;
        }

        let remaining_ms = (cooldown - elapsed).num_milliseconds();
        Some((remaining_ms + 999) / 1000)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BossState {
    /// Never increases and never drops below zero.
    pub hp: i64,
    pub max_hp: i64,
    pub attack: i64,
    pub defense: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvasionState {
    pub total_waves: i64,
    pub current_wave: i64,
    pub monsters_per_wave: i64,
    /// Cumulative across all waves.
    pub monsters_defeated: i64,
    /// Remaining in the current wave.
    pub monsters_remaining: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasureHuntState {
    pub total_treasures: i64,
    pub found_treasures: i64,
    #[serde(default)]
    pub clues: Vec<String>,
    pub current_clue: usize,
}

impl TreasureHuntState {
    pub fn current_clue_text(&self) -> Option<&str> {
        self.clues.get(self.current_clue).map(String::as_str)
    }
}

/// Type-specific state of an event.
///
/// Meteor showers and double XP events track progress through their objectives only and
/// carry no sub-state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventSubState {
    Boss(BossState),
    Invasion(InvasionState),
    TreasureHunt(TreasureHuntState),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventStats {
    pub total_participants: i64,
    pub total_contribution: i64,
    /// Always within `[0, 100]`.
    pub completion_percentage: f64,
}

/// Ranked participant recorded when an event completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopContributor {
    pub rank: u32,
    pub discord_id: u64,
    pub username: String,
    pub contribution: i64,
    pub rewards: Vec<Reward>,
}

/// Live ranking row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingEntry {
    /// 1-based, consecutive.
    pub position: u32,
    pub discord_id: u64,
    pub username: String,
    pub contribution: i64,
    pub damage: i64,
    pub kills: i64,
    pub items_found: i64,
}

/// Result of a join request.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinOutcome {
    /// The actor was already a participant; nothing was written.
    pub already_participating: bool,
    pub event: WorldEvent,
}

/// Result of an accepted action.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    pub message: String,
    pub event_completed: bool,
    pub wave_completed: bool,
    pub contribution_gained: i64,
    /// The event as persisted after the action.
    pub event: WorldEvent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorldEvent {
    pub id: i32,
    pub event_id: String,
    pub template_id: String,
    pub event_type: EventType,
    pub name: String,
    pub description: String,
    pub emoji: String,
    pub status: EventStatus,
    pub scheduled_start: DateTime<Utc>,
    pub actual_start: Option<DateTime<Utc>>,
    pub scheduled_end: DateTime<Utc>,
    pub actual_end: Option<DateTime<Utc>>,
    pub min_level: i32,
    pub objectives: Vec<Objective>,
    pub participants: Vec<Participant>,
    pub sub_state: Option<EventSubState>,
    pub global_rewards: Vec<Reward>,
    pub top_contributor_rewards: TopContributorRewards,
    pub top_contributors: Vec<TopContributor>,
    pub stats: EventStats,
    /// Optimistic concurrency token of the row this model was loaded from.
    pub version: i32,
    pub created_at: DateTime<Utc>,
}

impl WorldEvent {
    /// Converts an entity model to a world event domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(WorldEvent)` - The decoded event
    /// - `Err(AppError::InternalErr)` - Unknown enum value or corrupt JSON column
    pub fn from_entity(entity: entity::world_event::Model) -> Result<Self, AppError> {
        let sub_state = match entity.sub_state {
            Some(raw) => Some(decode_json("sub_state", &raw)?),
            None => None,
        };

        Ok(Self {
            id: entity.id,
            event_id: entity.event_id,
            template_id: entity.template_id,
            event_type: EventType::from_column(entity.event_type)?,
            name: entity.name,
            description: entity.description,
            emoji: entity.emoji,
            status: EventStatus::from_column(entity.status)?,
            scheduled_start: entity.scheduled_start,
            actual_start: entity.actual_start,
            scheduled_end: entity.scheduled_end,
            actual_end: entity.actual_end,
            min_level: entity.min_level,
            objectives: decode_json("objectives", &entity.objectives)?,
            participants: decode_json("participants", &entity.participants)?,
            sub_state,
            global_rewards: decode_json("global_rewards", &entity.global_rewards)?,
            top_contributor_rewards: decode_json(
                "top_contributor_rewards",
                &entity.top_contributor_rewards,
            )?,
            top_contributors: decode_json("top_contributors", &entity.top_contributors)?,
            stats: decode_json("stats", &entity.stats)?,
            version: entity.version,
            created_at: entity.created_at,
        })
    }

    pub fn participant(&self, discord_id: u64) -> Option<&Participant> {
        self.participants
            .iter()
            .find(|participant| participant.discord_id == discord_id)
    }

    pub fn is_participating(&self, discord_id: u64) -> bool {
        self.participant(discord_id).is_some()
    }

    /// Participants ordered by contribution, highest first.
    ///
    /// The sort is stable, so ties keep join order.
    pub fn participants_by_contribution(&self) -> Vec<&Participant> {
        let mut ranked: Vec<&Participant> = self.participants.iter().collect();
        ranked.sort_by(|a, b| b.contribution.cmp(&a.contribution));
        ranked
    }

    /// Top `limit` participants with 1-based positions.
    pub fn ranking(&self, limit: usize) -> Vec<RankingEntry> {
        self.participants_by_contribution()
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(index, participant)| RankingEntry {
                position: index as u32 + 1,
                discord_id: participant.discord_id,
                username: participant.username.clone(),
                contribution: participant.contribution,
                damage: participant.damage,
                kills: participant.kills,
                items_found: participant.items_found,
            })
            .collect()
    }

    /// Recomputes participant totals. Completion percentage is owned by the action engine.
    pub fn refresh_totals(&mut self) {
        self.stats.total_participants = self.participants.len() as i64;
        self.stats.total_contribution = self
            .participants
            .iter()
            .map(|participant| participant.contribution)
            .sum();
    }
}

pub(crate) fn encode_json<T: Serialize>(
    column: &'static str,
    value: &T,
) -> Result<String, InternalError> {
    serde_json::to_string(value).map_err(|source| InternalError::JsonColumn { column, source })
}

fn decode_json<T: DeserializeOwned>(column: &'static str, raw: &str) -> Result<T, InternalError> {
    serde_json::from_str(raw).map_err(|source| InternalError::JsonColumn { column, source })
}
