//! Per-type action behaviour.
//!
//! Each event type implements `EventKind`. The engine resolves the kind from the event's type
//! and sub-state, applies the action, and folds the returned `ActionEffect` into the shared
//! record (participant counters, objectives, stats).

use crate::server::{
    error::event::EventError,
    model::{
        character::CharacterStats,
        world_event::{
            BossState, EventSubState, EventType, InvasionState, Objective, ObjectiveMetric,
            TreasureHuntState,
        },
    },
    util::clock::RandomPort,
};

/// Treasures found between clue advances.
pub const TREASURES_PER_CLUE: i64 = 20;

const TREASURE_BASE_CHANCE: f64 = 30.0;
const TREASURE_FOUND_CONTRIBUTION: i64 = 50;
const TREASURE_MISS_CONTRIBUTION: i64 = 10;

const METEOR_BASE_CHANCE: f64 = 40.0;
const METEOR_LEVEL_FACTOR: f64 = 0.5;
const METEOR_FOUND_CONTRIBUTION: i64 = 25;
const METEOR_MISS_CONTRIBUTION: i64 = 5;

const KILL_CONTRIBUTION: i64 = 10;

/// Inputs an action needs besides the event itself.
pub struct ActionContext<'a> {
    pub character: &'a CharacterStats,
    pub random: &'a dyn RandomPort,
}

/// What a single action did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionEffect {
    pub contribution: i64,
    pub damage: i64,
    pub kills: i64,
    pub items_found: i64,
    /// Objective counter to advance and by how much.
    pub progress: Option<(ObjectiveMetric, i64)>,
    /// Experience to credit to the actor's ledger.
    pub xp_gained: i64,
    pub wave_completed: bool,
    pub message: String,
}

pub trait EventKind {
    /// Applies one action to the kind's state.
    ///
    /// Fails with `Exhausted` when the win condition was already met.
    fn apply_action(&mut self, ctx: &ActionContext) -> Result<ActionEffect, EventError>;

    fn is_won(&self) -> bool;

    /// Progress in `[0, 1]`.
    fn completion_ratio(&self, objectives: &[Objective]) -> f64;
}

/// Probability (percent) of a successful roll, clamped to `[0, 100]`.
pub fn clamp_chance(chance: f64) -> f64 {
    chance.clamp(0.0, 100.0)
}

fn rolled(ctx: &ActionContext, chance: f64) -> bool {
    ctx.random.roll_percent() < clamp_chance(chance)
}

fn ratio(done: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    (done as f64 / total as f64).clamp(0.0, 1.0)
}

fn objective_ratio(objectives: &[Objective], metric: ObjectiveMetric) -> f64 {
    objectives
        .iter()
        .find(|objective| objective.metric == metric)
        .map(Objective::ratio)
        .unwrap_or(0.0)
}

impl EventKind for BossState {
    fn apply_action(&mut self, ctx: &ActionContext) -> Result<ActionEffect, EventError> {
        if self.hp <= 0 {
            return Err(EventError::Exhausted(
                "The boss has already been defeated.".to_string(),
            ));
        }

        let character = ctx.character;
        let damage =
            (i64::from(character.attack) * 2 + i64::from(character.level) * 3 - self.defense).max(1);
        self.hp = (self.hp - damage).max(0);

        let message = if self.hp == 0 {
            format!("You dealt {} damage and struck the final blow!", damage)
        } else {
            format!(
                "You dealt {} damage! The boss has {}/{} HP left.",
                damage, self.hp, self.max_hp
            )
        };

        Ok(ActionEffect {
            contribution: damage,
            damage,
            progress: Some((ObjectiveMetric::Damage, damage)),
            message,
            ..Default::default()
        })
    }

    fn is_won(&self) -> bool {
        self.hp <= 0
    }

    fn completion_ratio(&self, _objectives: &[Objective]) -> f64 {
        ratio(self.max_hp - self.hp, self.max_hp)
    }
}

impl EventKind for InvasionState {
    fn apply_action(&mut self, ctx: &ActionContext) -> Result<ActionEffect, EventError> {
        if self.is_won() {
            return Err(EventError::Exhausted(
                "The invasion has already been repelled.".to_string(),
            ));
        }

        let kills = (i64::from(ctx.character.attack) / 10)
            .max(1)
            .min(self.monsters_remaining);
        self.monsters_remaining -= kills;
        self.monsters_defeated += kills;

        let mut wave_completed = false;
        let mut message = format!("You defeated {} monsters!", kills);

        if self.monsters_remaining <= 0 {
            wave_completed = true;
            if self.current_wave < self.total_waves {
                message.push_str(&format!(
                    " Wave {} cleared! Wave {} approaches.",
                    self.current_wave,
                    self.current_wave + 1
                ));
                self.current_wave += 1;
                self.monsters_remaining = self.monsters_per_wave;
            } else {
                message.push_str(" The final wave has been cleared!");
            }
        }

        Ok(ActionEffect {
            contribution: kills * KILL_CONTRIBUTION,
            kills,
            progress: Some((ObjectiveMetric::Kills, kills)),
            wave_completed,
            message,
            ..Default::default()
        })
    }

    fn is_won(&self) -> bool {
        self.current_wave >= self.total_waves && self.monsters_remaining <= 0
    }

    fn completion_ratio(&self, _objectives: &[Objective]) -> f64 {
        ratio(
            self.monsters_defeated,
            self.total_waves * self.monsters_per_wave,
        )
    }
}

impl EventKind for TreasureHuntState {
    fn apply_action(&mut self, ctx: &ActionContext) -> Result<ActionEffect, EventError> {
        if self.is_won() {
            return Err(EventError::Exhausted(
                "All treasures have already been found.".to_string(),
            ));
        }

        let chance = TREASURE_BASE_CHANCE + f64::from(ctx.character.level);
        if !rolled(ctx, chance) {
            return Ok(ActionEffect {
                contribution: TREASURE_MISS_CONTRIBUTION,
                message: "You searched but found nothing this time.".to_string(),
                ..Default::default()
            });
        }

        self.found_treasures += 1;
        let clue_index = (self.found_treasures / TREASURES_PER_CLUE) as usize;
        self.current_clue = clue_index.min(self.clues.len().saturating_sub(1));

        let mut message = format!(
            "You found a treasure! {}/{} discovered.",
            self.found_treasures, self.total_treasures
        );
        if let Some(clue) = self.current_clue_text() {
            message.push_str(&format!(" Clue: {}", clue));
        }

        Ok(ActionEffect {
            contribution: TREASURE_FOUND_CONTRIBUTION,
            items_found: 1,
            progress: Some((ObjectiveMetric::TreasuresFound, 1)),
            message,
            ..Default::default()
        })
    }

    fn is_won(&self) -> bool {
        self.found_treasures >= self.total_treasures
    }

    fn completion_ratio(&self, _objectives: &[Objective]) -> f64 {
        ratio(self.found_treasures, self.total_treasures)
    }
}

/// Meteor showers run until their scheduled end; they have no win condition.
pub struct MeteorShower;

impl EventKind for MeteorShower {
    fn apply_action(&mut self, ctx: &ActionContext) -> Result<ActionEffect, EventError> {
        let chance = METEOR_BASE_CHANCE + METEOR_LEVEL_FACTOR * f64::from(ctx.character.level);
        if !rolled(ctx, chance) {
            return Ok(ActionEffect {
                contribution: METEOR_MISS_CONTRIBUTION,
                message: "The fragment burned up before you could reach it.".to_string(),
                ..Default::default()
            });
        }

        Ok(ActionEffect {
            contribution: METEOR_FOUND_CONTRIBUTION,
            items_found: 1,
            progress: Some((ObjectiveMetric::ItemsFound, 1)),
            message: "You collected a meteor fragment!".to_string(),
            ..Default::default()
        })
    }

    fn is_won(&self) -> bool {
        false
    }

    fn completion_ratio(&self, objectives: &[Objective]) -> f64 {
        objective_ratio(objectives, ObjectiveMetric::ItemsFound)
    }
}

/// Double XP events grant experience on every action and run until their scheduled end.
pub struct DoubleXp;

impl EventKind for DoubleXp {
    fn apply_action(&mut self, ctx: &ActionContext) -> Result<ActionEffect, EventError> {
        let xp = 10 + i64::from(ctx.character.level) * 2;

        Ok(ActionEffect {
            contribution: xp,
            progress: Some((ObjectiveMetric::Xp, xp)),
            xp_gained: xp,
            message: format!("You trained hard and earned {} XP!", xp),
            ..Default::default()
        })
    }

    fn is_won(&self) -> bool {
        false
    }

    fn completion_ratio(&self, objectives: &[Objective]) -> f64 {
        objective_ratio(objectives, ObjectiveMetric::Xp)
    }
}

/// Resolves the kind for an event and runs `f` against it.
///
/// # Returns
/// - `Ok(R)` - Result of `f`
/// - `Err(EventError::Invalid)` - The event type requires a sub-state that is missing or
///   belongs to another type
pub fn with_kind<R>(
    event_type: EventType,
    sub_state: &mut Option<EventSubState>,
    f: impl FnOnce(&mut dyn EventKind) -> R,
) -> Result<R, EventError> {
    match (event_type, sub_state.as_mut()) {
        (EventType::BossWorld, Some(EventSubState::Boss(state))) => Ok(f(state)),
        (EventType::Invasion, Some(EventSubState::Invasion(state))) => Ok(f(state)),
        (EventType::TreasureHunt, Some(EventSubState::TreasureHunt(state))) => Ok(f(state)),
        (EventType::MeteorShower, _) => Ok(f(&mut MeteorShower)),
        (EventType::DoubleXp, _) => Ok(f(&mut DoubleXp)),
        (event_type, _) => Err(EventError::missing_sub_state(event_type.as_str())),
    }
}
