//! Pure action engine.
//!
//! `apply_action` validates and applies one action to an in-memory event. It performs no I/O;
//! the service persists the result under the record's version check and re-runs the engine
//! against a fresh copy when the write loses a race.

use chrono::{DateTime, Duration, Utc};

use crate::server::{
    error::event::EventError,
    model::{
        character::CharacterStats,
        world_event::{EventAction, EventStatus, WorldEvent},
    },
    service::world_event::kind::{with_kind, ActionContext, ActionEffect},
    util::clock::RandomPort,
};

/// Minimum time between two actions of the same participant.
pub const ACTION_COOLDOWN_SECS: i64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct AppliedAction {
    pub effect: ActionEffect,
    /// The action met the event's win condition and moved it to completed.
    pub event_completed: bool,
}

/// Applies `action` by `discord_id` to `event`.
///
/// Preconditions are checked in order: the event is active, the actor participates, the action
/// fits the event type, the actor's cooldown has elapsed, and the type's sub-state exists. Any
/// failure leaves `event` untouched.
///
/// # Returns
/// - `Ok(AppliedAction)` - Event mutated in place
/// - `Err(EventError)` - Rule violation; nothing was changed
pub fn apply_action(
    event: &mut WorldEvent,
    discord_id: u64,
    character: &CharacterStats,
    action: EventAction,
    now: DateTime<Utc>,
    random: &dyn RandomPort,
) -> Result<AppliedAction, EventError> {
    if event.status != EventStatus::Active {
        return Err(EventError::no_active_event());
    }

    let index = event
        .participants
        .iter()
        .position(|participant| participant.discord_id == discord_id)
        .ok_or_else(EventError::not_participating)?;

    let expected = event.event_type.action();
    if action != expected {
        return Err(EventError::Invalid(format!(
            "{} does not accept '{}'. Use '{}' instead.",
            event.name, action, expected
        )));
    }

    if let Some(remaining_secs) = event.participants[index]
        .cooldown_remaining(now, Duration::seconds(ACTION_COOLDOWN_SECS))
    {
        return Err(EventError::RateLimited { remaining_secs });
    }

    let ctx = ActionContext { character, random };
    let effect = with_kind(event.event_type, &mut event.sub_state, |kind| {
        kind.apply_action(&ctx)
    })??;

    let participant = &mut event.participants[index];
    participant.contribution += effect.contribution;
    participant.damage += effect.damage;
    participant.kills += effect.kills;
    participant.items_found += effect.items_found;
    participant.last_action_at = now;

    if let Some((metric, amount)) = effect.progress {
        event
            .objectives
            .iter_mut()
            .filter(|objective| objective.metric == metric)
            .for_each(|objective| objective.advance(amount));
    }

    let objectives = &event.objectives;
    let (ratio, won) = with_kind(event.event_type, &mut event.sub_state, |kind| {
        (kind.completion_ratio(objectives), kind.is_won())
    })?;

    event.refresh_totals();
    event.stats.completion_percentage = (ratio * 100.0).clamp(0.0, 100.0);

    if won {
        event.status = EventStatus::Completed;
        event.actual_end = Some(now);
    }

    Ok(AppliedAction {
        effect,
        event_completed: won,
    })
}
