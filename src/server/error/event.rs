use thiserror::Error;

/// World event rule violations.
///
/// Every variant carries a message that tells the player what is required or what remains,
/// so the command layer can reply with `to_string()` directly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    /// Unknown template, no active event, missing profile or missing record.
    #[error("{0}")]
    NotFound(String),

    /// Actor does not meet the requirements (level, participation).
    #[error("{0}")]
    Ineligible(String),

    /// The event's win condition was already met.
    #[error("{0}")]
    Exhausted(String),

    /// Actor acted again before the per-participant cooldown elapsed.
    #[error("You are still recovering! Try again in {remaining_secs} seconds.")]
    RateLimited {
        /// Seconds until the next action is allowed
        remaining_secs: i64,
    },

    /// Malformed event state or an action that does not fit the event type.
    #[error("{0}")]
    Invalid(String),

    /// The shared event record kept changing underneath the operation, or the active
    /// slot is held by another event.
    #[error("{0}")]
    Conflict(String),
}

impl EventError {
    pub fn no_active_event() -> Self {
        Self::NotFound("There is no active world event right now.".to_string())
    }

    pub fn unknown_template(template_id: &str) -> Self {
        Self::NotFound(format!("Unknown event template '{}'.", template_id))
    }

    pub fn no_character() -> Self {
        Self::NotFound("You need a character to take part in world events.".to_string())
    }

    pub fn no_user() -> Self {
        Self::NotFound("You need a profile to take part in world events.".to_string())
    }

    pub fn level_too_low(required: i32, actual: i32) -> Self {
        Self::Ineligible(format!(
            "This event requires level {}. You are level {}.",
            required, actual
        ))
    }

    pub fn not_participating() -> Self {
        Self::Ineligible(
            "You are not participating in this event. Join it first to take action.".to_string(),
        )
    }

    pub fn missing_sub_state(event_type: &str) -> Self {
        Self::Invalid(format!(
            "This {} event is missing its state and cannot accept actions.",
            event_type
        ))
    }

    pub fn slot_taken() -> Self {
        Self::Conflict("Another world event is already active.".to_string())
    }

    pub fn contended() -> Self {
        Self::Conflict("The event is busy, please try again.".to_string())
    }
}
