//! Error types and user-facing message mapping.
//!
//! This module provides the application's error hierarchy. `AppError` is the top-level error
//! type that wraps domain-specific errors. Domain failures (`EventError`) carry an actionable
//! message for the player, while infrastructure failures are logged and reported with a generic
//! message so no internal detail leaks into Discord.

pub mod config;
pub mod event;
pub mod internal;

use thiserror::Error;

use crate::server::error::{config::ConfigError, event::EventError, internal::InternalError};

/// Generic message shown to players when an infrastructure error occurs.
const GENERIC_ERROR_MESSAGE: &str = "Something went wrong, please try again later.";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants use
/// `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// World event rule violation (not found, ineligible, rate limited, ...).
    ///
    /// These are expected outcomes of player actions and are reported back verbatim.
    #[error(transparent)]
    EventErr(#[from] EventError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Internal issue such as an unparsable stored id or corrupt JSON column.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Returns the domain error if this is a world event rule violation.
    pub fn as_event_error(&self) -> Option<&EventError> {
        match self {
            Self::EventErr(err) => Some(err),
            _ => None,
        }
    }

    /// Converts the error into the message shown to the player.
    ///
    /// Domain errors are returned as-is. All other errors are logged at error level and
    /// replaced by a generic message to avoid information leakage.
    ///
    /// # Returns
    /// - `String` - Message suitable for a Discord reply
    pub fn user_message(&self) -> String {
        match self {
            Self::EventErr(err) => err.to_string(),
            err => {
                tracing::error!("{}", err);
                GENERIC_ERROR_MESSAGE.to_string()
            }
        }
    }
}
