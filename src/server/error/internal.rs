use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A stored enum column holds a value this build does not know.
    #[error("Unknown {field} value '{value}' stored in database")]
    UnknownEnumValue {
        /// Column name
        field: &'static str,
        /// The stored value
        value: String,
    },

    /// A JSON column could not be encoded or decoded.
    #[error("Failed to (de)serialize world event {column}: {source}")]
    JsonColumn {
        /// Column name
        column: &'static str,
        /// The underlying serde error
        #[source]
        source: serde_json::Error,
    },

    /// A world event row disappeared between two statements of the same operation.
    #[error("World event {0} vanished during update")]
    EventVanished(i32),
}
