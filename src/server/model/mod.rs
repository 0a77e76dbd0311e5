//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary. They provide
//! type-safe representations (enums instead of stored strings, `u64` Discord ids instead of
//! text columns) so the service layer never handles raw database values.

pub mod character;
pub mod reward;
pub mod template;
pub mod user;
pub mod world_event;
