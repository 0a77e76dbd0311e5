//! SeaORM entity definitions for the world events schema.
//!
//! Entities mirror the tables created by the `migration` crate. The service crate converts
//! these models into domain models at the repository boundary.

pub mod prelude;

pub mod active_event_slot;
pub mod character;
pub mod inventory_item;
pub mod user;
pub mod world_event;
