//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each domain in
//! the application. Repositories use SeaORM entity models internally and return domain models
//! to keep the service layer free of raw column values.

pub mod active_slot;
pub mod character;
pub mod inventory;
pub mod user;
pub mod world_event;

#[cfg(test)]
mod test;
