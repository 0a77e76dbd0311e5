//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for use in unit tests and as default values for
//! factories. Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Default boss event model (no DB)
//! let event = fixture::world_event::entity();
//!
//! // Customized invasion event
//! let invasion = fixture::world_event::entity_builder()
//!     .invasion(2, 10)
//!     .build();
//! ```

pub mod world_event;

pub use world_event::{entity as world_event_entity, entity_builder as world_event_entity_builder};
