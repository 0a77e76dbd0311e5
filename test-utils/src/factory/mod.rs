//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories handle foreign key dependencies, so creating a
//! character also creates its owning user.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // User with a level 10 character
//!     let (user, character) = factory::helpers::create_player(&db, 10).await?;
//!
//!     // Active boss event
//!     let event = factory::world_event::create_world_event(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user ledger entities
//! - `character` - Create character (stats) entities
//! - `world_event` - Create world event entities from fixtures
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod character;
pub mod helpers;
pub mod user;
pub mod world_event;

pub use character::create_character;
pub use helpers::create_player;
pub use user::create_user;
pub use world_event::create_world_event;
