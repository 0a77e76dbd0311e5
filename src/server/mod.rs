//! World event back end and its infrastructure.
//!
//! This module contains the game logic for world events together with the services it needs
//! to run as a bot back end. SeaORM handles persistence, tokio-cron-scheduler drives the
//! time-based lifecycle, and Serenity provides the optional Discord connection.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Service Layer** (`service/`) - Event operations, lifecycle, reward distribution, announcements
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models for events, templates, rewards and the ledger
//! - **Catalog** (`catalog/`) - Validated event templates
//! - **Error Layer** (`error/`) - Application error types and user-facing messages
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, catalog, clock, Discord client)
//! - **Startup** (`startup`) - Database connection, migrations and catalog loading
//! - **Scheduler** (`scheduler/`) - Cron job promoting and retiring events
//! - **Bot** (`bot/`) - Discord gateway client
//! - **Util** (`util/`) - Clock and random ports, id parsing
//!
//! # Write Flow
//!
//! Every change to an event follows the same path:
//!
//! 1. **Service** loads the event through its repository
//! 2. **Engine** applies the change to the in-memory copy
//! 3. **Data** saves it only if the stored version is unchanged
//! 4. **Service** retries from step 1 when the save lost a race
//! 5. The writer that completed the event releases the active slot and distributes rewards

pub mod bot;
pub mod catalog;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
