//! Cron jobs driving time-based event transitions.

pub mod world_events;
