//! Discord gateway client.
//!
//! The bot is optional: it starts only when `DISCORD_BOT_TOKEN` is configured. It runs in
//! its own tokio task, and its HTTP client is shared with the scheduler so lifecycle
//! announcements do not open a second connection to Discord.
//!
//! # Gateway Intents
//!
//! Only `GUILDS` is requested. Presence updates need no privileged intent.

pub mod handler;
pub mod start;
