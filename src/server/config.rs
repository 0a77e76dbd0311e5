use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SCHEDULER_CRON: &str = "0 * * * * *";

pub struct Config {
    pub database_url: String,

    /// Gateway client is only started when a token is configured.
    pub discord_bot_token: Option<String>,
    pub announcement_channel_id: Option<u64>,

    pub scheduler_cron: String,
    /// Overrides the built-in template catalog.
    pub event_templates_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_bot_token: optional_var("DISCORD_BOT_TOKEN"),
            announcement_channel_id: optional_var("ANNOUNCEMENT_CHANNEL_ID")
                .map(|value| parse_channel_id("ANNOUNCEMENT_CHANNEL_ID", value))
                .transpose()?,
            scheduler_cron: optional_var("SCHEDULER_CRON")
                .unwrap_or_else(|| DEFAULT_SCHEDULER_CRON.to_string()),
            event_templates_path: optional_var("EVENT_TEMPLATES_PATH"),
        })
    }
}

/// Reads an environment variable, treating blank values as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_channel_id(name: &str, value: String) -> Result<u64, ConfigError> {
    value
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        })
}
