use std::time::Duration;

use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "HealthNexus";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Simulated "typing" delay before the assistant reply is appended.
pub const DEFAULT_TYPING_DELAY_MS: u64 = 1500;

/// Environment override for the typing delay, in milliseconds.
pub const ENV_TYPING_DELAY_MS: &str = "HEALTHNEXUS_TYPING_DELAY_MS";

/// Environment override for seeding new sessions with the greeting.
pub const ENV_GREETING: &str = "HEALTHNEXUS_GREETING";

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "healthnexus=info,healthnexus_lib=info,warn"
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Chat front-end settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// Pause between the user message and the assistant reply.
    pub typing_delay: Duration,
    /// Open every session with the assistant greeting.
    pub greeting: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            typing_delay: Duration::from_millis(DEFAULT_TYPING_DELAY_MS),
            greeting: true,
        }
    }
}

impl ChatConfig {
    /// Defaults overridden by `HEALTHNEXUS_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ChatConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_TYPING_DELAY_MS) {
            let millis = raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                key: ENV_TYPING_DELAY_MS.into(),
                value: raw.clone(),
            })?;
            config.typing_delay = Duration::from_millis(millis);
        }

        if let Some(raw) = lookup(ENV_GREETING) {
            config.greeting = parse_flag(&raw).ok_or_else(|| ConfigError::InvalidValue {
                key: ENV_GREETING.into(),
                value: raw.clone(),
            })?;
        }

        Ok(config)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
