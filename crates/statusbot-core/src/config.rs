//! Process configuration, checked once at startup.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API: &str = "https://api.telegram.org";
pub const DEFAULT_RETRY_SECS: u64 = 600;
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required tokens: {}", .0.join(" "))]
    MissingTokens(Vec<&'static str>),
    #[error("{0} must be a positive number of seconds")]
    ZeroDuration(&'static str),
}

/// Unchecked settings as gathered from flags and the environment.
#[derive(Clone, Default)]
pub struct Settings {
    pub practicum_token: Option<String>,
    pub telegram_token: Option<String>,
    pub telegram_chat_id: Option<String>,
    pub endpoint: Option<String>,
    pub telegram_api: Option<String>,
    pub retry_secs: Option<u64>,
    pub timeout_secs: Option<u64>,
}

/// Immutable, validated configuration.
#[derive(Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub endpoint: String,
    pub telegram_api: String,
    pub retry_period: Duration,
    pub request_timeout: Duration,
}

impl Config {
    /// Validate settings. Every empty or absent token is reported, not just the first.
    pub fn from_settings(settings: Settings) -> Result<Self, ConfigError> {
        let tokens = [
            ("PRACTICUM_TOKEN", settings.practicum_token),
            ("TELEGRAM_TOKEN", settings.telegram_token),
            ("TELEGRAM_CHAT_ID", settings.telegram_chat_id),
        ];
        let missing: Vec<&'static str> = tokens
            .iter()
            .filter(|(_, value)| value.as_deref().is_none_or(str::is_empty))
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissingTokens(missing));
        }
        let [(_, practicum), (_, telegram), (_, chat_id)] = tokens;

        let retry_secs = settings.retry_secs.unwrap_or(DEFAULT_RETRY_SECS);
        if retry_secs == 0 {
            return Err(ConfigError::ZeroDuration("RETRY_TIME"));
        }
        let timeout_secs = settings.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(ConfigError::ZeroDuration("REQUEST_TIMEOUT"));
        }

        Ok(Self {
            practicum_token: practicum.unwrap_or_default(),
            telegram_token: telegram.unwrap_or_default(),
            telegram_chat_id: chat_id.unwrap_or_default(),
            endpoint: settings
                .endpoint
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            telegram_api: settings
                .telegram_api
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API.to_string())
                .trim_end_matches('/')
                .to_string(),
            retry_period: Duration::from_secs(retry_secs),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

// Tokens are secrets; keep them out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint)
            .field("telegram_api", &self.telegram_api)
            .field("retry_period", &self.retry_period)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
