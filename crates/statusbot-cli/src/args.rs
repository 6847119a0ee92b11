//! Command-line flags with environment fallbacks.

use clap::{Parser, Subcommand};
use statusbot_core::Settings;
use statusbot_core::config::{
    DEFAULT_ENDPOINT, DEFAULT_RETRY_SECS, DEFAULT_TELEGRAM_API, DEFAULT_TIMEOUT_SECS,
};

#[derive(Parser, Debug)]
#[command(
    name = "statusbot",
    version,
    about = "Watch homework review status and report changes to Telegram"
)]
pub struct Cli {
    /// OAuth token for the homework status API.
    #[arg(long, env = "PRACTICUM_TOKEN", hide_env_values = true)]
    pub practicum_token: Option<String>,

    /// Telegram bot token.
    #[arg(long, env = "TELEGRAM_TOKEN", hide_env_values = true)]
    pub telegram_token: Option<String>,

    /// Chat that receives notifications.
    #[arg(long, env = "TELEGRAM_CHAT_ID")]
    pub telegram_chat_id: Option<String>,

    /// Seconds to sleep between poll cycles.
    #[arg(
        long,
        env = "RETRY_TIME",
        default_value_t = DEFAULT_RETRY_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub retry_time: u64,

    /// Homework status API URL.
    #[arg(long, env = "PRACTICUM_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Bot API base URL.
    #[arg(long, env = "TELEGRAM_API_URL", default_value = DEFAULT_TELEGRAM_API)]
    pub telegram_api: String,

    /// Per-request timeout in seconds.
    #[arg(
        long,
        env = "REQUEST_TIMEOUT",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub request_timeout: u64,

    /// Initial `from_date` cursor (Unix seconds). Defaults to now.
    #[arg(long)]
    pub from_date: Option<i64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Poll forever (default).
    Run,
    /// Run a single poll cycle, print the result, and exit.
    PollOnce,
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            practicum_token: self.practicum_token.clone(),
            telegram_token: self.telegram_token.clone(),
            telegram_chat_id: self.telegram_chat_id.clone(),
            endpoint: Some(self.endpoint.clone()),
            telegram_api: Some(self.telegram_api.clone()),
            retry_secs: Some(self.retry_time),
            timeout_secs: Some(self.request_timeout),
        }
    }

    pub fn selected_command(&self) -> Command {
        self.command.unwrap_or(Command::Run)
    }
}
