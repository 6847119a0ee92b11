//! Telegram Bot API notifier delivering to one fixed chat.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use statusbot_core::{Config, Notifier, SendError};
use tracing::debug;

use crate::SyncError;

/// Bot API reply envelope; only the fields needed to detect a rejection.
#[derive(Deserialize)]
struct ApiReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

pub struct TelegramNotifier {
    client: reqwest::Client,
    base_url: String,
    token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(token: String, chat_id: String, timeout: Duration) -> Result<Self, SyncError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: statusbot_core::config::DEFAULT_TELEGRAM_API.to_string(),
            token,
            chat_id,
        })
    }

    /// Point the notifier at a different Bot API server (self-hosted or mock).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn from_config(config: &Config) -> Result<Self, SyncError> {
        Ok(Self::new(
            config.telegram_token.clone(),
            config.telegram_chat_id.clone(),
            config.request_timeout,
        )?
        .with_base_url(config.telegram_api.clone()))
    }

    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    async fn send_message(&self, text: &str) -> Result<(), SendError> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.token);
        let body = json!({
            "chat_id": self.chat_id,
            "text": text,
        });
        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| SendError::Transport(e.without_url().to_string()))?;
        let status = resp.status();
        let reply: Option<ApiReply> = resp.json().await.ok();

        match reply {
            Some(ApiReply { ok: true, .. }) if status.is_success() => Ok(()),
            reply => Err(SendError::Rejected {
                status: status.as_u16(),
                description: reply
                    .and_then(|r| r.description)
                    .unwrap_or_else(|| "no description".to_string()),
            }),
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), SendError> {
        debug!(chat_id = %self.chat_id, message = %text, "sending telegram message");
        self.send_message(text).await?;
        debug!("telegram message sent");
        Ok(())
    }
}
