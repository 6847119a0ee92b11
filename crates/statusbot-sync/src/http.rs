//! HTTP client for the homework status endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use statusbot_core::{Config, Cursor, FetchError, StatusSource};
use thiserror::Error;
use tracing::{debug, error, info};

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<SyncError> for FetchError {
    fn from(err: SyncError) -> Self {
        match err {
            SyncError::Http(e) => FetchError::Transport(e.to_string()),
            SyncError::Server { status, body } => FetchError::Status { status, body },
            SyncError::Json(e) => FetchError::Decode(e.to_string()),
        }
    }
}

/// Client for `GET <endpoint>?from_date=<cursor>` with OAuth token auth.
pub struct PracticumClient {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    /// Create a client whose requests give up after `timeout`.
    pub fn new(endpoint: String, token: String, timeout: Duration) -> Result<Self, SyncError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            token,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, SyncError> {
        Self::new(
            config.endpoint.clone(),
            config.practicum_token.clone(),
            config.request_timeout,
        )
    }

    /// Fetch homework statuses changed since `since`.
    ///
    /// Anything but `200 OK` is reported as [`SyncError::Server`] with the body text.
    pub async fn homework_statuses(&self, since: &Cursor) -> Result<Value, SyncError> {
        debug!(endpoint = %self.endpoint, from_date = %since, "requesting homework statuses");
        let resp = self
            .client
            .get(&self.endpoint)
            .header(reqwest::header::AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", since.as_str())])
            .send()
            .await?;
        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp.text().await.unwrap_or_default();
            error!(status = status.as_u16(), body = %body, "homework API answered with an error");
            return Err(SyncError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await?;
        let value: Value = serde_json::from_str(&body)?;
        info!(bytes = body.len(), "received homework statuses");
        Ok(value)
    }
}

#[async_trait]
impl StatusSource for PracticumClient {
    async fn fetch(&self, since: &Cursor) -> Result<Value, FetchError> {
        Ok(self.homework_statuses(since).await?)
    }
}
