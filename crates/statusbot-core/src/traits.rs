use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::Cursor;

/// Why a status fetch produced no usable body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Timeout, DNS failure, refused connection, broken stream.
    #[error("request to the API failed: {0}")]
    Transport(String),
    /// The server answered with something other than 200 OK. The body is
    /// kept for logging and left out of the message.
    #[error("API returned {status}")]
    Status { status: u16, body: String },
    /// The body arrived but is not JSON.
    #[error("API body is not valid JSON: {0}")]
    Decode(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    #[error("notification request failed: {0}")]
    Transport(String),
    #[error("notification rejected ({status}): {description}")]
    Rejected { status: u16, description: String },
}

/// Source of homework status snapshots.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetch all status changes since `since`, as the decoded JSON body.
    async fn fetch(&self, since: &Cursor) -> Result<Value, FetchError>;
}

/// Outbound notification channel with a single fixed recipient.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, text: &str) -> Result<(), SendError>;
}
