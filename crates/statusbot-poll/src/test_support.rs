//! In-memory collaborators for driving cycles in tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use statusbot_core::{Cursor, FetchError, Notifier, SendError, StatusSource};

/// Replays scripted fetch results; the last one repeats once the script runs out.
#[derive(Clone, Default)]
pub struct ScriptedSource {
    inner: Arc<Mutex<SourceState>>,
    latency: Duration,
}

#[derive(Default)]
struct SourceState {
    script: VecDeque<Result<Value, FetchError>>,
    last: Option<Result<Value, FetchError>>,
    requests: Vec<Cursor>,
}

impl ScriptedSource {
    pub fn new(script: impl IntoIterator<Item = Result<Value, FetchError>>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SourceState {
                script: script.into_iter().collect(),
                ..SourceState::default()
            })),
            latency: Duration::ZERO,
        }
    }

    /// Every fetch takes `latency` of (Tokio) time before answering.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Cursors passed to `fetch`, in call order.
    pub fn requests(&self) -> Vec<Cursor> {
        self.inner.lock().unwrap().requests.clone()
    }
}

#[async_trait]
impl StatusSource for ScriptedSource {
    async fn fetch(&self, since: &Cursor) -> Result<Value, FetchError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let mut state = self.inner.lock().unwrap();
        state.requests.push(since.clone());
        if let Some(next) = state.script.pop_front() {
            state.last = Some(next);
        }
        state
            .last
            .clone()
            .unwrap_or_else(|| Err(FetchError::Transport("no scripted response".into())))
    }
}

/// Records every message it is asked to send.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<String>>>,
    failing: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records attempts but reports every one as rejected.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, text: &str) -> Result<(), SendError> {
        self.sent.lock().unwrap().push(text.to_string());
        if self.failing {
            return Err(SendError::Rejected {
                status: 400,
                description: "Bad Request: chat not found".into(),
            });
        }
        Ok(())
    }
}
