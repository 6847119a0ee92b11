//! A single poll pass.

use statusbot_core::{Cursor, NotificationState, Notifier, StatusSource, translate, validate};
use tracing::{debug, error, info};

use crate::CycleFailure;

/// Fetch → validate → translate → notify, with every failure folded back
/// into a notification.
pub struct PollCycle<S, N> {
    source: S,
    notifier: N,
}

impl<S: StatusSource, N: Notifier> PollCycle<S, N> {
    pub fn new(source: S, notifier: N) -> Self {
        Self { source, notifier }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Run one pass. Never fails: problems become diagnostic notifications.
    ///
    /// The cursor moves only when the whole pass succeeded; otherwise the same
    /// window is requested again next time.
    pub async fn run(
        &self,
        cursor: Cursor,
        state: NotificationState,
    ) -> (Cursor, NotificationState) {
        match self.poll(&cursor).await {
            Ok((next_cursor, message)) => {
                if next_cursor != cursor {
                    info!(from = %cursor, to = %next_cursor, "cursor advanced");
                }
                let state = match message {
                    Some(message) => self.notify(message, state).await,
                    None => {
                        debug!("no new homework statuses");
                        state
                    }
                };
                (next_cursor, state)
            }
            Err(failure) => {
                let message = failure.diagnostic();
                error!(kind = failure.kind(), error = %failure, "poll cycle failed");
                (cursor, self.notify(message, state).await)
            }
        }
    }

    async fn poll(&self, cursor: &Cursor) -> Result<(Cursor, Option<String>), CycleFailure> {
        let raw = self.source.fetch(cursor).await?;
        let response = validate(raw)?;
        let message = response.latest().map(translate).transpose()?;
        Ok((cursor.clone().advance(&response.current_date), message))
    }

    /// Send unless it repeats the last message. The state advances whether or
    /// not delivery succeeded.
    async fn notify(&self, message: String, state: NotificationState) -> NotificationState {
        if !state.should_send(&message) {
            debug!(message = %message, "repeated message, not sending");
            return state;
        }
        match self.notifier.send(&message).await {
            Ok(()) => info!(message = %message, "notification sent"),
            Err(e) => error!(error = %e, "failed to send notification"),
        }
        state.advance(message)
    }
}
