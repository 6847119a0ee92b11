//! Consecutive-duplicate suppression for outgoing notifications.

/// The last message handed to the notifier, if any.
///
/// Starts empty and is overwritten after every attempted send; it is never
/// cleared, so an identical message is only ever sent once in a row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationState {
    last_message: Option<String>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    /// `false` iff `candidate` is exactly the last message.
    pub fn should_send(&self, candidate: &str) -> bool {
        self.last_message.as_deref() != Some(candidate)
    }

    /// Record `candidate` as the last attempted message.
    pub fn advance(self, candidate: impl Into<String>) -> Self {
        Self {
            last_message: Some(candidate.into()),
        }
    }
}
