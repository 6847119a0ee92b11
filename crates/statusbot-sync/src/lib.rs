//! Network collaborators: homework status API client and Telegram notifier.

#[cfg(feature = "http")]
pub mod http;
#[cfg(feature = "http")]
pub mod telegram;

#[cfg(feature = "http")]
pub use http::{PracticumClient, SyncError};
#[cfg(feature = "http")]
pub use telegram::TelegramNotifier;
