pub mod config;
pub mod cursor;
pub mod gate;
pub mod response;
pub mod traits;
pub mod verdict;

pub use config::{Config, ConfigError, Settings};
pub use cursor::Cursor;
pub use gate::NotificationState;
pub use response::{ValidatedResponse, ValidationError, validate};
pub use traits::{FetchError, Notifier, SendError, StatusSource};
pub use verdict::{HomeworkStatus, TranslationError, translate};
