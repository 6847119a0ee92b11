//! Homework review statuses and their human-readable verdicts.

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub const NAME_FIELD: &str = "homework_name";
pub const STATUS_FIELD: &str = "status";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    #[error("missing field '{0}'")]
    MissingField(&'static str),
    #[error("undocumented homework status '{0}'")]
    UnknownStatus(String),
}

/// Review status reported by the homework API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub const ALL: [HomeworkStatus; 3] = [Self::Approved, Self::Reviewing, Self::Rejected];

    /// Parse the wire status code. Unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Fixed verdict text shown to the recipient.
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Approved => "Work reviewed: the reviewer liked everything. Hooray!",
            Self::Reviewing => "Taken for review by a reviewer.",
            Self::Rejected => "Work reviewed: the reviewer has comments.",
        }
    }
}

/// Turn one homework record into the notification sentence.
///
/// The record must be an object with non-empty string `homework_name` and
/// `status` fields, and the status must be one of [`HomeworkStatus::ALL`].
pub fn translate(record: &Value) -> Result<String, TranslationError> {
    debug!("parsing homework status");
    let name = non_empty_str(record, NAME_FIELD)?;
    let code = non_empty_str(record, STATUS_FIELD)?;
    let status = HomeworkStatus::from_code(code)
        .ok_or_else(|| TranslationError::UnknownStatus(code.to_string()))?;
    Ok(format!(
        "Changed status of work \"{name}\". {}",
        status.verdict()
    ))
}

fn non_empty_str<'a>(record: &'a Value, field: &'static str) -> Result<&'a str, TranslationError> {
    match record.get(field).and_then(Value::as_str) {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(TranslationError::MissingField(field)),
    }
}
