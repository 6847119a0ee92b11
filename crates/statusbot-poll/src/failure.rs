//! Classification of everything that can go wrong inside a cycle.

use statusbot_core::{FetchError, TranslationError, ValidationError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CycleFailure {
    /// Transport problems and non-200 answers.
    #[error("{0}")]
    Connectivity(String),
    /// Malformed or undocumented response or record content.
    #[error("{0}")]
    DataShape(String),
    #[error("{0}")]
    Unclassified(String),
}

impl CycleFailure {
    /// One-line text sent to the recipient in place of a status update.
    pub fn diagnostic(&self) -> String {
        match self {
            Self::Connectivity(detail) => format!("Connection error: {detail}"),
            Self::DataShape(detail) => format!("Unexpected-type object: {detail}"),
            Self::Unclassified(detail) => format!("Program malfunction: {detail}"),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Connectivity(_) => "connectivity",
            Self::DataShape(_) => "data-shape",
            Self::Unclassified(_) => "unclassified",
        }
    }
}

impl From<FetchError> for CycleFailure {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Transport(_) | FetchError::Status { .. } => {
                Self::Connectivity(err.to_string())
            }
            FetchError::Decode(_) => Self::Unclassified(err.to_string()),
        }
    }
}

impl From<ValidationError> for CycleFailure {
    fn from(err: ValidationError) -> Self {
        Self::DataShape(err.to_string())
    }
}

impl From<TranslationError> for CycleFailure {
    fn from(err: TranslationError) -> Self {
        Self::DataShape(err.to_string())
    }
}
