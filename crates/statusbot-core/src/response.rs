//! Structural validation of the homework status API response.
//!
//! The API documents a JSON object with two keys:
//!
//! ```json
//! { "homeworks": [ { "homework_name": "...", "status": "..." } ], "current_date": 1700000000 }
//! ```
//!
//! Only the envelope is checked here. Individual records are left untouched
//! and interpreted later by [`translate`](crate::translate).

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Key holding the ordered sequence of homework records.
pub const HOMEWORKS_KEY: &str = "homeworks";
/// Key holding the server-supplied cursor for the next request.
pub const CURRENT_DATE_KEY: &str = "current_date";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0}")]
    Shape(String),
    #[error("missing key '{0}'")]
    MissingKey(&'static str),
}

/// A response whose envelope matched the documented shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedResponse {
    /// Homework records, newest first, possibly empty.
    pub homeworks: Vec<Value>,
    /// Raw `current_date` value, not interpreted.
    pub current_date: Value,
}

impl ValidatedResponse {
    /// The record the poll loop reports on, if any.
    pub fn latest(&self) -> Option<&Value> {
        self.homeworks.first()
    }
}

/// Check that `raw` is an object carrying `homeworks` (an array) and `current_date`.
pub fn validate(raw: Value) -> Result<ValidatedResponse, ValidationError> {
    debug!(response = %raw, "validating API response");
    let Value::Object(mut map) = raw else {
        return Err(ValidationError::Shape(format!(
            "response is not a mapping: got {}",
            type_name(&raw)
        )));
    };

    let homeworks = map
        .remove(HOMEWORKS_KEY)
        .ok_or(ValidationError::MissingKey(HOMEWORKS_KEY))?;
    let current_date = map
        .remove(CURRENT_DATE_KEY)
        .ok_or(ValidationError::MissingKey(CURRENT_DATE_KEY))?;

    let Value::Array(homeworks) = homeworks else {
        return Err(ValidationError::Shape(format!(
            "'{HOMEWORKS_KEY}' is not a sequence: got {}",
            type_name(&homeworks)
        )));
    };

    Ok(ValidatedResponse {
        homeworks,
        current_date,
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
