//! Lower bound for the next status request.
//!
//! The API hands back `current_date` with every response; passing it as
//! `from_date` on the next request yields only changes since then. The value is
//! treated as opaque: it is rendered into the query string and never compared.

use std::fmt;

use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor(String);

impl Cursor {
    /// Cursor at the given Unix timestamp (seconds).
    pub fn from_unix(seconds: i64) -> Self {
        Self(seconds.to_string())
    }

    /// Query-string form of the cursor.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Cursor carried by a server-supplied `current_date`.
    ///
    /// `null` carries no marker and yields `None`. Strings are used verbatim;
    /// any other value is used in its compact JSON form.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(Self(s.clone())),
            other => Some(Self(other.to_string())),
        }
    }

    /// Next cursor after a successful response: the server marker if present,
    /// otherwise `self` unchanged.
    pub fn advance(self, current_date: &Value) -> Self {
        Self::from_value(current_date).unwrap_or(self)
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for Cursor {
    fn from(seconds: i64) -> Self {
        Self::from_unix(seconds)
    }
}
