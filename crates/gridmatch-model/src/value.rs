use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use crate::ErrorKind;

/// Scalar cell value as seen by the lookup engine.
///
/// The enum uses an explicit `{type, value}` tagged layout for stable IPC.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ScalarValue {
    /// Empty / unset cell.
    Empty,
    /// IEEE-754 double precision number.
    Number(f64),
    /// Plain string.
    Text(String),
    /// Boolean.
    Boolean(bool),
    /// Spreadsheet error value carried as data.
    Error(ErrorKind),
}

impl Default for ScalarValue {
    fn default() -> Self {
        ScalarValue::Empty
    }
}

impl ScalarValue {
    /// Returns true if the value is [`ScalarValue::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, ScalarValue::Empty)
    }

    /// Returns true if the value is [`ScalarValue::Number`].
    pub fn is_number(&self) -> bool {
        matches!(self, ScalarValue::Number(_))
    }

    /// Canonical textual form: numbers via their default float rendering,
    /// booleans as `TRUE`/`FALSE`, errors as their token, empty as `""`.
    ///
    /// This is both the display form and the string the comparator case-folds
    /// when two non-numeric values are compared.
    pub fn canonical_text(&self) -> Cow<'_, str> {
        match self {
            ScalarValue::Empty => Cow::Borrowed(""),
            ScalarValue::Number(n) => Cow::Owned(n.to_string()),
            ScalarValue::Text(s) => Cow::Borrowed(s.as_str()),
            ScalarValue::Boolean(b) => Cow::Borrowed(if *b { "TRUE" } else { "FALSE" }),
            ScalarValue::Error(e) => Cow::Borrowed(e.as_code()),
        }
    }
}

impl From<f64> for ScalarValue {
    fn from(value: f64) -> Self {
        ScalarValue::Number(value)
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        ScalarValue::Number(value as f64)
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        ScalarValue::Boolean(value)
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::Text(value.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        ScalarValue::Text(value)
    }
}

impl From<ErrorKind> for ScalarValue {
    fn from(value: ErrorKind) -> Self {
        ScalarValue::Error(value)
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Empty => Ok(()),
            ScalarValue::Number(n) => write!(f, "{n}"),
            ScalarValue::Text(s) => f.write_str(s),
            ScalarValue::Boolean(b) => f.write_str(if *b { "TRUE" } else { "FALSE" }),
            ScalarValue::Error(e) => write!(f, "{e}"),
        }
    }
}
