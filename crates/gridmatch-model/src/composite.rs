use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::ScalarValue;

/// Error constructing a [`CompositeValue`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompositeError {
    #[error("composite value cannot be empty")]
    Empty,
}

/// Ordered multi-value lookup result.
///
/// Produced when a single match projects more than one cell (a multi-column
/// row, or a multi-row column). It is not an array spill: at the external
/// boundary it collapses to one text value via [`CompositeValue::join`].
///
/// Serializes as a plain array of scalars.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ScalarValue>", into = "Vec<ScalarValue>")]
pub struct CompositeValue {
    values: Vec<ScalarValue>,
}

impl CompositeValue {
    /// Builds a composite from a first value and any further values.
    pub fn new(first: ScalarValue, rest: impl IntoIterator<Item = ScalarValue>) -> Self {
        let mut values = vec![first];
        values.extend(rest);
        CompositeValue { values }
    }

    /// Builds a composite from a non-empty vector of values.
    pub fn from_vec(values: Vec<ScalarValue>) -> Result<Self, CompositeError> {
        if values.is_empty() {
            return Err(CompositeError::Empty);
        }
        Ok(CompositeValue { values })
    }

    /// The values in projection order.
    pub fn values(&self) -> &[ScalarValue] {
        &self.values
    }

    /// Number of values; always at least 1.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Never true; present for API completeness alongside [`CompositeValue::len`].
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Comma-and-space joined canonical text of the values, in order.
    pub fn join(&self) -> String {
        self.to_string()
    }

    /// Collapses into a single text scalar (the external boundary form).
    pub fn into_text(self) -> ScalarValue {
        ScalarValue::Text(self.join())
    }
}

impl fmt::Display for CompositeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<ScalarValue>> for CompositeValue {
    type Error = CompositeError;

    fn try_from(values: Vec<ScalarValue>) -> Result<Self, Self::Error> {
        CompositeValue::from_vec(values)
    }
}

impl From<CompositeValue> for Vec<ScalarValue> {
    fn from(composite: CompositeValue) -> Self {
        composite.values
    }
}

impl From<CompositeValue> for ScalarValue {
    fn from(composite: CompositeValue) -> Self {
        composite.into_text()
    }
}
