//! Turns raw 2-D lookup/return arguments into a canonical lookup vector plus
//! a row-major return matrix, validating shape compatibility up front.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use gridmatch_model::ScalarValue;

/// Shape defects detected while normalizing raw lookup arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("lookup argument is a bare scalar, not an array")]
    NotAnArray,
    #[error("lookup and return arrays have incompatible dimensions")]
    DimensionMismatch,
}

/// Raw argument as received from the formula layer: a bare scalar, or a 2-D
/// grid of already-evaluated values (rows of scalars).
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Scalar(ScalarValue),
    Array(Vec<Vec<ScalarValue>>),
}

impl ArgValue {
    /// Single-column grid, one row per value.
    pub fn column(values: impl IntoIterator<Item = ScalarValue>) -> Self {
        ArgValue::Array(values.into_iter().map(|v| vec![v]).collect())
    }

    /// Single-row grid.
    pub fn row(values: impl IntoIterator<Item = ScalarValue>) -> Self {
        ArgValue::Array(vec![values.into_iter().collect()])
    }
}

impl From<ScalarValue> for ArgValue {
    fn from(value: ScalarValue) -> Self {
        ArgValue::Scalar(value)
    }
}

impl From<Vec<Vec<ScalarValue>>> for ArgValue {
    fn from(rows: Vec<Vec<ScalarValue>>) -> Self {
        ArgValue::Array(rows)
    }
}

/// Which axis of the raw lookup grid became the lookup vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// The lookup grid was a single row; the aligned return axis is columns.
    RowVector,
    /// The lookup vector is the grid's first column; the aligned return axis
    /// is rows.
    ColumnVector,
}

/// One lookup candidate paired with its original 0-based position along the
/// source axis.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupEntry {
    pub position: usize,
    pub value: ScalarValue,
}

/// Normalized 1-D lookup sequence. Built once per invocation, read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupVector {
    entries: Vec<LookupEntry>,
}

impl LookupVector {
    fn from_values(values: impl IntoIterator<Item = ScalarValue>) -> Self {
        LookupVector {
            entries: values
                .into_iter()
                .enumerate()
                .map(|(position, value)| LookupEntry { position, value })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[LookupEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&LookupEntry> {
        self.entries.get(index)
    }

    /// Original source-axis position of the entry at `index`.
    pub fn position(&self, index: usize) -> Option<usize> {
        self.entries.get(index).map(|entry| entry.position)
    }
}

/// Return structure kept row-major regardless of lookup orientation; the
/// projector applies orientation when indexing.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnMatrix {
    rows: usize,
    cols: usize,
    values: Vec<ScalarValue>,
}

impl ReturnMatrix {
    /// Builds from rows, validating rectangularity and the one-entry-per-row
    /// minimum.
    pub fn from_rows(rows: &[Vec<ScalarValue>]) -> Result<Self, ShapeError> {
        let Some(first) = rows.first() else {
            return Ok(ReturnMatrix {
                rows: 0,
                cols: 0,
                values: Vec::new(),
            });
        };
        let cols = first.len();
        if cols == 0 {
            return Err(ShapeError::DimensionMismatch);
        }
        let mut values = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.len() != cols {
                return Err(ShapeError::DimensionMismatch);
            }
            values.extend(row.iter().cloned());
        }
        Ok(ReturnMatrix {
            rows: rows.len(),
            cols,
            values,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The `row`-th row as a slice, if in bounds.
    pub fn row(&self, row: usize) -> Option<&[ScalarValue]> {
        if row >= self.rows {
            return None;
        }
        Some(&self.values[row * self.cols..(row + 1) * self.cols])
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&ScalarValue> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(&self.values[row * self.cols + col])
    }
}

/// Splits the raw lookup grid into a vector plus its orientation.
///
/// A single-row grid is the lookup vector itself (`RowVector`); any other
/// grid contributes the first element of each row (`ColumnVector`). A row
/// with no entries has no first element and is a shape defect.
pub fn normalize_lookup(lookup_raw: &ArgValue) -> Result<(LookupVector, Orientation), ShapeError> {
    let grid = match lookup_raw {
        ArgValue::Scalar(_) => return Err(ShapeError::NotAnArray),
        ArgValue::Array(rows) => rows,
    };
    if grid.len() == 1 {
        let vector = LookupVector::from_values(grid[0].iter().cloned());
        return Ok((vector, Orientation::RowVector));
    }
    let mut values = Vec::with_capacity(grid.len());
    for row in grid {
        let Some(first) = row.first() else {
            return Err(ShapeError::DimensionMismatch);
        };
        values.push(first.clone());
    }
    Ok((LookupVector::from_values(values), Orientation::ColumnVector))
}

/// Normalizes both arguments and verifies that exactly the aligned dimension
/// of the return matrix matches the lookup vector's length:
/// rows for a column lookup, columns for a row lookup.
pub fn normalize(
    lookup_raw: &ArgValue,
    return_raw: &ArgValue,
) -> Result<(LookupVector, ReturnMatrix, Orientation), ShapeError> {
    let (vector, orientation) = normalize_lookup(lookup_raw)?;
    let grid = match return_raw {
        ArgValue::Scalar(_) => return Err(ShapeError::NotAnArray),
        ArgValue::Array(rows) => rows,
    };
    let matrix = ReturnMatrix::from_rows(grid)?;
    let aligned = match orientation {
        Orientation::RowVector => matrix.cols(),
        Orientation::ColumnVector => matrix.rows(),
    };
    if aligned != vector.len() {
        return Err(ShapeError::DimensionMismatch);
    }
    Ok((vector, matrix, orientation))
}
