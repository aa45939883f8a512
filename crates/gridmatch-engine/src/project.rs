//! Projects a matched position into the return matrix, collapsing
//! single-cell results to scalars and multi-cell results to composites.

use thiserror::Error;

use gridmatch_model::{CompositeValue, ScalarValue};

use crate::normalize::{Orientation, ReturnMatrix};

/// Bounds defect detected while projecting a match into the return matrix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("matched position lies outside the return array")]
    OutOfBounds,
}

/// A projected lookup result: one cell, or the ordered cells of the matched
/// row/column.
#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    Scalar(ScalarValue),
    Composite(CompositeValue),
}

impl Projection {
    /// External boundary form: composites collapse to their joined text.
    pub fn into_scalar(self) -> ScalarValue {
        match self {
            Projection::Scalar(value) => value,
            Projection::Composite(composite) => composite.into_text(),
        }
    }
}

/// Projects the matched position into the return matrix.
///
/// A column lookup takes the matched row; a row lookup takes the matched
/// column, top to bottom. One projected cell collapses to a scalar; anything
/// wider stays a composite in source order. The position is checked against
/// the aligned dimension, never clamped.
pub fn project(
    index: usize,
    matrix: &ReturnMatrix,
    orientation: Orientation,
) -> Result<Projection, RangeError> {
    match orientation {
        Orientation::ColumnVector => {
            let row = matrix.row(index).ok_or(RangeError::OutOfBounds)?;
            collapse(row.to_vec())
        }
        Orientation::RowVector => {
            if index >= matrix.cols() {
                return Err(RangeError::OutOfBounds);
            }
            let mut values = Vec::with_capacity(matrix.rows());
            for row in 0..matrix.rows() {
                let value = matrix.get(row, index).ok_or(RangeError::OutOfBounds)?;
                values.push(value.clone());
            }
            collapse(values)
        }
    }
}

fn collapse(values: Vec<ScalarValue>) -> Result<Projection, RangeError> {
    let mut iter = values.into_iter();
    // An empty projection can only come from a zero-sized aligned dimension,
    // which the bounds checks above already reject.
    let first = iter.next().ok_or(RangeError::OutOfBounds)?;
    let rest: Vec<ScalarValue> = iter.collect();
    Ok(if rest.is_empty() {
        Projection::Scalar(first)
    } else {
        Projection::Composite(CompositeValue::new(first, rest))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn num(n: f64) -> ScalarValue {
        ScalarValue::Number(n)
    }

    fn matrix(rows: &[Vec<ScalarValue>]) -> ReturnMatrix {
        ReturnMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn column_lookup_with_one_return_column_is_a_scalar() {
        let m = matrix(&[vec![num(500.0)], vec![num(400.0)], vec![num(300.0)]]);
        assert_eq!(
            project(1, &m, Orientation::ColumnVector).unwrap(),
            Projection::Scalar(num(400.0))
        );
    }

    #[test]
    fn column_lookup_with_a_wide_row_is_a_composite() {
        let m = matrix(&[
            vec![num(3.55), num(500.0)],
            vec![num(3.25), num(400.0)],
        ]);
        let projected = project(1, &m, Orientation::ColumnVector).unwrap();
        assert_eq!(
            projected,
            Projection::Composite(CompositeValue::new(num(3.25), [num(400.0)]))
        );
        assert_eq!(
            projected.into_scalar(),
            ScalarValue::Text("3.25, 400".to_string())
        );
    }

    #[test]
    fn row_lookup_projects_the_matched_column_top_to_bottom() {
        let m = matrix(&[
            vec![num(0.457), num(0.525), num(0.616)],
            vec![num(3.55), num(3.25), num(2.93)],
        ]);
        assert_eq!(
            project(1, &m, Orientation::RowVector).unwrap(),
            Projection::Composite(CompositeValue::new(num(0.525), [num(3.25)]))
        );

        let single = matrix(&[vec![num(0.457), num(0.525), num(0.616)]]);
        assert_eq!(
            project(2, &single, Orientation::RowVector).unwrap(),
            Projection::Scalar(num(0.616))
        );
    }

    #[test]
    fn positions_outside_the_aligned_dimension_are_rejected() {
        let m = matrix(&[vec![num(1.0)], vec![num(2.0)]]);
        assert_eq!(
            project(2, &m, Orientation::ColumnVector),
            Err(RangeError::OutOfBounds)
        );
        assert_eq!(
            project(1, &m, Orientation::RowVector),
            Err(RangeError::OutOfBounds)
        );

        let empty = ReturnMatrix::from_rows(&[]).unwrap();
        assert_eq!(
            project(0, &empty, Orientation::ColumnVector),
            Err(RangeError::OutOfBounds)
        );
    }
}
