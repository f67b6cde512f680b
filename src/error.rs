use thiserror::Error;

/// Failures of the runtime-checked matrix operations.
///
/// Shape agreement between operands and squareness of determinant inputs are
/// enforced at the type level, so what remains checkable at runtime is
/// indexing into a dimension and constructing from flat data of the wrong
/// length. Every fallible operation reports its error before building any
/// part of a result.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
  #[error("row index {index} out of range for a matrix with {rows} rows")]
  RowOutOfRange { index: usize, rows: usize },

  #[error("column index {index} out of range for a matrix with {cols} columns")]
  ColumnOutOfRange { index: usize, cols: usize },

  #[error("expected {expected} elements for a {rows} x {cols} matrix, got {actual}")]
  ShapeMismatch {
    rows: usize,
    cols: usize,
    expected: usize,
    actual: usize,
  },
}
