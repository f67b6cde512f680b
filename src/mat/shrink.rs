use num_traits::Zero;

use crate::*;

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
  /// A copy with row `row` removed, preserving the relative order of the
  /// remaining rows. Fails before building anything when `row >= R`.
  pub fn delete_row(&self, row: usize) -> Result<Matrix<T, { R - 1 }, C>, MatrixError>
  where
    [(); R - 1]:,
  {
    if row >= R {
      return Err(MatrixError::RowOutOfRange { index: row, rows: R });
    }
    let mut out = Matrix::zero();
    for r in 0..R - 1 {
      let src = if r < row { r } else { r + 1 };
      out.rows[r] = self.rows[src];
    }
    Ok(out)
  }

  /// A copy with column `col` removed, preserving the relative order of the
  /// remaining columns. Fails before building anything when `col >= C`.
  pub fn delete_column(&self, col: usize) -> Result<Matrix<T, R, { C - 1 }>, MatrixError>
  where
    [(); C - 1]:,
  {
    if col >= C {
      return Err(MatrixError::ColumnOutOfRange { index: col, cols: C });
    }
    let mut out = Matrix::zero();
    for r in 0..R {
      for c in 0..C - 1 {
        let src = if c < col { c } else { c + 1 };
        out.rows[r][c] = self.rows[r][src];
      }
    }
    Ok(out)
  }
}

impl<T: Scalar, const D: usize> Matrix<T, D, D> {
  /// The submatrix with `row` and `col` struck out, as used by cofactor
  /// expansion.
  pub fn minor(&self, row: usize, col: usize) -> Result<Matrix<T, { D - 1 }, { D - 1 }>, MatrixError>
  where
    [(); D - 1]:,
  {
    self.delete_row(row)?.delete_column(col)
  }
}

#[cfg(test)]
mod test {
  use crate::*;

  #[test]
  fn delete_row() {
    let m1 = Matrix::new([[3u32, 4], [5, 6]]);
    assert_eq!(m1.delete_row(1), Ok(Matrix::new([[3, 4]])));
    assert_eq!(m1.delete_row(0), Ok(Matrix::new([[5, 6]])));
    assert_eq!(
      m1.delete_row(2),
      Err(MatrixError::RowOutOfRange { index: 2, rows: 2 })
    );
  }

  #[test]
  fn delete_column() {
    let m1 = Matrix::new([[3u32, 4], [5, 6]]);
    assert_eq!(m1.delete_column(1), Ok(Matrix::new([[3], [5]])));
    assert_eq!(m1.delete_column(0), Ok(Matrix::new([[4], [6]])));
    assert_eq!(
      m1.delete_column(5),
      Err(MatrixError::ColumnOutOfRange { index: 5, cols: 2 })
    );
  }

  #[test]
  fn delete_preserves_order() {
    let m = Matrix::new([[1u32, 2, 3], [4, 5, 6], [7, 8, 9]]);
    assert_eq!(m.delete_row(1), Ok(Matrix::new([[1, 2, 3], [7, 8, 9]])));
    assert_eq!(
      m.delete_column(1),
      Ok(Matrix::new([[1, 3], [4, 6], [7, 9]]))
    );
  }

  #[test]
  fn minor_is_both_deletions() {
    let m = Matrix::new([[5i32, 3, 8], [1, 15, 77], [8, 9, 11]]);
    assert_eq!(m.minor(0, 1), Ok(Matrix::new([[1, 77], [8, 11]])));
    assert_eq!(
      m.minor(0, 3),
      Err(MatrixError::ColumnOutOfRange { index: 3, cols: 3 })
    );
  }
}
