mod det;
mod ops;
mod shrink;

use std::fmt;
use std::fmt::Debug;
use std::ops::{Index, IndexMut};

use num_traits::{One, Zero};

use crate::*;

/// A dense row-major matrix with `R` rows and `C` columns fixed at the type
/// level.
///
/// Every cell holds a value; there is no sparse or missing entry. The shape
/// never changes after construction: operations that produce a different
/// shape return a fresh matrix of the new type and leave the input untouched.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub struct Matrix<T, const R: usize, const C: usize> {
  pub(crate) rows: [[T; C]; R],
}

unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable
  for Matrix<T, R, C>
{
}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
  /// Wrap a fully populated row-major literal of the exact shape.
  pub const fn new(rows: [[T; C]; R]) -> Self {
    Self { rows }
  }

  pub const fn row_count(&self) -> usize {
    R
  }

  pub const fn column_count(&self) -> usize {
    C
  }

  /// Checked element access; `None` outside `[0, R) x [0, C)`.
  pub fn get(&self, row: usize, col: usize) -> Option<&T> {
    self.rows.get(row).and_then(|r| r.get(col))
  }

  pub fn into_rows(self) -> [[T; C]; R] {
    self.rows
  }

  /// The cells as one flat row-major slice.
  pub fn as_slice(&self) -> &[T] {
    // repr(transparent) over [[T; C]; R], which is R * C consecutive T
    unsafe { std::slice::from_raw_parts(self.rows.as_ptr().cast(), R * C) }
  }

  /// Apply `f` to every cell, producing a matrix of the results.
  pub fn map<X>(self, f: impl Fn(T) -> X) -> Matrix<X, R, C> {
    Matrix {
      rows: self.rows.map(|row| row.map(|v| f(v))),
    }
  }
}

impl<T: Copy, const R: usize, const C: usize> Matrix<T, R, C> {
  /// Combine the corresponding cells of two matrices pairwise.
  pub fn zip<F>(self, other: Self, f: F) -> Self
  where
    F: Fn(T, T) -> T,
  {
    let mut out = self;
    for r in 0..R {
      for c in 0..C {
        out.rows[r][c] = f(self.rows[r][c], other.rows[r][c]);
      }
    }
    out
  }

  pub fn row(&self, row: usize) -> Option<[T; C]> {
    self.rows.get(row).copied()
  }

  pub fn column(&self, col: usize) -> Option<[T; R]> {
    if col >= C {
      return None;
    }
    Some(std::array::from_fn(|r| self.rows[r][col]))
  }

  /// The matrix with rows and columns exchanged: `out[(j, i)] = a[(i, j)]`.
  ///
  /// Transposing twice reproduces the original.
  #[must_use]
  pub fn transpose(&self) -> Matrix<T, C, R> {
    Matrix {
      rows: std::array::from_fn(|c| std::array::from_fn(|r| self.rows[r][c])),
    }
  }
}

impl<T: Scalar, const D: usize> Matrix<T, D, D> {
  pub fn identity() -> Self {
    Self::one()
  }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
  fn from(rows: [[T; C]; R]) -> Self {
    Self { rows }
  }
}

/// Build from a flat row-major slice, rejecting any length other than
/// `R * C` before constructing anything.
impl<T: Scalar, const R: usize, const C: usize> TryFrom<&[T]> for Matrix<T, R, C> {
  type Error = MatrixError;

  fn try_from(flat: &[T]) -> Result<Self, MatrixError> {
    if flat.len() != R * C {
      return Err(MatrixError::ShapeMismatch {
        rows: R,
        cols: C,
        expected: R * C,
        actual: flat.len(),
      });
    }
    let mut out = Self::zero();
    for r in 0..R {
      for c in 0..C {
        out.rows[r][c] = flat[r * C + c];
      }
    }
    Ok(out)
  }
}

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
  type Output = T;

  fn index(&self, (row, col): (usize, usize)) -> &T {
    &self.rows[row][col]
  }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
  fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
    &mut self.rows[row][col]
  }
}

impl<T, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
  type Output = [T; C];

  fn index(&self, row: usize) -> &[T; C] {
    &self.rows[row]
  }
}

impl<T, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
  fn index_mut(&mut self, row: usize) -> &mut [T; C] {
    &mut self.rows[row]
  }
}

impl<T, const R: usize, const C: usize> num_traits::Zero for Matrix<T, R, C>
where
  T: num_traits::Zero + Copy + PartialEq,
{
  #[inline(always)]
  fn zero() -> Self {
    Self {
      rows: [[T::zero(); C]; R],
    }
  }

  #[inline(always)]
  fn is_zero(&self) -> bool {
    self.eq(&Self::zero())
  }
}

impl<T, const D: usize> num_traits::One for Matrix<T, D, D>
where
  T: num_traits::One + num_traits::Zero + Copy + PartialEq,
{
  #[inline(always)]
  fn one() -> Self {
    let mut out = Self::zero();
    for i in 0..D {
      out.rows[i][i] = T::one();
    }
    out
  }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
  T: num_traits::Zero + Copy + PartialEq,
{
  fn default() -> Self {
    Self::zero()
  }
}

impl<T, const R: usize, const C: usize> AsRef<Matrix<T, R, C>> for Matrix<T, R, C> {
  fn as_ref(&self) -> &Matrix<T, R, C> {
    self
  }
}

impl<T, const R: usize, const C: usize> AsMut<Matrix<T, R, C>> for Matrix<T, R, C> {
  fn as_mut(&mut self) -> &mut Matrix<T, R, C> {
    self
  }
}

/// One line naming the shape, then one `|`-bounded tab-separated line per row.
impl<T, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C>
where
  T: Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    writeln!(f, "{} x {}", R, C)?;
    for row in &self.rows {
      write!(f, "|")?;
      for (n, cell) in row.iter().enumerate() {
        if n != 0 {
          write!(f, "\t")?;
        }
        write!(f, "{:?}", cell)?;
      }
      writeln!(f, "|")?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod test {
  use num_traits::Zero;

  use crate::*;

  #[test]
  fn construction() {
    let zero = Matrix::<u32, 2, 3>::zero();
    assert_eq!(zero.as_slice(), &[0u32; 6][..]);
    assert_eq!(zero, Matrix::default());

    let m = Matrix::new([[1u32, 2, 3], [4, 5, 6]]);
    assert_eq!(m.row_count(), 2);
    assert_eq!(m.column_count(), 3);
    assert_eq!(m[(1, 2)], 6);
    assert_eq!(m.get(1, 2), Some(&6));
    assert_eq!(m.get(2, 0), None);
    assert_eq!(m.row(1), Some([4, 5, 6]));
    assert_eq!(m.column(0), Some([1, 4]));

    let id = Mat3::<i32>::identity();
    assert_eq!(id, Matrix::new([[1, 0, 0], [0, 1, 0], [0, 0, 1]]));
  }

  #[test]
  fn from_flat_slice() {
    let m = Matrix::<u32, 2, 2>::try_from([3u32, 4, 5, 6].as_slice()).unwrap();
    assert_eq!(m, Matrix::new([[3, 4], [5, 6]]));

    let err = Matrix::<u32, 2, 2>::try_from([3u32, 4, 5].as_slice()).unwrap_err();
    assert_eq!(
      err,
      MatrixError::ShapeMismatch {
        rows: 2,
        cols: 2,
        expected: 4,
        actual: 3,
      }
    );
  }

  #[test]
  fn element_write() {
    let mut m = Matrix::<i32, 2, 2>::zero();
    m[(0, 1)] = 7;
    m[1] = [8, 9];
    assert_eq!(m, Matrix::new([[0, 7], [8, 9]]));
  }

  #[test]
  fn transpose_involutive() {
    let m1 = Matrix::new([[11i32, 1]]);
    let m2 = m1.transpose();
    assert_eq!(m2, Matrix::new([[11], [1]]));
    assert_eq!(m2.transpose(), m1);

    let m4 = Matrix::<u32, 5, 3>::new([
      [1, 2, 3],
      [4, 5, 6],
      [7, 8, 9],
      [10, 11, 12],
      [13, 14, 15],
    ]);
    assert_eq!(m4.transpose().transpose(), m4);

    let m7 = Matrix::new([[1i32, 2, 3], [0, -6, 7]]);
    let m8 = Matrix::new([[1i32, 0], [2, -6], [3, 7]]);
    assert_eq!(m7.transpose(), m8);
  }

  #[test]
  fn display_grid() {
    let m = Matrix::new([[3u32, 4], [5, 6]]);
    assert_eq!(m.to_string(), "2 x 2\n|3\t4|\n|5\t6|\n");
  }

  #[test]
  fn pod_cast() {
    let m = Matrix::new([[1.0f32, 2.0], [3.0, 4.0]]);
    let bytes: &[u8] = bytemuck::bytes_of(&m);
    assert_eq!(bytes.len(), 16);
    assert_eq!(bytemuck::from_bytes::<Matrix<f32, 2, 2>>(bytes), &m);
  }
}
