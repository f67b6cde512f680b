use std::ops::{Add, Mul, Sub};

use num_traits::Zero;

use crate::*;

impl<T, const R: usize, const C: usize> Add for Matrix<T, R, C>
where
  T: Copy + Add<Output = T>,
{
  type Output = Self;

  fn add(self, rhs: Self) -> Self {
    self.zip(rhs, |a, b| a + b)
  }
}

impl<T, const R: usize, const C: usize> Sub for Matrix<T, R, C>
where
  T: Copy + Sub<Output = T>,
{
  type Output = Self;

  fn sub(self, rhs: Self) -> Self {
    self.zip(rhs, |a, b| a - b)
  }
}

impl<T, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C>
where
  T: Copy + Mul<Output = T>,
{
  type Output = Self;

  fn mul(self, scalar: T) -> Self {
    self.map(|v| v * scalar)
  }
}

// `scalar * matrix` cannot be written once for every scalar without putting
// an uncovered type parameter in the self position, so it is spelled out per
// primitive arithmetic type.
macro_rules! impl_scalar_lhs_mul {
  ($($t:ty),+) => {$(
    impl<const R: usize, const C: usize> Mul<Matrix<$t, R, C>> for $t {
      type Output = Matrix<$t, R, C>;

      fn mul(self, matrix: Matrix<$t, R, C>) -> Matrix<$t, R, C> {
        matrix * self
      }
    }
  )+};
}

impl_scalar_lhs_mul!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

/// Matrix product; the inner dimensions must agree at the type level, and the
/// output shape is `R x K`. Not commutative: for non-square operands the two
/// orders do not even share a result type.
impl<T, const R: usize, const C: usize, const K: usize> Mul<Matrix<T, C, K>> for Matrix<T, R, C>
where
  T: Copy + PartialEq + Zero + Add<Output = T> + Mul<Output = T>,
{
  type Output = Matrix<T, R, K>;

  fn mul(self, rhs: Matrix<T, C, K>) -> Matrix<T, R, K> {
    let mut out = Matrix::zero();
    for m in 0..R {
      for p in 0..K {
        let mut acc = T::zero();
        for n in 0..C {
          acc = acc + self.rows[m][n] * rhs.rows[n][p];
        }
        out.rows[m][p] = acc;
      }
    }
    out
  }
}
