use crate::*;

impl<T: Scalar, const D: usize> Matrix<T, D, D> {
  /// Determinant by cofactor expansion along row zero.
  ///
  /// The 2 x 2 base case is `a[0][0] * a[1][1] - a[1][0] * a[0][1]`; larger
  /// matrices sum `sign(n) * a[0][n] * det(minor(A, 0, n))` over row zero,
  /// with the sign alternation applied through the scalar's own addition and
  /// subtraction so signed and unsigned element types keep their native
  /// arithmetic. Factorial time in `D`; the recursion is the mathematical
  /// definition, not an optimized algorithm.
  ///
  /// Only defined for `D >= 2`; smaller matrices fail to compile.
  #[must_use]
  pub fn det(&self) -> T
  where
    [(); D - 2]:,
  {
    self.det_inner(D)
  }

  // Recursion happens inside the fixed `D x D` storage: each level reads only
  // the top-left `dim` square, and `shift_minor` packs the next minor into
  // that corner. This keeps the cofactor recursion fully generic in `D`.
  fn det_inner(&self, dim: usize) -> T {
    if dim == 2 {
      return self.rows[0][0] * self.rows[1][1] - self.rows[1][0] * self.rows[0][1];
    }
    let mut acc = T::zero();
    for n in 0..dim {
      let term = self.rows[0][n] * self.shift_minor(dim, n).det_inner(dim - 1);
      acc = if n % 2 == 0 { acc + term } else { acc - term };
    }
    acc
  }

  // The minor of (0, col) within the top-left `dim` square, moved one step
  // toward the origin. Cells outside that square are left as they were; the
  // next recursion level never reads them.
  fn shift_minor(&self, dim: usize, col: usize) -> Self {
    let mut out = *self;
    for r in 1..dim {
      let mut dst = 0;
      for c in 0..dim {
        if c == col {
          continue;
        }
        out.rows[r - 1][dst] = self.rows[r][c];
        dst += 1;
      }
    }
    out
  }
}

#[test]
fn matches_cgmath() {
  // cgmath is column-major, so feeding our rows in as its columns hands it
  // the transpose, which shares the determinant.
  let m = Matrix::new([[0.5f32, 3.0, 8.0], [1.0, -2.5, 7.0], [8.0, 9.0, 1.5]]);
  let cg = cgmath::Matrix3::new(0.5f32, 3.0, 8.0, 1.0, -2.5, 7.0, 8.0, 9.0, 1.5);
  let ours = m.det();
  let theirs = cgmath::SquareMatrix::determinant(&cg);
  assert!((ours - theirs).abs() < 1e-4, "{} vs {}", ours, theirs);
}

#[cfg(test)]
mod test {
  use crate::*;

  #[test]
  fn det_2x2() {
    let m = Matrix::new([[3i32, 4], [5, 6]]);
    assert_eq!(m.det(), 3 * 6 - 5 * 4);
  }

  #[test]
  fn det_3x3() {
    let m = Matrix::new([[5i32, 3, 8], [1, 15, 77], [8, 9, 11]]);
    assert_eq!(m.det(), -1713);
  }

  #[test]
  fn det_4x4() {
    let m = Matrix::new([
      [66i32, 13, 8, 45],
      [45, 12, 678, 33],
      [675, 123, 666, 99],
      [1010, 90, 67, 1],
    ]);
    assert_eq!(m.det(), 1_365_434_865);
  }

  #[test]
  fn det_identity() {
    assert_eq!(Mat4::<i64>::identity().det(), 1);
  }

  #[test]
  fn det_of_transpose() {
    let m = Matrix::new([[5i32, 3, 8], [1, 15, 77], [8, 9, 11]]);
    assert_eq!(m.transpose().det(), m.det());
  }
}
