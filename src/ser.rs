//! Serde support, written by hand: the derive cannot see through
//! const-generic nested arrays, so a matrix travels as a sequence of `R`
//! rows of `C` scalars and anything of another shape is rejected while
//! deserializing.

use std::fmt;
use std::marker::PhantomData;

use num_traits::Zero;
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::*;

struct Cells<'a, T>(&'a [T]);

impl<T: Serialize> Serialize for Cells<'_, T> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(self.0.iter())
  }
}

impl<T, const R: usize, const C: usize> Serialize for Matrix<T, R, C>
where
  T: Serialize,
{
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq((0..R).map(|r| Cells(&self[r])))
  }
}

struct Row<T, const C: usize>([T; C]);

struct RowVisitor<T, const C: usize>(PhantomData<T>);

impl<'de, T, const C: usize> Visitor<'de> for RowVisitor<T, C>
where
  T: Deserialize<'de> + Scalar,
{
  type Value = Row<T, C>;

  fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "a row of exactly {} scalars", C)
  }

  fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
    let mut cells = [T::zero(); C];
    for (c, cell) in cells.iter_mut().enumerate() {
      *cell = seq
        .next_element()?
        .ok_or_else(|| de::Error::invalid_length(c, &self))?;
    }
    if seq.next_element::<T>()?.is_some() {
      return Err(de::Error::invalid_length(C + 1, &self));
    }
    Ok(Row(cells))
  }
}

impl<'de, T, const C: usize> Deserialize<'de> for Row<T, C>
where
  T: Deserialize<'de> + Scalar,
{
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserializer.deserialize_seq(RowVisitor(PhantomData))
  }
}

struct MatrixVisitor<T, const R: usize, const C: usize>(PhantomData<T>);

impl<'de, T, const R: usize, const C: usize> Visitor<'de> for MatrixVisitor<T, R, C>
where
  T: Deserialize<'de> + Scalar,
{
  type Value = Matrix<T, R, C>;

  fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "exactly {} rows of {} scalars", R, C)
  }

  fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
    let mut out = Matrix::zero();
    for r in 0..R {
      let row: Row<T, C> = seq
        .next_element()?
        .ok_or_else(|| de::Error::invalid_length(r, &self))?;
      out[r] = row.0;
    }
    if seq.next_element::<Row<T, C>>()?.is_some() {
      return Err(de::Error::invalid_length(R + 1, &self));
    }
    Ok(out)
  }
}

impl<'de, T, const R: usize, const C: usize> Deserialize<'de> for Matrix<T, R, C>
where
  T: Deserialize<'de> + Scalar,
{
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserializer.deserialize_seq(MatrixVisitor(PhantomData))
  }
}

#[cfg(test)]
mod test {
  use crate::*;

  #[test]
  fn round_trip() {
    let m = Matrix::new([[1i32, 2, 3], [4, 5, 6]]);
    let json = serde_json::to_string(&m).unwrap();
    assert_eq!(json, "[[1,2,3],[4,5,6]]");
    let back: Matrix<i32, 2, 3> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);
  }

  #[test]
  fn rejects_wrong_shape() {
    assert!(serde_json::from_str::<Matrix<i32, 2, 2>>("[[1,2],[3]]").is_err());
    assert!(serde_json::from_str::<Matrix<i32, 2, 2>>("[[1,2]]").is_err());
    assert!(serde_json::from_str::<Matrix<i32, 2, 2>>("[[1,2],[3,4],[5,6]]").is_err());
    assert!(serde_json::from_str::<Matrix<i32, 2, 2>>("[[1,2,9],[3,4]]").is_err());
  }
}
