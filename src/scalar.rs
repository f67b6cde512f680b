use std::fmt::Debug;

use num_traits::Num;

/// The arithmetic element type stored in every matrix cell.
///
/// Blanket-implemented for every primitive integer and float type via
/// [`num_traits::Num`]. Overflow and rounding follow the scalar's native
/// semantics; the matrix operations add no checking of their own.
pub trait Scalar: Num + Copy + PartialEq + Debug + 'static {}

impl<T> Scalar for T where T: Num + Copy + PartialEq + Debug + 'static {}
