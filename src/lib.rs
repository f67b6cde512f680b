#![feature(generic_const_exprs)]
#![allow(incomplete_features)]

//! Fixed-dimension dense matrices with type-level shapes.
//!
//! A [`Matrix<T, R, C>`] stores `R x C` scalars inline, row-major. Both
//! dimensions are const parameters, so shape agreement between the operands
//! of addition, subtraction and multiplication is checked by the compiler,
//! and shape-changing operations (transpose, multiplication, row and column
//! deletion) return matrices of a new statically-determined shape.
//!
//! The determinant follows the textbook cofactor expansion along row zero.
//! It is exponential in the dimension and intentionally so; this crate does
//! not ship an elimination-based fast path.

pub mod error;
pub mod mat;
pub mod scalar;

mod ser;

pub use error::*;
pub use mat::*;
pub use scalar::*;

pub type Mat2<T> = Matrix<T, 2, 2>;
pub type Mat3<T> = Matrix<T, 3, 3>;
pub type Mat4<T> = Matrix<T, 4, 4>;
