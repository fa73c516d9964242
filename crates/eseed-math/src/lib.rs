//! Fixed-size vector and matrix value types for graphics and engine code.
//!
//! [`Vector`] and [`Matrix`] are small, allocation-free, [`Copy`]able values whose dimensions are
//! const generic parameters. They are generic over their scalar type, and every arithmetic,
//! bitwise and logical operator is defined *element-wise*.
//!
//! # Element-wise operators
//!
//! All binary operators (`+ - * / % & | ^ << >>`) are supported in three shapes: between two
//! containers of the same dimensions, between a container and a scalar, and between a scalar and
//! a container. The element type of the result is whatever the scalar operator produces, so
//! `Matrix<u32, R, C> << u8` yields a `Matrix<u32, R, C>`, exactly like `u32 << u8` yields `u32`.
//!
//! Note that this includes `*`: multiplying two matrices with `*` multiplies corresponding
//! elements. The linear-algebra product is available as [`Matrix::matmul`] and
//! [`Matrix::mul_vec`].
//!
//! ```
//! # use eseed_math::*;
//! let a = Matrix::from_rows([
//!     [1, 2],
//!     [3, 4],
//! ]);
//! assert_eq!(a * a, Matrix::from_rows([
//!     [1, 4],
//!     [9, 16],
//! ]));
//! assert_eq!(a.matmul(a), Matrix::from_rows([
//!     [7, 10],
//!     [15, 22],
//! ]));
//! ```
//!
//! # Layout
//!
//! Matrices are stored row-major: a `Matrix<T, R, C>` is an array of `R` row vectors of length
//! `C`, and indexing a matrix with a single `usize` yields a row.
//!
//! # Approximate comparison
//!
//! [`Vector`] and [`Matrix`] implement the traits of the [`approx`](https://docs.rs/approx)
//! crate, so `approx::assert_relative_eq!` and friends can be used on them. The same tolerance is
//! applied to every element.
//!
//! # Cargo features
//!
//! - `bytemuck` (enabled by default): implements [`bytemuck::Zeroable`] and [`bytemuck::Pod`] for
//!   [`Vector`] and [`Matrix`].

mod approx;
mod error;
mod matrix;
mod ops;
mod traits;
mod vector;


pub use error::*;
pub use matrix::*;
pub use traits::*;
pub use vector::*;
