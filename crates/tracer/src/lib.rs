#![cfg_attr(not(feature = "std"), no_std)]

//! tracer provides the numeric foundation of a ray tracer:
//! a single [Tuple] type that represents both points and vectors in 3D space.
//!
//! tracer uses [homogeneous coordinates](https://en.wikipedia.org/wiki/Homogeneous_coordinates).
//! Every tuple has four coordinates `(x, y, z, w)`,
//! where `w = 1` marks a point (a position) and `w = 0` marks a vector (a displacement).
//! See the [tuple] module for how `w` flows through arithmetic.
//!
//! Not every operation is meaningful for every kind of tuple.
//! Adding two points, negating a point, or taking the length of a point
//! are all errors in this algebra, and the corresponding operations
//! return a [TupleError] rather than a meaningless result:
//!
//! ```
//! use tracer::{point, vector, TupleError};
//!
//! let p = point(1., 2., 3.);
//! let v = vector(0., 1., 0.);
//!
//! assert_eq!(p.add(v), Ok(point(1., 3., 3.)));
//! assert_eq!(p.add(p), Err(TupleError::CannotAddPoints));
//! assert_eq!(v.magnitude(), Ok(1.));
//! ```
//!
//! tracer is generic over the [scalar] datatype, and can be used with `f32` or `f64`.
//! Magnitude and normalization additionally require a [square root](scalar::Sqrt),
//! which is only available for floats with the `std` feature enabled.
//! Everything else is `no_std`-compatible.
//!
//! Operations are available both as inherent methods on [Tuple]
//! and as [traits](ops) for writing code generic over the tuple type.
//!
//! Rejected operations are reported through the [log] facade at `debug` level.

pub mod error;
pub mod ops;
pub mod scalar;
pub mod tuple;


pub use error::{Result, TupleError};
pub use tuple::{Kind, Tuple};

use scalar::Scalar;

/// Tolerance used when comparing floating point tuples for approximate equality
pub const EPSILON: f64 = 1e-5;

/// Construct a point (`w = 1`) at the given coordinates
pub fn point<T: Scalar>(x: T, y: T, z: T) -> Tuple<T> {
    Tuple::from_kind(Kind::Point, x, y, z)
}

/// Construct a vector (`w = 0`) with the given components
pub fn vector<T: Scalar>(x: T, y: T, z: T) -> Tuple<T> {
    Tuple::from_kind(Kind::Vector, x, y, z)
}
