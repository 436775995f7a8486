//! Traits that govern the scalar data type stored in a [Tuple](crate::Tuple)
//!
//! Tuple arithmetic is component-wise, so the scalar datatype needs only the
//! four basic arithmetic operations plus negation.
//! Measuring a vector additionally requires a [square root](Sqrt).

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// A real-valued scalar datatype.
///
/// `Scalar` is implemented for `f32` and `f64`.
///
/// `Scalar` requires `Debug` so that rejected operands can be logged.
///
/// `Scalar` requires that its datatype is `Copy` so that tuples can be passed
/// by value in mathematical expressions without cloning or borrowing.
///
/// The additive and multiplicative identities double as the sentinel values
/// of the `w` coordinate: [zero](Scalar::zero) marks a vector
/// and [one](Scalar::one) marks a point.
pub trait Scalar:
    Clone
    + Copy
    + PartialEq
    + Default
    + Debug
    + Neg<Output = Self>
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Div<Self, Output = Self>
{
    /// The additive identity
    fn zero() -> Self {
        Self::default()
    }

    /// The multiplicative identity
    fn one() -> Self {
        Self::from_integer(1)
    }

    /// Construct an integer scalar
    fn from_integer(i: isize) -> Self;
}

/// A scalar datatype which is closed under the square root function.
///
/// Taking the square root is needed for the [magnitude](crate::ops::Magnitude)
/// of a vector and therefore also for [normalization](crate::ops::Normalized).
///
/// `Sqrt` comes implemented for `f32` and `f64` when the `std` feature is enabled.
///
/// ## `sqrt()` of negative numbers
///
/// The only use of `sqrt()` within the library is on a sum of squares,
/// which is never negative.
pub trait Sqrt: Scalar {
    /// This scalar's positive square root
    fn sqrt(self) -> Self;
}

macro_rules! impl_for_float {
    ($type:ident) => {
        impl Scalar for $type {
            fn from_integer(i: isize) -> $type {
                i as $type
            }
        }

        #[cfg(feature = "std")]
        impl Sqrt for $type {
            fn sqrt(self) -> $type {
                $type::sqrt(self)
            }
        }
    };
}

impl_for_float!(f32);
impl_for_float!(f64);
