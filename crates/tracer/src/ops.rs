//! Tuple operations
//!
//! Each operation is expressed as a trait so that code can be written
//! generically over the tuple type (and its scalar) rather than against [Tuple](crate::Tuple) directly.
//! The inherent methods on [Tuple](crate::Tuple) are the primary API;
//! these traits forward to them.
//!
//! Operations that only make sense on vectors return a [Result](crate::Result)
//! so that misuse of the algebra is reported instead of producing meaningless geometry.

use crate::error::Result;

/// Add two elements, failing if the sum has no geometric meaning
///
/// A point plus a vector is a point,
/// and a vector plus a vector is a vector,
/// but the sum of two points is undefined.
pub trait TryAdd<T> {
    type Output;
    fn try_add(self, r: T) -> Result<Self::Output>;
}

/// Subtract an element, failing if the subtrahend is a point
///
/// ```
/// use tracer::ops::*;
/// use tracer::{point, vector};
///
/// let p = point(3., 2., 1.).try_sub(vector(1., 1., 1.)).unwrap();
/// assert_eq!(p, point(2., 1., 0.));
///
/// assert!(vector(0., 0., 0.).try_sub(point(1., 1., 1.)).is_err());
/// ```
pub trait TrySub<T> {
    type Output;
    fn try_sub(self, r: T) -> Result<Self::Output>;
}

/// Negate an element, failing if it is a point
pub trait TryNeg {
    type Output;
    fn try_neg(self) -> Result<Self::Output>;
}

/// The Euclidean length of a vector
///
/// Points have a position, not a length,
/// so measuring one is an error.
pub trait Magnitude {
    type Output;
    fn magnitude(self) -> Result<Self::Output>;
}

/// Scale a vector so that its [magnitude](Magnitude) is 1.
///
/// Normalizing a zero vector is not trapped;
/// for floating point scalars every component of the result is NaN.
pub trait Normalized {
    type Output;
    fn normalized(self) -> Result<Self::Output>;
}

/// The dot product A • B of two vectors
///
/// The dot product is commutative.
pub trait Dot<T> {
    type Output;
    fn dot(self, r: T) -> Result<Self::Output>;
}

/// The cross product A × B of two vectors
///
/// The cross product is anticommutative:
/// `a.cross(b)` is the negation of `b.cross(a)`.
pub trait Cross<T> {
    type Output;
    fn cross(self, r: T) -> Result<Self::Output>;
}

/// Constructor for a point at the origin
pub trait Origin {
    /// Construct a point at the origin
    fn origin() -> Self;
}

/// Constructor for a unit vector in the X direction
pub trait XHat {
    /// Construct a unit vector in the X direction
    ///
    /// ```
    /// use tracer::ops::*;
    /// use tracer::{point, Tuple};
    ///
    /// let p = Tuple::<f64>::origin().try_add(Tuple::x_hat()).unwrap();
    /// assert_eq!(p, point(1., 0., 0.));
    /// ```
    fn x_hat() -> Self;
}

/// Constructor for a unit vector in the Y direction
pub trait YHat {
    /// Construct a unit vector in the Y direction
    fn y_hat() -> Self;
}

/// Constructor for a unit vector in the Z direction
pub trait ZHat {
    /// Construct a unit vector in the Z direction
    fn z_hat() -> Self;
}

/// Constructor for a point at the given coordinates
pub trait Point<C> {
    /// Construct a point (a position in space) at the given coordinates
    fn point(x: C) -> Self;
}

/// Constructor for a vector with the given components
pub trait Vector<C> {
    /// Construct a vector (a free displacement) with the given components
    fn vector(x: C) -> Self;
}
