//! Homogeneous-coordinate tuples
//!
//! A [Tuple] stores a position or a displacement in 3D space
//! using four coordinates `(x, y, z, w)`.
//! The projective coordinate `w` records what the tuple is:
//! * `w = 1` is a **point**, a location in space.
//! * `w = 0` is a **vector**, a free displacement or direction.
//!
//! `w` is carried through addition and subtraction rather than recomputed,
//! so the kind of a sum falls out of the arithmetic:
//! a point plus a vector has `w = 1 + 0 = 1` and is a point,
//! two vectors have `w = 0 + 0 = 0` and make a vector.
//! Combinations whose `w` would leave `{0, 1}` (such as point + point)
//! are rejected with a [TupleError].

use core::fmt;
use core::ops::{Div, Mul};

use approx::{AbsDiffEq, RelativeEq};

use crate::error::{Result, TupleError};
use crate::ops::*;
use crate::scalar::*;

/// Whether a [Tuple] is a point or a vector
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A position in space (`w = 1`)
    Point,
    /// A free displacement or direction (`w = 0`)
    Vector,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Point => f.write_str("point"),
            Kind::Vector => f.write_str("vector"),
        }
    }
}

/// e.g. a point in space or a vector between two points
///
/// ## As geometry
/// A `Tuple` is either:
/// * A point, e.g. `Tuple {x, y, z, w: 1}`, which represents a location.
///   See the [`point(x, y, z)`](crate::point) or [`Tuple::origin()`](crate::ops::Origin) constructors.
/// * A vector, e.g. `Tuple {x, y, z, w: 0}`, which represents a direction and length.
///   See the [`vector(x, y, z)`](crate::vector),
///   [`Tuple::x_hat()`](crate::ops::XHat),
///   [`Tuple::y_hat()`](crate::ops::YHat), or
///   [`Tuple::z_hat()`](crate::ops::ZHat) constructors.
///
/// A tuple whose `w` is neither 0 nor 1 is neither kind.
/// Operations on it still compare `w` against the two sentinels,
/// so it is never rejected as a point, and [kind()](Tuple::kind) reports `None`.
///
/// ## Example Operations
/// * A point plus a vector is the point displaced by that vector.
/// * A point minus a vector is the point displaced in the opposite direction.
/// * Vectors may be negated, scaled, [measured](Tuple::magnitude),
///   [normalized](Tuple::normalize), [dotted](Tuple::dot) and [crossed](Tuple::cross).
///
/// All operations return a new tuple; none mutate their operands.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Tuple<T = f64> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

fn reject<T: fmt::Debug, V>(err: TupleError, operands: &[Tuple<T>]) -> Result<V> {
    log::debug!("rejected tuple operation: {err}: {operands:?}");
    Err(err)
}

impl<T: Scalar> Tuple<T> {
    /// Construct a tuple from raw homogeneous coordinates
    pub fn new(x: T, y: T, z: T, w: T) -> Tuple<T> {
        Tuple { x, y, z, w }
    }

    /// Construct a point or vector with the given coordinates
    pub fn from_kind(kind: Kind, x: T, y: T, z: T) -> Tuple<T> {
        let w = match kind {
            Kind::Point => T::one(),
            Kind::Vector => T::zero(),
        };
        Tuple { x, y, z, w }
    }

    /// The kind of this tuple, or `None` if `w` is neither sentinel
    pub fn kind(self) -> Option<Kind> {
        if self.is_point() {
            Some(Kind::Point)
        } else if self.is_vector() {
            Some(Kind::Vector)
        } else {
            None
        }
    }

    /// Whether `w` is the point sentinel (1)
    pub fn is_point(self) -> bool {
        self.w == T::one()
    }

    /// Whether `w` is the vector sentinel (0)
    pub fn is_vector(self) -> bool {
        self.w == T::zero()
    }

    /// Component-wise sum, including `w`
    ///
    /// Fails with [TupleError::CannotAddPoints] if both operands are points.
    pub fn add(self, r: Tuple<T>) -> Result<Tuple<T>> {
        if self.is_point() && r.is_point() {
            return reject(TupleError::CannotAddPoints, &[self, r]);
        }

        Ok(Tuple {
            x: self.x + r.x,
            y: self.y + r.y,
            z: self.z + r.z,
            w: self.w + r.w,
        })
    }

    /// Component-wise difference, including `w`
    ///
    /// Fails with [TupleError::CannotSubtractPoint] if the subtrahend `r` is a point.
    /// Only point − vector (a point) and vector − vector (a vector) are defined.
    pub fn subtract(self, r: Tuple<T>) -> Result<Tuple<T>> {
        if r.is_point() {
            return reject(TupleError::CannotSubtractPoint, &[self, r]);
        }

        Ok(Tuple {
            x: self.x - r.x,
            y: self.y - r.y,
            z: self.z - r.z,
            w: self.w - r.w,
        })
    }

    /// Component-wise negation, including `w`
    ///
    /// Fails with [TupleError::CannotNegatePoint] if this is a point.
    pub fn negate(self) -> Result<Tuple<T>> {
        if self.is_point() {
            return reject(TupleError::CannotNegatePoint, &[self]);
        }

        Ok(Tuple {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        })
    }

    /// Scale `x`, `y` and `z` by `s`, leaving `w` (and therefore the kind) unchanged
    pub fn multiply(self, s: T) -> Tuple<T> {
        Tuple {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
            w: self.w,
        }
    }

    /// Divide `x`, `y` and `z` by `s`, leaving `w` (and therefore the kind) unchanged
    ///
    /// Division by zero is not trapped and follows the scalar's own semantics
    /// (±infinity or NaN for floats.)
    pub fn divide(self, s: T) -> Tuple<T> {
        Tuple {
            x: self.x / s,
            y: self.y / s,
            z: self.z / s,
            w: self.w,
        }
    }

    /// The square of the [magnitude](Tuple::magnitude)
    ///
    /// This avoids the square root and is therefore always available,
    /// even on scalar types that do not implement [Sqrt].
    pub fn magnitude_squared(self) -> Result<T> {
        if self.is_point() {
            return reject(TupleError::CannotMeasurePoint, &[self]);
        }

        Ok(self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// `x·x' + y·y' + z·z'`
    ///
    /// `w` does not take part in the product.
    /// Fails with [TupleError::CannotDotPoint] if either operand is a point.
    pub fn dot(self, r: Tuple<T>) -> Result<T> {
        if self.is_point() || r.is_point() {
            return reject(TupleError::CannotDotPoint, &[self, r]);
        }

        Ok(self.x * r.x + self.y * r.y + self.z * r.z)
    }

    /// The right-handed cross product, always a vector
    ///
    /// Fails with [TupleError::CannotCrossPoint] if either operand is a point.
    pub fn cross(self, r: Tuple<T>) -> Result<Tuple<T>> {
        if self.is_point() || r.is_point() {
            return reject(TupleError::CannotCrossPoint, &[self, r]);
        }

        Ok(Tuple {
            x: self.y * r.z - self.z * r.y,
            y: self.z * r.x - self.x * r.z,
            z: self.x * r.y - self.y * r.x,
            w: T::zero(),
        })
    }
}

impl<T: Sqrt> Tuple<T> {
    /// The Euclidean length `√(x² + y² + z²)`
    ///
    /// Fails with [TupleError::CannotMeasurePoint] if this is a point.
    pub fn magnitude(self) -> Result<T> {
        Ok(self.magnitude_squared()?.sqrt())
    }

    /// This vector divided by its own magnitude
    ///
    /// Fails with [TupleError::CannotNormalizePoint] if this is a point.
    /// The zero vector normalizes to NaN components (0 / 0.)
    pub fn normalize(self) -> Result<Tuple<T>> {
        if self.is_point() {
            return reject(TupleError::CannotNormalizePoint, &[self]);
        }

        let magnitude = self.magnitude()?;
        Ok(self.divide(magnitude))
    }
}

impl<T: Scalar> Mul<T> for Tuple<T> {
    type Output = Tuple<T>;
    fn mul(self, r: T) -> Tuple<T> {
        self.multiply(r)
    }
}

impl<T: Scalar> Div<T> for Tuple<T> {
    type Output = Tuple<T>;
    fn div(self, r: T) -> Tuple<T> {
        self.divide(r)
    }
}

impl<T: Scalar> TryAdd<Tuple<T>> for Tuple<T> {
    type Output = Tuple<T>;
    fn try_add(self, r: Tuple<T>) -> Result<Tuple<T>> {
        self.add(r)
    }
}

impl<T: Scalar> TrySub<Tuple<T>> for Tuple<T> {
    type Output = Tuple<T>;
    fn try_sub(self, r: Tuple<T>) -> Result<Tuple<T>> {
        self.subtract(r)
    }
}

impl<T: Scalar> TryNeg for Tuple<T> {
    type Output = Tuple<T>;
    fn try_neg(self) -> Result<Tuple<T>> {
        self.negate()
    }
}

impl<T: Sqrt> Magnitude for Tuple<T> {
    type Output = T;
    fn magnitude(self) -> Result<T> {
        Tuple::magnitude(self)
    }
}

impl<T: Sqrt> Normalized for Tuple<T> {
    type Output = Tuple<T>;
    fn normalized(self) -> Result<Tuple<T>> {
        self.normalize()
    }
}

impl<T: Scalar> Dot<Tuple<T>> for Tuple<T> {
    type Output = T;
    fn dot(self, r: Tuple<T>) -> Result<T> {
        Tuple::dot(self, r)
    }
}

impl<T: Scalar> Cross<Tuple<T>> for Tuple<T> {
    type Output = Tuple<T>;
    fn cross(self, r: Tuple<T>) -> Result<Tuple<T>> {
        Tuple::cross(self, r)
    }
}

impl<T: Scalar> Origin for Tuple<T> {
    fn origin() -> Tuple<T> {
        Tuple::from_kind(Kind::Point, T::zero(), T::zero(), T::zero())
    }
}

impl<T: Scalar> XHat for Tuple<T> {
    fn x_hat() -> Tuple<T> {
        Tuple::from_kind(Kind::Vector, T::one(), T::zero(), T::zero())
    }
}

impl<T: Scalar> YHat for Tuple<T> {
    fn y_hat() -> Tuple<T> {
        Tuple::from_kind(Kind::Vector, T::zero(), T::one(), T::zero())
    }
}

impl<T: Scalar> ZHat for Tuple<T> {
    fn z_hat() -> Tuple<T> {
        Tuple::from_kind(Kind::Vector, T::zero(), T::zero(), T::one())
    }
}

impl<T: Scalar> Point<[T; 3]> for Tuple<T> {
    fn point([x, y, z]: [T; 3]) -> Tuple<T> {
        Tuple::from_kind(Kind::Point, x, y, z)
    }
}

impl<T: Scalar> Vector<[T; 3]> for Tuple<T> {
    fn vector([x, y, z]: [T; 3]) -> Tuple<T> {
        Tuple::from_kind(Kind::Vector, x, y, z)
    }
}

impl<T: Scalar + fmt::Display> fmt::Display for Tuple<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            Some(kind) => write!(f, "{kind}({}, {}, {})", self.x, self.y, self.z),
            None => write!(f, "tuple({}, {}, {}, {})", self.x, self.y, self.z, self.w),
        }
    }
}

// Spatial coordinates are compared within tolerance,
// but `w` must match exactly so that a point is never "close to" a vector.
impl<T> AbsDiffEq for Tuple<T>
where
    T: Scalar + AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Tuple<T>, epsilon: T::Epsilon) -> bool {
        self.w == other.w
            && self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl<T> RelativeEq for Tuple<T>
where
    T: Scalar + RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Tuple<T>, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.w == other.w
            && self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}
