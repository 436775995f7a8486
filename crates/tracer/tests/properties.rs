#![cfg(feature = "std")]

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use tracer::{point, vector, Tuple, TupleError, EPSILON};

fn coordinate() -> impl Strategy<Value = f64> {
    -100.0f64..100.0
}

fn any_point() -> impl Strategy<Value = Tuple> {
    (coordinate(), coordinate(), coordinate()).prop_map(|(x, y, z)| point(x, y, z))
}

fn any_vector() -> impl Strategy<Value = Tuple> {
    (coordinate(), coordinate(), coordinate()).prop_map(|(x, y, z)| vector(x, y, z))
}

// Keep away from the zero vector, whose normalization is NaN
fn nonzero_vector() -> impl Strategy<Value = Tuple> {
    any_vector().prop_filter("vector too short to normalize", |v| {
        v.magnitude().map_or(false, |m| m > 1e-3)
    })
}

proptest! {
    #[test]
    fn test_kind_is_exclusive(p in any_point(), v in any_vector()) {
        prop_assert!(p.is_point() && !p.is_vector());
        prop_assert!(v.is_vector() && !v.is_point());
    }

    #[test]
    fn test_point_plus_vector(p in any_point(), v in any_vector()) {
        let expected = point(p.x + v.x, p.y + v.y, p.z + v.z);
        prop_assert_eq!(p.add(v), Ok(expected));
        prop_assert_eq!(v.add(p), Ok(expected));
    }

    #[test]
    fn test_vector_plus_vector(a in any_vector(), b in any_vector()) {
        let sum = a.add(b).unwrap();
        prop_assert!(sum.is_vector());
    }

    #[test]
    fn test_points_do_not_add(p in any_point(), q in any_point()) {
        prop_assert_eq!(p.add(q), Err(TupleError::CannotAddPoints));
    }

    #[test]
    fn test_point_minus_vector(p in any_point(), v in any_vector()) {
        let expected = point(p.x - v.x, p.y - v.y, p.z - v.z);
        prop_assert_eq!(p.subtract(v), Ok(expected));
    }

    #[test]
    fn test_points_do_not_subtract(p in any_point(), q in any_point(), v in any_vector()) {
        prop_assert_eq!(p.subtract(q), Err(TupleError::CannotSubtractPoint));
        prop_assert_eq!(q.subtract(p), Err(TupleError::CannotSubtractPoint));
        prop_assert_eq!(v.subtract(p), Err(TupleError::CannotSubtractPoint));
    }

    #[test]
    fn test_negate(p in any_point(), v in any_vector()) {
        prop_assert_eq!(v.negate(), Ok(vector(-v.x, -v.y, -v.z)));
        prop_assert_eq!(p.negate(), Err(TupleError::CannotNegatePoint));
    }

    #[test]
    fn test_divide_inverts_multiply(v in any_vector(), s in 0.1f64..50.0) {
        assert_abs_diff_eq!(v.multiply(s).divide(s), v, epsilon = EPSILON);
        assert_abs_diff_eq!((v * -s) / -s, v, epsilon = EPSILON);
    }

    #[test]
    fn test_point_has_no_length(p in any_point(), v in any_vector()) {
        prop_assert_eq!(p.magnitude(), Err(TupleError::CannotMeasurePoint));
        prop_assert_eq!(p.normalize(), Err(TupleError::CannotNormalizePoint));
        prop_assert_eq!(p.dot(v), Err(TupleError::CannotDotPoint));
        prop_assert_eq!(v.dot(p), Err(TupleError::CannotDotPoint));
        prop_assert_eq!(p.cross(v), Err(TupleError::CannotCrossPoint));
        prop_assert_eq!(v.cross(p), Err(TupleError::CannotCrossPoint));
    }

    #[test]
    fn test_normalized_is_unit(v in nonzero_vector()) {
        let n = v.normalize().unwrap();
        prop_assert!(n.is_vector());
        assert_abs_diff_eq!(n.magnitude().unwrap(), 1., epsilon = EPSILON);
    }

    #[test]
    fn test_normalize_is_idempotent(v in nonzero_vector()) {
        let n = v.normalize().unwrap();
        assert_abs_diff_eq!(n.normalize().unwrap(), n, epsilon = EPSILON);
    }

    #[test]
    fn test_normalize_keeps_direction(v in nonzero_vector()) {
        let n = v.normalize().unwrap();
        let m = v.magnitude().unwrap();
        assert_abs_diff_eq!(n * m, v, epsilon = 1e-9 * m.max(1.));
    }

    #[test]
    fn test_dot_commutes(a in any_vector(), b in any_vector()) {
        prop_assert_eq!(a.dot(b), b.dot(a));
    }

    #[test]
    fn test_cross_anticommutes(a in any_vector(), b in any_vector()) {
        let ab = a.cross(b).unwrap();
        let ba = b.cross(a).unwrap();
        prop_assert!(ab.is_vector());
        prop_assert_eq!(ba, ab.negate().unwrap());
    }
}
