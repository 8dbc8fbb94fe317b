//! Scalar type, comparison tolerances, and finiteness checking.

use thiserror::Error;

/// Scalar used for all geometry and physical parameters.
pub type Real = f64;

/// A numeric input was NaN or infinite.
///
/// Geometry and parameter values enter the pipeline from documents and
/// caller arithmetic; anything non-finite is rejected at the boundary so
/// downstream distances and masses stay well defined.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("Non-finite value for {what}: {value}")]
pub struct NonFinite {
    pub what: &'static str,
    pub value: Real,
}

/// Reject NaN and infinities, passing finite values through unchanged.
pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, NonFinite> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(NonFinite { what, value: v })
    }
}

/// Absolute-or-relative comparison tolerances.
///
/// The absolute bound handles values near zero, the relative bound scales
/// with magnitude; a comparison passes if either is satisfied.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    diff <= tol.abs || diff <= tol.rel * a.abs().max(b.abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn nearly_equal_uses_both_bounds() {
        let tol = Tolerances::default();
        // Near zero the absolute bound applies
        assert!(nearly_equal(0.0, 5e-13, tol));
        // At large magnitude the relative bound applies
        assert!(nearly_equal(1e9, 1e9 + 0.5, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_rejects_nan_and_infinities() {
        for bad in [Real::NAN, Real::INFINITY, Real::NEG_INFINITY] {
            let err = ensure_finite(bad, "edge length").unwrap_err();
            assert_eq!(err.what, "edge length");
        }
        assert_eq!(ensure_finite(38.1, "edge length"), Ok(38.1));
    }

    proptest! {
        #[test]
        fn ensure_finite_passes_every_finite_value(v in proptest::num::f64::NORMAL) {
            prop_assert_eq!(ensure_finite(v, "value"), Ok(v));
        }

        #[test]
        fn nearly_equal_is_symmetric(a in -1e6_f64..1e6, b in -1e6_f64..1e6) {
            let tol = Tolerances::default();
            prop_assert_eq!(nearly_equal(a, b, tol), nearly_equal(b, a, tol));
        }
    }
}
