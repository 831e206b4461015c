use cgmath::AbsDiffEq;
use std::fmt::Debug;

/// The tolerance used when no caller-supplied value is available.
///
/// Every constructor in this workspace accepts its tolerance explicitly
/// through a configuration value (see `roadgeom_space::BuilderConfig` and
/// `roadgeom_query::QueryConfig`); this constant only backs those configs'
/// `Default` implementations, it is never read by a function directly.
pub const DEFAULT_TOLERANCE: f64 = 1.0e-7;

/// Defines fuzzy equality against an explicitly supplied tolerance.
///
/// Unlike the single crate-wide constant some geometry kernels use, every
/// call site here threads its own `tol`, since the road-space model's
/// tolerance is a per-road configuration value, not a build-time constant.
pub trait Tolerance: AbsDiffEq<Epsilon = f64> + Debug {
    /// `true` if `self` and `other` differ by no more than `tol`.
    fn near(&self, other: &Self, tol: f64) -> bool { self.abs_diff_eq(other, tol) }
}

impl<T: AbsDiffEq<Epsilon = f64> + Debug> Tolerance for T {}

/// Asserts that `left.near(&right, tol)` (using [`Tolerance`]).
#[macro_export]
macro_rules! assert_near {
    ($left: expr, $right: expr, $tol: expr $(,)?) => {{
        let (left, right, tol) = ($left, $right, $tol);
        assert!(
            $crate::tolerance::Tolerance::near(&left, &right, tol),
            "assertion failed: `left` is near `right`\nleft: {left:?},\nright: {right:?}",
        )
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_near_within_tolerance() {
        assert!(1.0_f64.near(&1.0000001, 1e-6));
        assert!(!1.0_f64.near(&1.1, 1e-6));
    }

    #[test]
    #[should_panic]
    fn assert_near_panics_outside_tolerance() { assert_near!(1.0, 2.0, 1e-7) }

    #[test]
    fn assert_near_within_tolerance() { assert_near!(1.0, 1.0 + 1e-9, 1e-7) }
}
