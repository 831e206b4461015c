use crate::errors::{Error, Result};
use roadgeom_base::Range;
use std::fmt::Debug;

/// A partial function from `f64` to `f64`, declared over a bounded
/// [`Range`].
///
/// Mirrors the teacher crate's `ParametricCurve` trait shape (`subs`,
/// `der`, `parameter_range`): here `value`/`slope` replace `subs`/`der`,
/// and evaluation is fallible since a caller may ask for a point outside
/// the declared domain.
pub trait UnivariateFunction: Debug {
    /// The function's declared domain.
    fn domain(&self) -> Range;

    /// `f(x)`. Fails with [`Error::OutOfDomain`] if `x` is not in
    /// [`Self::domain`].
    fn value(&self, x: f64) -> Result<f64>;

    /// `f'(x)`. Fails with [`Error::OutOfDomain`] if `x` is not in
    /// [`Self::domain`].
    fn slope(&self, x: f64) -> Result<f64>;

    /// As [`Self::value`], but succeeds if `x` is in the domain or within
    /// `tol` of one of its bounded endpoints, clamping `x` to the nearest
    /// endpoint before evaluating.
    fn value_fuzzy(&self, x: f64, tol: f64) -> Result<f64> {
        let domain = self.domain();
        if domain.contains(x) {
            return self.value(x);
        }
        if !domain.contains_fuzzy(x, tol) {
            return Err(Error::OutOfDomain { x });
        }
        let clamped = clamp_to_domain(domain, x);
        self.value(clamped)
    }
}

fn clamp_to_domain(domain: Range, x: f64) -> f64 {
    match (domain.lower_value(), domain.upper_value()) {
        (Some(a), _) if x < a => a,
        (_, Some(b)) if x >= b => {
            // upper endpoints are commonly exclusive (`[a, b)`); step back
            // by a hair so the clamp still lands inside the domain.
            f64::from_bits(b.to_bits() - 1)
        }
        _ => x,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LinearFunction;

    #[test]
    fn value_fuzzy_clamps_just_past_exclusive_upper_bound() {
        let f = LinearFunction::new(2.0, 1.0, Range::closed_open(0.0, 10.0));
        assert!(f.value(10.0).is_err());
        let v = f.value_fuzzy(10.0 + 1e-9, 1e-7).unwrap();
        assert!((v - 21.0).abs() < 1e-6);
    }

    #[test]
    fn value_fuzzy_rejects_far_outside_domain() {
        let f = LinearFunction::new(2.0, 1.0, Range::closed_open(0.0, 10.0));
        assert!(f.value_fuzzy(50.0, 1e-7).is_err());
    }
}
