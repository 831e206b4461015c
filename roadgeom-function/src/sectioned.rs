use crate::errors::{Error, Result};
use crate::function::UnivariateFunction;
use roadgeom_base::Range;
use std::sync::Arc;

/// A restriction of `source` to `sub_range`, re-based so the sectioned
/// function's own domain starts at 0.
///
/// This is how a lane-section's share of a road's full-`s` width or
/// offset function is carved out in `roadgeom-query`: the lane-section's
/// own `(s, t)` domain starts at 0 regardless of where it sits on the
/// road's reference line.
#[derive(Clone)]
pub struct SectionedUnivariateFunction {
    source: Arc<dyn UnivariateFunction + Send + Sync>,
    sub_range: Range,
}

impl std::fmt::Debug for SectionedUnivariateFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SectionedUnivariateFunction").field("sub_range", &self.sub_range).finish()
    }
}

impl SectionedUnivariateFunction {
    /// Restricts `source` to `sub_range`. Fails with
    /// [`Error::SubRangeNotContained`] if `sub_range` is not contained in
    /// `source.domain()`.
    pub fn new(source: Arc<dyn UnivariateFunction + Send + Sync>, sub_range: Range) -> Result<Self> {
        if !source.domain().contains_range(&sub_range) {
            return Err(Error::SubRangeNotContained);
        }
        Ok(SectionedUnivariateFunction { source, sub_range })
    }

    fn source_x(&self, x: f64) -> f64 {
        self.sub_range.lower_value().unwrap_or(0.0) + x
    }
}

impl UnivariateFunction for SectionedUnivariateFunction {
    fn domain(&self) -> Range { self.sub_range.zeroed() }

    fn value(&self, x: f64) -> Result<f64> {
        if !self.domain().contains(x) {
            return Err(Error::OutOfDomain { x });
        }
        self.source.value(self.source_x(x))
    }

    fn slope(&self, x: f64) -> Result<f64> {
        if !self.domain().contains(x) {
            return Err(Error::OutOfDomain { x });
        }
        self.source.slope(self.source_x(x))
    }

    fn value_fuzzy(&self, x: f64, tol: f64) -> Result<f64> {
        if !self.domain().contains_fuzzy(x, tol) {
            return Err(Error::OutOfDomain { x });
        }
        self.source.value_fuzzy(self.source_x(x), tol)
    }
}
