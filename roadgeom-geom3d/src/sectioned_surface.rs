use crate::errors::{Error, Result};
use crate::surface::Surface3D;
use roadgeom_base::{Range, Vector3D};
use std::sync::Arc;

/// A restriction of a [`Surface3D`] to a sub-range of `s`, re-based so the
/// restricted surface's own `s` domain starts at 0.
///
/// Mirrors [`roadgeom_function::SectionedUnivariateFunction`]: this is how
/// a lane-section carves its own share of a road's full surface out of the
/// road's `(s, t)` domain.
#[derive(Clone)]
pub struct SectionedCurveRelativeParametricSurface3D {
    source: Arc<dyn Surface3D + Send + Sync>,
    sub_s_range: Range,
}

impl std::fmt::Debug for SectionedCurveRelativeParametricSurface3D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SectionedCurveRelativeParametricSurface3D")
            .field("sub_s_range", &self.sub_s_range)
            .finish()
    }
}

impl SectionedCurveRelativeParametricSurface3D {
    /// Restricts `source` to `sub_s_range`. Fails with
    /// [`Error::SubRangeNotContained`] if `sub_s_range` is not contained in
    /// `source.s_domain()`.
    pub fn new(source: Arc<dyn Surface3D + Send + Sync>, sub_s_range: Range) -> Result<Self> {
        if !source.s_domain().contains_range(&sub_s_range) {
            return Err(Error::SubRangeNotContained);
        }
        Ok(SectionedCurveRelativeParametricSurface3D { source, sub_s_range })
    }

    fn source_s(&self, s: f64) -> f64 {
        self.sub_s_range.lower_value().unwrap_or(0.0) + s
    }
}

impl Surface3D for SectionedCurveRelativeParametricSurface3D {
    fn s_domain(&self) -> Range {
        self.sub_s_range.zeroed()
    }

    fn t_domain(&self) -> Range {
        self.source.t_domain()
    }

    fn point_at(&self, s: f64, t: f64) -> Result<Vector3D> {
        if !self.s_domain().contains_fuzzy(s, 1.0e-9) {
            return Err(Error::OutOfDomain { s });
        }
        self.source.point_at(self.source_s(s), t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan_view::{PlanViewGeometry, ReferenceCurve2D};
    use crate::road_surface::RoadSurface3D;
    use roadgeom_function::{LinearFunction, UnivariateFunction};

    fn road_surface() -> Arc<dyn Surface3D + Send + Sync> {
        let reference_curve =
            Arc::new(ReferenceCurve2D::new(vec![PlanViewGeometry::Line { length: 100.0 }]).unwrap());
        let zero: Arc<dyn UnivariateFunction + Send + Sync> = Arc::new(LinearFunction::constant(0.0));
        Arc::new(RoadSurface3D::new(reference_curve, zero.clone(), zero, Range::unbounded()))
    }

    #[test]
    fn sectioned_domain_starts_at_zero() {
        let sectioned =
            SectionedCurveRelativeParametricSurface3D::new(road_surface(), Range::closed(20.0, 30.0)).unwrap();
        assert_eq!(sectioned.s_domain().lower_value(), Some(0.0));
        assert_eq!(sectioned.s_domain().upper_value(), Some(10.0));
    }

    #[test]
    fn sectioned_point_matches_shifted_source() {
        let source = road_surface();
        let sectioned =
            SectionedCurveRelativeParametricSurface3D::new(source.clone(), Range::closed(20.0, 30.0)).unwrap();
        let expected = source.point_at(25.0, 1.0).unwrap();
        let actual = sectioned.point_at(5.0, 1.0).unwrap();
        assert!((expected.x - actual.x).abs() < 1e-9);
        assert!((expected.y - actual.y).abs() < 1e-9);
    }

    #[test]
    fn sub_range_outside_source_domain_fails() {
        let reference_curve =
            Arc::new(ReferenceCurve2D::new(vec![PlanViewGeometry::Line { length: 10.0 }]).unwrap());
        let zero: Arc<dyn UnivariateFunction + Send + Sync> = Arc::new(LinearFunction::constant(0.0));
        let bounded: Arc<dyn Surface3D + Send + Sync> =
            Arc::new(RoadSurface3D::new(reference_curve, zero.clone(), zero, Range::unbounded()));
        assert!(
            SectionedCurveRelativeParametricSurface3D::new(bounded, Range::closed(5.0, 20.0)).is_err()
        );
    }
}
