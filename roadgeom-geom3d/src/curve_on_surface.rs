use crate::curve::Curve3D;
use crate::errors::{Error, Result};
use crate::surface::Surface3D;
use roadgeom_base::{Range, Vector3D};
use roadgeom_function::UnivariateFunction;
use std::sync::Arc;

/// A 3D curve traced on a [`Surface3D`] by a lateral-offset function of
/// `s`, with an optional height-offset function added to the result's `z`
/// afterwards.
///
/// This is how lane boundary curves and lane center curves are built: the
/// surface carries the road's shape, and the lateral-offset function
/// carries how far across it the curve sits at each `s`.
#[derive(Clone)]
pub struct CurveOnParametricSurface3D {
    surface: Arc<dyn Surface3D + Send + Sync>,
    lateral_offset: Arc<dyn UnivariateFunction + Send + Sync>,
    height_offset: Option<Arc<dyn UnivariateFunction + Send + Sync>>,
    domain: Range,
}

impl std::fmt::Debug for CurveOnParametricSurface3D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurveOnParametricSurface3D").field("domain", &self.domain).finish()
    }
}

impl CurveOnParametricSurface3D {
    /// Builds a curve from `surface`, a `lateral_offset` function of `s`,
    /// and an optional `height_offset` function of `s` added to the
    /// surface point's `z` coordinate.
    ///
    /// The curve's own domain is the intersection of the surface's
    /// `s_domain` with the lateral-offset function's domain and, if
    /// present, the height-offset function's domain.
    pub fn new(
        surface: Arc<dyn Surface3D + Send + Sync>,
        lateral_offset: Arc<dyn UnivariateFunction + Send + Sync>,
        height_offset: Option<Arc<dyn UnivariateFunction + Send + Sync>>,
    ) -> Result<Self> {
        let mut domain = surface
            .s_domain()
            .intersect(&lateral_offset.domain())
            .ok_or(Error::SubRangeNotContained)?;
        if let Some(height_offset) = &height_offset {
            domain = domain.intersect(&height_offset.domain()).ok_or(Error::SubRangeNotContained)?;
        }
        Ok(CurveOnParametricSurface3D { surface, lateral_offset, height_offset, domain })
    }
}

impl Curve3D for CurveOnParametricSurface3D {
    fn domain(&self) -> Range {
        self.domain
    }

    fn point_at(&self, s: f64) -> Result<Vector3D> {
        if !self.domain.contains_fuzzy(s, 1.0e-9) {
            return Err(Error::OutOfDomain { s });
        }
        let t = self.lateral_offset.value_fuzzy(s, 1.0e-9)?;
        let mut point = self.surface.point_at(s, t)?;
        if let Some(height_offset) = &self.height_offset {
            point.z += height_offset.value_fuzzy(s, 1.0e-9)?;
        }
        Ok(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan_view::{PlanViewGeometry, ReferenceCurve2D};
    use crate::road_surface::RoadSurface3D;
    use roadgeom_function::LinearFunction;

    fn flat_surface() -> Arc<dyn Surface3D + Send + Sync> {
        let reference_curve =
            Arc::new(ReferenceCurve2D::new(vec![PlanViewGeometry::Line { length: 100.0 }]).unwrap());
        let zero: Arc<dyn UnivariateFunction + Send + Sync> = Arc::new(LinearFunction::constant(0.0));
        Arc::new(RoadSurface3D::new(reference_curve, zero.clone(), zero, Range::unbounded()))
    }

    #[test]
    fn curve_follows_a_constant_lateral_offset() {
        let offset: Arc<dyn UnivariateFunction + Send + Sync> = Arc::new(LinearFunction::constant(3.0));
        let curve = CurveOnParametricSurface3D::new(flat_surface(), offset, None).unwrap();
        let p = curve.point_at(10.0).unwrap();
        assert!((p.y - 3.0).abs() < 1e-9);
    }

    #[test]
    fn height_offset_is_added_on_top_of_the_surface_z() {
        let offset: Arc<dyn UnivariateFunction + Send + Sync> = Arc::new(LinearFunction::constant(0.0));
        let height: Arc<dyn UnivariateFunction + Send + Sync> = Arc::new(LinearFunction::constant(1.5));
        let curve = CurveOnParametricSurface3D::new(flat_surface(), offset, Some(height)).unwrap();
        let p = curve.point_at(10.0).unwrap();
        assert!((p.z - 1.5).abs() < 1e-9);
    }

    #[test]
    fn domain_is_intersection_with_lateral_offset_domain() {
        let offset: Arc<dyn UnivariateFunction + Send + Sync> =
            Arc::new(LinearFunction::constant_over(0.0, Range::closed(0.0, 50.0)));
        let curve = CurveOnParametricSurface3D::new(flat_surface(), offset, None).unwrap();
        assert_eq!(curve.domain().upper_value(), Some(50.0));
        assert!(curve.point_at(60.0).is_err());
    }
}
