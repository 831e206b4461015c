use crate::errors::{Error, Result};
use crate::plan_view::ReferenceCurve2D;
use crate::surface::Surface3D;
use roadgeom_base::{vector3d, Range, Vector3D};
use roadgeom_function::UnivariateFunction;
use std::sync::Arc;

/// The `(s, t)` surface swept out by a road's reference line as it is
/// offset laterally, raised by its elevation profile, and rolled by its
/// superelevation profile.
///
/// Passing a constant-zero superelevation function produces the
/// `surfaceWithoutTorsion` variant; any other superelevation function
/// produces `surface`. Both are ordinary `RoadSurface3D` values built from
/// the same reference line and elevation profile.
#[derive(Clone)]
pub struct RoadSurface3D {
    reference_curve: Arc<ReferenceCurve2D>,
    elevation: Arc<dyn UnivariateFunction + Send + Sync>,
    superelevation: Arc<dyn UnivariateFunction + Send + Sync>,
    t_domain: Range,
}

impl std::fmt::Debug for RoadSurface3D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoadSurface3D")
            .field("s_domain", &self.reference_curve.domain())
            .field("t_domain", &self.t_domain)
            .finish()
    }
}

impl RoadSurface3D {
    /// Builds a road surface from a reference line, an elevation profile
    /// (`z` as a function of `s`), a superelevation profile (roll angle in
    /// radians as a function of `s`), and the lateral extent over which the
    /// surface is considered valid.
    pub fn new(
        reference_curve: Arc<ReferenceCurve2D>,
        elevation: Arc<dyn UnivariateFunction + Send + Sync>,
        superelevation: Arc<dyn UnivariateFunction + Send + Sync>,
        t_domain: Range,
    ) -> Self {
        RoadSurface3D { reference_curve, elevation, superelevation, t_domain }
    }
}

impl Surface3D for RoadSurface3D {
    fn s_domain(&self) -> Range {
        self.reference_curve.domain()
    }

    fn t_domain(&self) -> Range {
        self.t_domain
    }

    fn point_at(&self, s: f64, t: f64) -> Result<Vector3D> {
        if !self.t_domain.contains_fuzzy(t, 1.0e-9) {
            return Err(Error::OutOfDomain { s: t });
        }
        let (x, y, heading) = self.reference_curve.evaluate(s)?;
        let z0 = self.elevation.value(s)?;
        let roll = self.superelevation.value(s)?;
        let horizontal_t = t * roll.cos();
        let dz = t * roll.sin();
        let dx = -horizontal_t * heading.sin();
        let dy = horizontal_t * heading.cos();
        Ok(vector3d(x + dx, y + dy, z0 + dz))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan_view::PlanViewGeometry;
    use roadgeom_function::LinearFunction;

    fn flat_surface() -> RoadSurface3D {
        let reference_curve =
            Arc::new(ReferenceCurve2D::new(vec![PlanViewGeometry::Line { length: 100.0 }]).unwrap());
        let elevation: Arc<dyn UnivariateFunction + Send + Sync> = Arc::new(LinearFunction::constant(0.0));
        let superelevation: Arc<dyn UnivariateFunction + Send + Sync> = Arc::new(LinearFunction::constant(0.0));
        RoadSurface3D::new(reference_curve, elevation, superelevation, Range::unbounded())
    }

    #[test]
    fn centerline_matches_reference_curve() {
        let surface = flat_surface();
        let p = surface.point_at(50.0, 0.0).unwrap();
        assert!((p.x - 50.0).abs() < 1e-9);
        assert!(p.y.abs() < 1e-9);
    }

    #[test]
    fn lateral_offset_moves_perpendicular_to_heading() {
        let surface = flat_surface();
        let p = surface.point_at(50.0, 2.0).unwrap();
        assert!((p.x - 50.0).abs() < 1e-9);
        assert!((p.y - 2.0).abs() < 1e-9);
    }

    #[test]
    fn superelevation_lifts_the_outer_edge() {
        let reference_curve =
            Arc::new(ReferenceCurve2D::new(vec![PlanViewGeometry::Line { length: 100.0 }]).unwrap());
        let elevation: Arc<dyn UnivariateFunction + Send + Sync> = Arc::new(LinearFunction::constant(0.0));
        let superelevation: Arc<dyn UnivariateFunction + Send + Sync> =
            Arc::new(LinearFunction::constant(0.1));
        let surface = RoadSurface3D::new(reference_curve, elevation, superelevation, Range::unbounded());
        let p = surface.point_at(10.0, 3.0).unwrap();
        assert!(p.z > 0.0);
    }
}
