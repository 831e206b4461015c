use crate::errors::Result;
use roadgeom_base::{Range, Vector3D};
use std::fmt::Debug;

/// A surface parameterised over a rectangular curve-relative domain: `s`
/// along a reference line and `t` laterally across it.
///
/// Any implementor is an `AbstractCurveRelativeSurface3D` in the sense the
/// road-space model needs: a continuous `(s, t) -> Vector3D` map that can be
/// restricted to a sub-range of `s` (see
/// [`SectionedCurveRelativeParametricSurface3D`](crate::SectionedCurveRelativeParametricSurface3D)).
pub trait Surface3D: Debug {
    /// The domain's extent along the reference line.
    fn s_domain(&self) -> Range;

    /// The domain's lateral extent.
    fn t_domain(&self) -> Range;

    /// The point at curve-relative coordinates `(s, t)`.
    fn point_at(&self, s: f64, t: f64) -> Result<Vector3D>;
}
