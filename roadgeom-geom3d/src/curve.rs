use crate::errors::{Error, Result};
use roadgeom_base::{Range, Vector3D};
use std::fmt::Debug;

/// A 3D curve parameterised by a single scalar, usually a road's `s`
/// coordinate or a lane-section-local restriction of it.
pub trait Curve3D: Debug {
    /// The curve's domain of definition.
    fn domain(&self) -> Range;

    /// The point at parameter `s`.
    fn point_at(&self, s: f64) -> Result<Vector3D>;

    /// Samples the curve at `step` intervals across its domain, always
    /// including both endpoints.
    ///
    /// Fails with [`Error::OutOfDomain`] if the domain is unbounded, since
    /// there is no finite sample count to produce.
    fn sample(&self, step: f64) -> Result<Vec<Vector3D>> {
        let domain = self.domain();
        let lower = domain.lower_value().ok_or(Error::OutOfDomain { s: f64::NEG_INFINITY })?;
        let upper = domain.upper_value().ok_or(Error::OutOfDomain { s: f64::INFINITY })?;
        if !(step > 0.0) {
            return Err(Error::OutOfDomain { s: step });
        }
        let mut points = Vec::new();
        let mut s = lower;
        while s < upper {
            points.push(self.point_at(s)?);
            s += step;
        }
        points.push(self.point_at(upper)?);
        Ok(points)
    }
}
