use crate::errors::{Error, Result};
use crate::ring::{LinearRing3D, Polygon3D};
use roadgeom_base::{near, Vector3D};

/// A collection of [`Polygon3D`] faces, possibly empty.
///
/// An empty composite surface represents "no geometry": the outcome of
/// building a lane or filler surface whose left and right boundaries
/// coincide everywhere (fuzzy equality), which is valid, not an error.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompositeSurface3D {
    panels: Vec<Polygon3D>,
}

impl CompositeSurface3D {
    /// An empty surface with no faces.
    pub fn empty() -> Self {
        CompositeSurface3D { panels: Vec::new() }
    }

    /// Builds a composite surface from explicit panels.
    pub fn new(panels: Vec<Polygon3D>) -> Self {
        CompositeSurface3D { panels }
    }

    /// The surface's faces.
    pub fn panels(&self) -> &[Polygon3D] {
        &self.panels
    }

    /// Whether this surface carries any geometry at all.
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Builds the strip of geometry between two ordered boundary point
    /// lists, sampled at the same parameter values: `left` walked forward
    /// and `right` walked backward form a single closed loop, which is
    /// deduplicated and wrapped as one ring.
    ///
    /// If every corresponding pair of `left`/`right` points is fuzzy-equal,
    /// the boundaries coincide everywhere and [`CompositeSurface3D::empty`]
    /// is returned rather than an error. A genuinely degenerate loop (fewer
    /// than three distinct points surviving deduplication despite the
    /// boundaries not fully coinciding) fails with
    /// [`Error::DegenerateRing`].
    pub fn from_boundary_strip(left: &[Vector3D], right: &[Vector3D], tol: f64) -> Result<Self> {
        if left.len() != right.len() {
            return Err(Error::MismatchedBoundaryLengths { left: left.len(), right: right.len() });
        }
        if left.iter().zip(right).all(|(l, r)| near(l, r, tol)) {
            return Ok(CompositeSurface3D::empty());
        }
        let mut loop_points = left.to_vec();
        loop_points.extend(right.iter().rev().copied());
        let ring = LinearRing3D::try_new(loop_points, tol)?;
        Ok(CompositeSurface3D::new(vec![Polygon3D::new(ring)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadgeom_base::vector3d;

    #[test]
    fn coincident_boundaries_produce_an_empty_surface() {
        let left = vec![vector3d(0.0, 0.0, 0.0), vector3d(1.0, 0.0, 0.0)];
        let right = left.clone();
        let surface = CompositeSurface3D::from_boundary_strip(&left, &right, 1e-7).unwrap();
        assert!(surface.is_empty());
    }

    #[test]
    fn separated_boundaries_produce_one_panel() {
        let left = vec![vector3d(0.0, 0.0, 0.0), vector3d(1.0, 0.0, 0.0)];
        let right = vec![vector3d(0.0, 1.0, 0.0), vector3d(1.0, 1.0, 0.0)];
        let surface = CompositeSurface3D::from_boundary_strip(&left, &right, 1e-7).unwrap();
        assert_eq!(surface.panels().len(), 1);
        assert_eq!(surface.panels()[0].exterior().points().len(), 4);
    }

    #[test]
    fn mismatched_lengths_fail() {
        let left = vec![vector3d(0.0, 0.0, 0.0)];
        let right = vec![vector3d(0.0, 1.0, 0.0), vector3d(1.0, 1.0, 0.0)];
        assert!(CompositeSurface3D::from_boundary_strip(&left, &right, 1e-7).is_err());
    }
}
