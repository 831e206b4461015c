use crate::boundary::sample_boundaries;
use crate::errors::Result;
use roadgeom_geom3d::CompositeSurface3D;
use roadgeom_space::{LaneIdentifier, Road};

/// The lane's surface: the strip of geometry between its sampled left and
/// right boundary curves.
///
/// Returns an empty [`CompositeSurface3D`] if the two boundaries coincide
/// everywhere (fuzzy equality), which happens for a lane whose width is
/// zero across its whole section.
pub fn lane_surface(
    road: &Road,
    identifier: &LaneIdentifier,
    step: f64,
    tolerance: f64,
) -> Result<CompositeSurface3D> {
    let (left, right) = sample_boundaries(road, identifier, step)?;
    Ok(CompositeSurface3D::from_boundary_strip(&left, &right, tolerance)?)
}
