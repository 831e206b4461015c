use crate::errors::Result;
use crate::lane_geometry::{curve_on_lane, left_boundary_factor, right_boundary_factor};
use roadgeom_geom3d::{Curve3D, CurveOnParametricSurface3D};
use roadgeom_space::{LaneIdentifier, Road};

/// The lane's left boundary curve: its outer edge for left-side
/// (positive-id) lanes, its inner edge for right-side (negative-id)
/// lanes.
pub fn left_lane_boundary(road: &Road, identifier: &LaneIdentifier) -> Result<CurveOnParametricSurface3D> {
    curve_on_lane(road, identifier, left_boundary_factor(identifier.lane_id))
}

/// The lane's right boundary curve, the complement of [`left_lane_boundary`].
pub fn right_lane_boundary(road: &Road, identifier: &LaneIdentifier) -> Result<CurveOnParametricSurface3D> {
    curve_on_lane(road, identifier, right_boundary_factor(identifier.lane_id))
}

/// Samples both of a lane's boundary curves at `step`, returning the
/// `(left, right)` point lists in matching order.
pub fn sample_boundaries(
    road: &Road,
    identifier: &LaneIdentifier,
    step: f64,
) -> Result<(Vec<roadgeom_base::Vector3D>, Vec<roadgeom_base::Vector3D>)> {
    let left = left_lane_boundary(road, identifier)?.sample(step)?;
    let right = right_lane_boundary(road, identifier)?.sample(step)?;
    Ok((left, right))
}
