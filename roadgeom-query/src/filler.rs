use crate::errors::Result;
use crate::lane_geometry::curve_on_lane;
use roadgeom_geom3d::{Curve3D, CompositeSurface3D};
use roadgeom_space::{LaneIdentifier, LaneSectionIdentifier, Road};

/// Builds the ordered chain of lane ids on one side of a section's
/// reference line: `1..=max_left` for the left side, or `-1..=min_right`
/// (nearest to the reference line first) for the right side.
///
/// Each side forms its own chain outward from the reference line; the pair
/// that would straddle lane id 0 is never formed, since the two sides are
/// never chained together.
fn side_chain(ids: &[i32], positive: bool) -> Vec<i32> {
    let mut side: Vec<i32> = ids.iter().copied().filter(|id| if positive { *id > 0 } else { *id < 0 }).collect();
    side.sort_by_key(|id| id.abs());
    side
}

/// Builds the filler surface between each pair of laterally adjacent
/// lanes (nearer lane's outer edge against farther lane's inner edge) for
/// every lane section of `road`, at sample step `step`.
///
/// A pair whose boundaries coincide (fuzzy, at `tolerance`) still
/// contributes an (empty) entry to the result, so the result's length is
/// always `Σ (lanes_per_side − 1)` over both sides of every section.
pub fn all_filler_surfaces(road: &Road, step: f64, tolerance: f64) -> Result<Vec<CompositeSurface3D>> {
    let mut surfaces = Vec::new();
    for section in road.lane_sections() {
        let ids: Vec<i32> = section.lanes().keys().copied().collect();
        for positive in [true, false] {
            let chain = side_chain(&ids, positive);
            for pair in chain.windows(2) {
                let (near_id, far_id) = (pair[0], pair[1]);
                let section_identifier =
                    LaneSectionIdentifier::new(road.id(), section.id(), section.curve_position_start());
                let near = LaneIdentifier::new(section_identifier.clone(), near_id);
                let far = LaneIdentifier::new(section_identifier, far_id);

                let near_outer = curve_on_lane(road, &near, 1.0)?.sample(step)?;
                let far_inner = curve_on_lane(road, &far, 0.0)?.sample(step)?;
                surfaces.push(CompositeSurface3D::from_boundary_strip(&near_outer, &far_inner, tolerance)?);
            }
        }
    }
    Ok(surfaces)
}
