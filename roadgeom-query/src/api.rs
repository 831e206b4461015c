//! The output contract a CityGML writer drives: per-road lane surfaces,
//! boundary curves, arbitrary-factor curves, and filler surfaces.

use crate::boundary::{left_lane_boundary, right_lane_boundary};
use crate::errors::Result;
use crate::filler::all_filler_surfaces;
use crate::lane_geometry::curve_on_lane;
use crate::lane_surface::lane_surface;
use roadgeom_geom3d::{CompositeSurface3D, Curve3D};
use roadgeom_space::{AttributeList, LaneIdentifier, LaneSectionIdentifier, Road};

fn all_lane_identifiers(road: &Road) -> Vec<LaneIdentifier> {
    road.lane_sections()
        .iter()
        .flat_map(|section| {
            let section_identifier =
                LaneSectionIdentifier::new(road.id(), section.id(), section.curve_position_start());
            section.lanes().keys().map(move |id| LaneIdentifier::new(section_identifier.clone(), *id)).collect::<Vec<_>>()
        })
        .collect()
}

fn attributes_of(road: &Road, identifier: &LaneIdentifier) -> Result<AttributeList> {
    let section = road.lane_section(identifier.lane_section_identifier.lane_section_id)?;
    Ok(section.lane(identifier.lane_id)?.attributes().clone())
}

/// Every lane's surface, sampled at `step`, paired with its identifier and
/// attributes.
pub fn get_all_lanes(
    road: &Road,
    step: f64,
    tolerance: f64,
) -> Result<Vec<(LaneIdentifier, CompositeSurface3D, AttributeList)>> {
    all_lane_identifiers(road)
        .into_iter()
        .map(|identifier| {
            let surface = lane_surface(road, &identifier, step, tolerance)?;
            let attributes = attributes_of(road, &identifier)?;
            Ok((identifier, surface, attributes))
        })
        .collect()
}

/// Every lane's left boundary curve, with its identifier and attributes.
pub fn get_all_left_lane_boundaries(
    road: &Road,
) -> Result<Vec<(LaneIdentifier, Box<dyn Curve3D>, AttributeList)>> {
    all_lane_identifiers(road)
        .into_iter()
        .map(|identifier| {
            let curve = left_lane_boundary(road, &identifier)?;
            let attributes = attributes_of(road, &identifier)?;
            Ok((identifier, Box::new(curve) as Box<dyn Curve3D>, attributes))
        })
        .collect()
}

/// Every lane's right boundary curve, with its identifier and attributes.
pub fn get_all_right_lane_boundaries(
    road: &Road,
) -> Result<Vec<(LaneIdentifier, Box<dyn Curve3D>, AttributeList)>> {
    all_lane_identifiers(road)
        .into_iter()
        .map(|identifier| {
            let curve = right_lane_boundary(road, &identifier)?;
            let attributes = attributes_of(road, &identifier)?;
            Ok((identifier, Box::new(curve) as Box<dyn Curve3D>, attributes))
        })
        .collect()
}

/// Every lane's curve at query factor `f`, with its identifier and
/// attributes.
pub fn get_all_curves_on_lanes(
    road: &Road,
    f: f64,
) -> Result<Vec<(LaneIdentifier, Box<dyn Curve3D>, AttributeList)>> {
    all_lane_identifiers(road)
        .into_iter()
        .map(|identifier| {
            let curve = curve_on_lane(road, &identifier, f)?;
            let attributes = attributes_of(road, &identifier)?;
            Ok((identifier, Box::new(curve) as Box<dyn Curve3D>, attributes))
        })
        .collect()
}

/// Every lateral filler surface bridging adjacent lanes within each lane
/// section, sampled at `step`.
pub fn get_all_filler_surfaces(road: &Road, step: f64, tolerance: f64) -> Result<Vec<CompositeSurface3D>> {
    all_filler_surfaces(road, step, tolerance)
}
