use crate::errors::{Error, Result};
use roadgeom_function::{StackedFunction, UnivariateFunction};
use roadgeom_geom3d::{CurveOnParametricSurface3D, SectionedCurveRelativeParametricSurface3D, Surface3D};
use roadgeom_space::{LaneIdentifier, Road};
use std::sync::Arc;

/// The sectioned surface a lane-section's lanes are traced on: the road's
/// full surface (torsion-free if the lane is `level`), restricted to the
/// section's own `s`-range.
pub fn sectioned_surface(
    road: &Road,
    identifier: &LaneIdentifier,
    level: bool,
) -> Result<Arc<dyn Surface3D + Send + Sync>> {
    let section_id = identifier.lane_section_identifier.lane_section_id;
    let domain = road
        .lane_section_curve_position_domains()
        .get(section_id)
        .copied()
        .ok_or_else(|| Error::Space(roadgeom_space::Error::NotFound { what: format!("lane section {section_id}") }))?;
    let source: Arc<dyn Surface3D + Send + Sync> =
        if level { road.surface_without_torsion().clone() } else { road.surface().clone() };
    Ok(Arc::new(SectionedCurveRelativeParametricSurface3D::new(source, domain)?))
}

/// The lateral offset function, in lane-section-local coordinates, for a
/// lane at query factor `f`: the sectioned road lane-offset plus the
/// cumulative width of every lane strictly between the reference lane and
/// the queried lane, plus `f` times the queried lane's own width, signed
/// by the lane's side of the road.
pub fn lateral_offset_function(
    road: &Road,
    identifier: &LaneIdentifier,
    f: f64,
) -> Result<Arc<dyn UnivariateFunction + Send + Sync>> {
    let section_id = identifier.lane_section_identifier.lane_section_id;
    let section = road.lane_section(section_id)?;
    let lane_id = identifier.lane_id;
    let sign = if lane_id > 0 { 1.0 } else { -1.0 };
    let abs_id = lane_id.unsigned_abs() as i32;

    let mut members: Vec<Arc<dyn UnivariateFunction + Send + Sync>> = Vec::new();
    for inner_abs in 1..abs_id {
        let inner_id = inner_abs * lane_id.signum();
        members.push(section.lane(inner_id)?.width().clone());
    }
    members.push(section.lane(lane_id)?.width().clone());

    let per_lane = StackedFunction::new(members, move |values| {
        let (inner, last) = values.split_at(values.len() - 1);
        sign * (inner.iter().sum::<f64>() + f * last[0])
    });

    let domain = road
        .lane_section_curve_position_domains()
        .get(section_id)
        .copied()
        .ok_or_else(|| Error::Space(roadgeom_space::Error::NotFound { what: format!("lane section {section_id}") }))?;
    let sectioned_lane_offset =
        roadgeom_function::SectionedUnivariateFunction::new(road.lane_offset().clone(), domain)?;

    let total: Arc<dyn UnivariateFunction + Send + Sync> =
        Arc::new(StackedFunction::of_sum(vec![Arc::new(sectioned_lane_offset), Arc::new(per_lane)]));
    Ok(total)
}

/// The height-offset function for a lane at query factor `f`: a linear mix
/// between its stored inner and outer height offsets.
pub fn height_offset_function(
    road: &Road,
    identifier: &LaneIdentifier,
    f: f64,
) -> Result<Arc<dyn UnivariateFunction + Send + Sync>> {
    let section = road.lane_section(identifier.lane_section_identifier.lane_section_id)?;
    let lane = section.lane(identifier.lane_id)?;
    let members = vec![lane.inner_height_offset().clone(), lane.outer_height_offset().clone()];
    Ok(Arc::new(StackedFunction::new(members, move |values| values[0] * (1.0 - f) + values[1] * f)))
}

/// The curve a lane traces at query factor `f` (0 = inner boundary, 1 =
/// outer boundary, 0.5 = centerline).
pub fn curve_on_lane(road: &Road, identifier: &LaneIdentifier, f: f64) -> Result<CurveOnParametricSurface3D> {
    let section = road.lane_section(identifier.lane_section_identifier.lane_section_id)?;
    let lane = section.lane(identifier.lane_id)?;
    let surface = sectioned_surface(road, identifier, lane.level())?;
    let lateral_offset = lateral_offset_function(road, identifier, f)?;
    let height_offset = height_offset_function(road, identifier, f)?;
    Ok(CurveOnParametricSurface3D::new(surface, lateral_offset, Some(height_offset))?)
}

/// The query factor selecting a lane's left boundary: 1.0 for positive
/// (left-side) lane ids, 0.0 for negative (right-side) ones.
pub fn left_boundary_factor(lane_id: i32) -> f64 {
    if lane_id > 0 {
        1.0
    } else {
        0.0
    }
}

/// The query factor selecting a lane's right boundary: the complement of
/// [`left_boundary_factor`].
pub fn right_boundary_factor(lane_id: i32) -> f64 {
    1.0 - left_boundary_factor(lane_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadgeom_space::{BuilderConfig, LaneSectionIdentifier};
    use roadgeom_space::builder::build_road;

    fn two_lane_road() -> Road {
        use roadgeom_model::*;
        let record = RoadRecord {
            id: "r1".into(),
            length: 100.0,
            plan_view: PlanViewRecord { geometry: vec![PlanViewGeometryRecord::Line { length: 100.0 }] },
            elevation_profile: ElevationProfileRecord::default(),
            lateral_profile: LateralProfileRecord::default(),
            lanes: RoadLanesRecord {
                lane_offset: vec![],
                lane_section: vec![LaneSectionRecord {
                    s: 0.0,
                    left: vec![LaneRecord {
                        id: 1,
                        width: vec![PolynomialEntrySOffset { s_offset: 0.0, coefficients: vec![3.5] }],
                        inner_height_offset: vec![],
                        outer_height_offset: vec![],
                        level: false,
                        attributes: vec![],
                    }],
                    center: vec![],
                    right: vec![LaneRecord {
                        id: -1,
                        width: vec![PolynomialEntrySOffset { s_offset: 0.0, coefficients: vec![3.5] }],
                        inner_height_offset: vec![],
                        outer_height_offset: vec![],
                        level: false,
                        attributes: vec![],
                    }],
                }],
            },
        };
        build_road(&record, &BuilderConfig::default()).unwrap()
    }

    #[test]
    fn inner_boundary_of_first_lane_has_zero_lateral_offset() {
        let road = two_lane_road();
        let identifier = LaneIdentifier::new(LaneSectionIdentifier::new("r1", 0, 0.0), 1);
        let offset = lateral_offset_function(&road, &identifier, 0.0).unwrap();
        assert_eq!(offset.value(10.0).unwrap(), 0.0);
    }

    #[test]
    fn outer_boundary_of_first_lane_equals_its_width() {
        let road = two_lane_road();
        let identifier = LaneIdentifier::new(LaneSectionIdentifier::new("r1", 0, 0.0), 1);
        let offset = lateral_offset_function(&road, &identifier, 1.0).unwrap();
        assert!((offset.value(10.0).unwrap() - 3.5).abs() < 1e-9);
    }

    #[test]
    fn right_side_lane_offsets_are_negative() {
        let road = two_lane_road();
        let identifier = LaneIdentifier::new(LaneSectionIdentifier::new("r1", 0, 0.0), -1);
        let offset = lateral_offset_function(&road, &identifier, 1.0).unwrap();
        assert!((offset.value(10.0).unwrap() + 3.5).abs() < 1e-9);
    }
}
