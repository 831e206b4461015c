//! Translates OpenDRIVE piecewise-polynomial records ([`roadgeom_model`])
//! into the function trees and road-space model ([`crate`]) the queries in
//! `roadgeom-query` operate on.

use crate::attributes::{AttributeList, AttributeValue};
use crate::config::BuilderConfig;
use crate::errors::{Error, Result};
use crate::identifiers::LaneSectionIdentifier;
use crate::lane::Lane;
use crate::lane_section::LaneSection;
use crate::road::Road;
use roadgeom_base::Range;
use roadgeom_function::{ConcatenatedFunction, LinearFunction, ReportMessage, UnivariateFunction, WithReport};
use roadgeom_geom3d::{PlanViewGeometry, ReferenceCurve2D, RoadSurface3D, Surface3D};
use roadgeom_model::{
    LaneRecord, LaneSectionRecord, PlanViewGeometryRecord, PolynomialEntryS, PolynomialEntrySOffset,
    RoadRecord, ShapeEntry,
};
use std::sync::Arc;

/// Builds a scalar function from road-global entries, sorting them by `s`
/// first (OpenDRIVE does not guarantee input order), then delegating
/// duplicate-key handling to
/// [`ConcatenatedFunction::of_polynomial_functions`]. Every resulting
/// report message is logged at `warn` level in addition to being returned.
fn build_s_function(
    entries: &[PolynomialEntryS],
    prepend_constant_value: Option<f64>,
    label: &str,
) -> Result<ConcatenatedFunction> {
    if entries.is_empty() {
        return Ok(ConcatenatedFunction::of_linear_functions(&[0.0], &[prepend_constant_value.unwrap_or(0.0)], None)?);
    }
    let mut sorted: Vec<&PolynomialEntryS> = entries.iter().collect();
    sorted.sort_by(|a, b| a.s.partial_cmp(&b.s).unwrap());
    let starts: Vec<f64> = sorted.iter().map(|e| e.s).collect();
    let coefficients: Vec<Vec<f64>> = sorted.iter().map(|e| e.coefficients.clone()).collect();
    let WithReport { value, messages } =
        ConcatenatedFunction::of_polynomial_functions(&starts, &coefficients, prepend_constant_value)?;
    log_messages(label, &messages);
    Ok(value)
}

/// Builds a scalar function from lane-section-local entries keyed by
/// `s_offset`, the same way [`build_s_function`] does for road-global `s`
/// entries.
fn build_s_offset_function(
    entries: &[PolynomialEntrySOffset],
    prepend_constant_value: Option<f64>,
    label: &str,
) -> Result<ConcatenatedFunction> {
    if entries.is_empty() {
        return Ok(ConcatenatedFunction::of_linear_functions(&[0.0], &[prepend_constant_value.unwrap_or(0.0)], None)?);
    }
    let mut sorted: Vec<&PolynomialEntrySOffset> = entries.iter().collect();
    sorted.sort_by(|a, b| a.s_offset.partial_cmp(&b.s_offset).unwrap());
    let starts: Vec<f64> = sorted.iter().map(|e| e.s_offset).collect();
    let coefficients: Vec<Vec<f64>> = sorted.iter().map(|e| e.coefficients.clone()).collect();
    if starts[0] > 0.0 && prepend_constant_value.is_some() {
        log::warn!("{label}: first entry starts at s_offset {}, region before it defaults to zero width", starts[0]);
    }
    let WithReport { value, messages } =
        ConcatenatedFunction::of_polynomial_functions(&starts, &coefficients, prepend_constant_value)?;
    log_messages(label, &messages);
    Ok(value)
}

fn log_messages(label: &str, messages: &[ReportMessage]) {
    for message in messages {
        log::warn!("{label}: {message}");
    }
}

/// Groups lateral shape entries by station `s`, building one `t`-indexed
/// [`ConcatenatedFunction`] per distinct station. Stations are compared
/// exactly (OpenDRIVE repeats the same `s` value verbatim across a
/// station's shape entries, it does not perturb it).
pub fn build_lateral_shape_functions(entries: &[ShapeEntry]) -> Result<Vec<(f64, ConcatenatedFunction)>> {
    let mut stations: Vec<f64> = entries.iter().map(|e| e.s).collect();
    stations.sort_by(|a, b| a.partial_cmp(b).unwrap());
    stations.dedup();

    let mut result = Vec::with_capacity(stations.len());
    for s in stations {
        let mut at_station: Vec<&ShapeEntry> = entries.iter().filter(|e| e.s == s).collect();
        at_station.sort_by(|a, b| a.t_offset.partial_cmp(&b.t_offset).unwrap());
        let starts: Vec<f64> = at_station.iter().map(|e| e.t_offset).collect();
        let coefficients: Vec<Vec<f64>> = at_station.iter().map(|e| e.coefficients.clone()).collect();
        let WithReport { value, messages } =
            ConcatenatedFunction::of_polynomial_functions(&starts, &coefficients, Some(0.0))?;
        log_messages("lateral_shape", &messages);
        result.push((s, value));
    }
    Ok(result)
}

fn build_lane(record: &LaneRecord, config: &BuilderConfig) -> Result<Lane> {
    let label = format!("lane {}", record.id);
    let width = Arc::new(build_s_offset_function(&record.width, Some(0.0), &label)?);
    let inner_height_offset =
        Arc::new(build_s_offset_function(&record.inner_height_offset, Some(0.0), &label)?);
    let outer_height_offset =
        Arc::new(build_s_offset_function(&record.outer_height_offset, Some(0.0), &label)?);

    let mut attributes = AttributeList::new();
    for (key, value) in &record.attributes {
        attributes.push(&config.attributes_prefix, key, AttributeValue::Text(value.clone()));
    }
    attributes.push(&config.attributes_prefix, "lane_id", AttributeValue::Number(record.id as f64));

    Ok(Lane::new(record.id, width, inner_height_offset, outer_height_offset, record.level, attributes))
}

fn build_lane_section(id: usize, record: &LaneSectionRecord, config: &BuilderConfig) -> Result<LaneSection> {
    let mut lanes = Vec::with_capacity(record.left.len() + record.right.len());
    for lane_record in record.left.iter().chain(record.right.iter()) {
        lanes.push(build_lane(lane_record, config)?);
    }
    LaneSection::new(id, record.s, lanes)
}

fn build_reference_curve(record: &RoadRecord) -> Result<ReferenceCurve2D> {
    let segments: Vec<PlanViewGeometry> = record
        .plan_view
        .geometry
        .iter()
        .map(|segment| match segment {
            PlanViewGeometryRecord::Line { length } => PlanViewGeometry::Line { length: *length },
            PlanViewGeometryRecord::Arc { length, curvature } => {
                PlanViewGeometry::Arc { length: *length, curvature: *curvature }
            }
        })
        .collect();
    Ok(ReferenceCurve2D::new(segments)?)
}

/// Checks a road record's preconditions before construction proceeds:
/// the plan view's summed length must agree with the stated `length`
/// within `tolerance`, and a lateral shape must not coexist with a
/// non-empty lane offset (both displace the reference line laterally and
/// the core does not define how they compose).
pub fn is_processable(record: &RoadRecord, tolerance: f64) -> Result<()> {
    let summed = record.plan_view.total_length();
    if (summed - record.length).abs() > tolerance {
        return Err(Error::IllegalState {
            reason: format!(
                "plan view length {summed} does not match stated road length {} within tolerance {tolerance}",
                record.length
            ),
        });
    }
    if !record.lateral_profile.shape.is_empty() && !record.lanes.lane_offset.is_empty() {
        return Err(Error::IllegalState {
            reason: "lateral shape and a non-empty lane offset may not coexist".into(),
        });
    }
    Ok(())
}

/// Builds a fully queryable [`Road`] from a validated [`RoadRecord`].
///
/// Calls [`is_processable`] first and propagates its failure. All
/// non-fatal repairs performed along the way (dropped equal-key entries,
/// missing `s = 0` prefixes) are logged via `log::warn!` as they are
/// discovered.
pub fn build_road(record: &RoadRecord, config: &BuilderConfig) -> Result<Road> {
    is_processable(record, config.tolerance)?;

    let reference_curve = Arc::new(build_reference_curve(record)?);
    let elevation: Arc<dyn UnivariateFunction + Send + Sync> =
        Arc::new(build_s_function(&record.elevation_profile.elevation, Some(0.0), "elevation")?);
    let superelevation: Arc<dyn UnivariateFunction + Send + Sync> =
        Arc::new(build_s_function(&record.lateral_profile.superelevation, Some(0.0), "superelevation")?);
    let flat_superelevation: Arc<dyn UnivariateFunction + Send + Sync> = Arc::new(LinearFunction::constant(0.0));

    let t_domain = Range::unbounded();
    let surface: Arc<dyn Surface3D + Send + Sync> = Arc::new(RoadSurface3D::new(
        reference_curve.clone(),
        elevation.clone(),
        superelevation,
        t_domain,
    ));
    let surface_without_torsion: Arc<dyn Surface3D + Send + Sync> =
        Arc::new(RoadSurface3D::new(reference_curve, elevation, flat_superelevation, t_domain));

    let lane_offset: Arc<dyn UnivariateFunction + Send + Sync> =
        Arc::new(build_s_function(&record.lanes.lane_offset, Some(0.0), "lane_offset")?);

    if !record.lateral_profile.shape.is_empty() {
        build_lateral_shape_functions(&record.lateral_profile.shape)?;
    }

    let mut sections: Vec<LaneSectionRecord> = record.lanes.lane_section.clone();
    sections.sort_by(|a, b| a.s.partial_cmp(&b.s).unwrap());
    let lane_sections = sections
        .iter()
        .enumerate()
        .map(|(index, section)| build_lane_section(index, section, config))
        .collect::<Result<Vec<_>>>()?;

    Road::new(record.id.clone(), surface, surface_without_torsion, lane_offset, lane_sections)
}

/// Builds a [`LaneSectionIdentifier`] for lane section `lane_section_id` of
/// `road`.
pub fn lane_section_identifier(road: &Road, lane_section_id: usize) -> Result<LaneSectionIdentifier> {
    let section = road.lane_section(lane_section_id)?;
    Ok(LaneSectionIdentifier::new(road.id(), lane_section_id, section.curve_position_start()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use roadgeom_model::{ElevationProfileRecord, LateralProfileRecord, PlanViewRecord, RoadLanesRecord};

    fn straight_single_section_road() -> RoadRecord {
        RoadRecord {
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
        }
    }

    #[test]
    fn is_processable_accepts_a_matching_length() {
        let record = straight_single_section_road();
        assert!(is_processable(&record, 1e-7).is_ok());
    }

    #[test]
    fn is_processable_rejects_a_length_mismatch() {
        let mut record = straight_single_section_road();
        record.length = 99.5;
        assert!(is_processable(&record, 1e-7).is_err());
    }

    #[test]
    fn is_processable_rejects_shape_and_lane_offset_together() {
        let mut record = straight_single_section_road();
        record.lanes.lane_offset.push(PolynomialEntryS { s: 0.0, coefficients: vec![0.5] });
        record.lateral_profile.shape.push(ShapeEntry { s: 0.0, t_offset: 0.0, coefficients: vec![0.0] });
        assert!(is_processable(&record, 1e-7).is_err());
    }

    #[test]
    fn builds_a_straight_single_section_road() {
        let record = straight_single_section_road();
        let road = build_road(&record, &BuilderConfig::default()).unwrap();
        assert_eq!(road.lane_sections().len(), 1);
        assert_eq!(road.lane_section(0).unwrap().lane(1).unwrap().width().value(0.0).unwrap(), 3.5);
    }

    #[test]
    fn equal_key_width_entries_drop_the_earlier_one() {
        let entries = vec![
            PolynomialEntrySOffset { s_offset: 0.0, coefficients: vec![1.0] },
            PolynomialEntrySOffset { s_offset: 10.0, coefficients: vec![2.0] },
            PolynomialEntrySOffset { s_offset: 10.0, coefficients: vec![3.0] },
            PolynomialEntrySOffset { s_offset: 20.0, coefficients: vec![4.0] },
        ];
        let width = build_s_offset_function(&entries, Some(0.0), "width").unwrap();
        assert_eq!(width.value(10.0).unwrap(), 3.0);
    }

    proptest! {
        #[test]
        fn equal_key_entries_always_let_the_later_one_win(
            s_offset in 0.0f64..100.0,
            first in -1000.0f64..1000.0,
            second in -1000.0f64..1000.0,
        ) {
            let entries = vec![
                PolynomialEntrySOffset { s_offset, coefficients: vec![first] },
                PolynomialEntrySOffset { s_offset, coefficients: vec![second] },
            ];
            let width = build_s_offset_function(&entries, Some(0.0), "width").unwrap();
            prop_assert_eq!(width.value(s_offset).unwrap(), second);
        }
    }
}
