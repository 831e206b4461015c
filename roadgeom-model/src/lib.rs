//! Plain-data representation of the OpenDRIVE records this workspace
//! consumes: roads, lane sections, lanes, and the piecewise-polynomial
//! profiles that describe their shape.
//!
//! These types carry no behavior beyond simple accessors; they are the
//! input contract handed in by the (out-of-scope) OpenDRIVE reader.
//! `roadgeom-space`'s builder module is what turns them into function
//! trees and a queryable road-space model.

#![warn(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

use serde::{Deserialize, Serialize};

/// A single piecewise-polynomial entry keyed by a road-global curve
/// position `s`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolynomialEntryS {
    /// The entry's start position along the reference line.
    pub s: f64,
    /// Polynomial coefficients, lowest degree first.
    pub coefficients: Vec<f64>,
}

/// A single piecewise-polynomial entry keyed by a lane-section-local
/// offset `s_offset`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolynomialEntrySOffset {
    /// The entry's start position relative to its lane section's start.
    pub s_offset: f64,
    /// Polynomial coefficients, lowest degree first.
    pub coefficients: Vec<f64>,
}

/// A single plan-view geometry record: a straight or constant-curvature
/// segment of the reference line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlanViewGeometryRecord {
    /// A straight segment of the given length.
    Line {
        /// Arc length of the segment.
        length: f64,
    },
    /// A constant-curvature arc of the given length.
    Arc {
        /// Arc length of the segment.
        length: f64,
        /// Signed curvature (1 / radius).
        curvature: f64,
    },
}

impl PlanViewGeometryRecord {
    /// This segment's arc length.
    pub fn length(&self) -> f64 {
        match self {
            PlanViewGeometryRecord::Line { length } => *length,
            PlanViewGeometryRecord::Arc { length, .. } => *length,
        }
    }
}

/// The road's plan-view: an ordered list of geometry segments laid end to
/// end starting at `s = 0`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanViewRecord {
    /// Geometry segments, in order.
    pub geometry: Vec<PlanViewGeometryRecord>,
}

impl PlanViewRecord {
    /// Total arc length of all geometry segments.
    pub fn total_length(&self) -> f64 {
        self.geometry.iter().map(PlanViewGeometryRecord::length).sum()
    }
}

/// The road's elevation profile: `z` as a function of `s`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ElevationProfileRecord {
    /// Piecewise-polynomial elevation entries, keyed by road-global `s`.
    pub elevation: Vec<PolynomialEntryS>,
}

/// A lateral shape entry: a cross-section cut at a fixed `s`, itself a
/// polynomial in `t`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeEntry {
    /// The station at which this cross-section is defined.
    pub s: f64,
    /// The lateral offset at which the polynomial starts.
    pub t_offset: f64,
    /// Polynomial coefficients in `t`, lowest degree first.
    pub coefficients: Vec<f64>,
}

/// The road's lateral profile: superelevation and optional lateral shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LateralProfileRecord {
    /// Piecewise-polynomial superelevation (roll angle) entries, keyed by
    /// road-global `s`.
    pub superelevation: Vec<PolynomialEntryS>,
    /// Lateral shape entries, grouped by station.
    pub shape: Vec<ShapeEntry>,
}

/// A single lane's width entries, height offset, and attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaneRecord {
    /// The lane's signed id within its section (never 0).
    pub id: i32,
    /// Piecewise-polynomial width entries, keyed by lane-section-local
    /// `s_offset`.
    pub width: Vec<PolynomialEntrySOffset>,
    /// Inner (s_offset = 0 side) height offset entries.
    pub inner_height_offset: Vec<PolynomialEntrySOffset>,
    /// Outer height offset entries.
    pub outer_height_offset: Vec<PolynomialEntrySOffset>,
    /// Whether this lane is flattened (no superelevation applied).
    pub level: bool,
    /// Free-form attributes carried through to the output contract.
    pub attributes: Vec<(String, String)>,
}

/// A single lane section: a contiguous `s`-range with a fixed lane count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaneSectionRecord {
    /// This section's start position along the road's reference line.
    pub s: f64,
    /// Left-side lanes (positive id), in any order.
    pub left: Vec<LaneRecord>,
    /// The center lane's records, if any attributes are carried (the
    /// center lane itself, id 0, carries no width).
    pub center: Vec<LaneRecord>,
    /// Right-side lanes (negative id), in any order.
    pub right: Vec<LaneRecord>,
}

/// The road's lane topology: lane offset plus its lane sections.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RoadLanesRecord {
    /// Piecewise-polynomial lane offset entries, keyed by road-global `s`.
    pub lane_offset: Vec<PolynomialEntryS>,
    /// Lane sections, in any order (the builder sorts them).
    pub lane_section: Vec<LaneSectionRecord>,
}

/// A full road record as handed in by the OpenDRIVE reader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadRecord {
    /// The road's identifier.
    pub id: String,
    /// The road's total length, as stated by the input (checked against
    /// the plan view's own summed length by `is_processable`).
    pub length: f64,
    /// The reference-line geometry.
    pub plan_view: PlanViewRecord,
    /// The elevation profile.
    pub elevation_profile: ElevationProfileRecord,
    /// The lateral profile (superelevation, shape).
    pub lateral_profile: LateralProfileRecord,
    /// Lane offset and lane sections.
    pub lanes: RoadLanesRecord,
}
