/// Identifies a single lane section within a road.
#[derive(Debug, Clone)]
pub struct LaneSectionIdentifier {
    /// The section's index within its road, `0..lane_sections.len()`.
    pub lane_section_id: usize,
    /// The section's start position along the road's reference line.
    pub lane_section_curve_relative_start: f64,
    /// The owning road's id.
    pub roadspace_identifier: String,
}

impl LaneSectionIdentifier {
    /// Builds an identifier for lane section `lane_section_id`, starting at
    /// `lane_section_curve_relative_start`, of road `roadspace_identifier`.
    pub fn new(
        roadspace_identifier: impl Into<String>,
        lane_section_id: usize,
        lane_section_curve_relative_start: f64,
    ) -> Self {
        LaneSectionIdentifier {
            lane_section_id,
            lane_section_curve_relative_start,
            roadspace_identifier: roadspace_identifier.into(),
        }
    }
}

impl std::hash::Hash for LaneSectionIdentifier {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.lane_section_id.hash(state);
        self.roadspace_identifier.hash(state);
    }
}

impl PartialEq for LaneSectionIdentifier {
    fn eq(&self, other: &Self) -> bool {
        self.lane_section_id == other.lane_section_id && self.roadspace_identifier == other.roadspace_identifier
    }
}

impl Eq for LaneSectionIdentifier {}

/// Identifies a single lane within a lane section.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LaneIdentifier {
    /// The lane's signed id within its section (never 0).
    pub lane_id: i32,
    /// The owning lane section's identifier.
    pub lane_section_identifier: LaneSectionIdentifier,
}

impl LaneIdentifier {
    /// Builds an identifier for lane `lane_id` within `lane_section_identifier`.
    pub fn new(lane_section_identifier: LaneSectionIdentifier, lane_id: i32) -> Self {
        LaneIdentifier { lane_id, lane_section_identifier }
    }
}
