use crate::errors::{Error, Result};
use crate::lane::Lane;
use std::collections::BTreeMap;

/// A contiguous `s`-range of a road over which the number of lanes is
/// fixed: an id-to-[`Lane`] map plus the section's own start position.
///
/// Invariants, checked at construction: the lane map is non-empty, every
/// key equals the contained lane's own id, lane id 0 (the reference lane)
/// is absent, and the ids form an unbroken integer range on each side of 0
/// (e.g. `{-2, -1, 1, 2, 3}`, never `{-2, 1, 3}`).
#[derive(Debug, Clone)]
pub struct LaneSection {
    id: usize,
    curve_position_start: f64,
    lanes: BTreeMap<i32, Lane>,
}

impl LaneSection {
    /// Builds a lane section from its index, start position, and lanes.
    pub fn new(id: usize, curve_position_start: f64, lanes: Vec<Lane>) -> Result<Self> {
        if lanes.is_empty() {
            return Err(Error::IllegalState { reason: "lane section has no lanes".into() });
        }
        let mut map = BTreeMap::new();
        for lane in lanes {
            if lane.id() == 0 {
                return Err(Error::IllegalState {
                    reason: "lane section may not contain the reference lane (id 0)".into(),
                });
            }
            if map.insert(lane.id(), lane).is_some() {
                return Err(Error::IllegalState { reason: "duplicate lane id in lane section".into() });
            }
        }
        check_contiguous(map.keys().copied().filter(|id| *id > 0))?;
        check_contiguous(map.keys().copied().filter(|id| *id < 0).map(|id| -id))?;
        Ok(LaneSection { id, curve_position_start, lanes: map })
    }

    /// This section's index within its road.
    pub fn id(&self) -> usize {
        self.id
    }

    /// This section's start position along the road's reference line.
    pub fn curve_position_start(&self) -> f64 {
        self.curve_position_start
    }

    /// The section's lanes, keyed by signed id.
    pub fn lanes(&self) -> &BTreeMap<i32, Lane> {
        &self.lanes
    }

    /// Looks up a lane by id.
    pub fn lane(&self, id: i32) -> Result<&Lane> {
        self.lanes.get(&id).ok_or_else(|| Error::NotFound { what: format!("lane {id}") })
    }
}

fn check_contiguous(ids: impl Iterator<Item = i32>) -> Result<()> {
    let mut sorted: Vec<i32> = ids.collect();
    sorted.sort_unstable();
    for window in sorted.windows(2) {
        if window[1] != window[0] + 1 {
            return Err(Error::IllegalState { reason: "lane ids are not contiguous".into() });
        }
    }
    if let Some(&first) = sorted.first() {
        if first != 1 {
            return Err(Error::IllegalState {
                reason: "lane ids on one side must start at 1 (or -1)".into(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::AttributeList;
    use roadgeom_function::LinearFunction;
    use std::sync::Arc;

    fn lane(id: i32) -> Lane {
        let constant = Arc::new(LinearFunction::constant(1.0));
        Lane::new(id, constant.clone(), constant.clone(), constant, false, AttributeList::new())
    }

    #[test]
    fn empty_lane_section_is_rejected() {
        assert!(LaneSection::new(0, 0.0, vec![]).is_err());
    }

    #[test]
    fn reference_lane_is_rejected() {
        assert!(LaneSection::new(0, 0.0, vec![lane(0)]).is_err());
    }

    #[test]
    fn contiguous_ids_on_both_sides_are_accepted() {
        let section = LaneSection::new(0, 0.0, vec![lane(1), lane(2), lane(-1)]).unwrap();
        assert_eq!(section.lanes().len(), 3);
    }

    #[test]
    fn gap_in_ids_is_rejected() {
        assert!(LaneSection::new(0, 0.0, vec![lane(1), lane(3)]).is_err());
    }

    #[test]
    fn ids_not_starting_at_one_are_rejected() {
        assert!(LaneSection::new(0, 0.0, vec![lane(2), lane(3)]).is_err());
    }
}
