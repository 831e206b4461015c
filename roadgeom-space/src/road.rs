use crate::errors::{Error, Result};
use crate::lane_section::LaneSection;
use roadgeom_base::Range;
use roadgeom_function::UnivariateFunction;
use roadgeom_geom3d::Surface3D;
use std::ops::Bound;
use std::sync::Arc;

/// A fully-built road: its surfaces, lane offset function, and lane
/// sections.
///
/// Invariants, checked at construction: `surface` and `surface_without_torsion`
/// share the same, bounded `s_domain`; `lane_sections` is non-empty, sorted
/// by `curve_position_start`, and its ids form `0..N` without gaps.
#[derive(Clone)]
pub struct Road {
    id: String,
    surface: Arc<dyn Surface3D + Send + Sync>,
    surface_without_torsion: Arc<dyn Surface3D + Send + Sync>,
    lane_offset: Arc<dyn UnivariateFunction + Send + Sync>,
    lane_sections: Vec<LaneSection>,
}

impl std::fmt::Debug for Road {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Road")
            .field("id", &self.id)
            .field("lane_sections", &self.lane_sections.len())
            .finish()
    }
}

impl Road {
    /// Builds a road from its id, surfaces, lane offset function, and lane
    /// sections.
    pub fn new(
        id: impl Into<String>,
        surface: Arc<dyn Surface3D + Send + Sync>,
        surface_without_torsion: Arc<dyn Surface3D + Send + Sync>,
        lane_offset: Arc<dyn UnivariateFunction + Send + Sync>,
        lane_sections: Vec<LaneSection>,
    ) -> Result<Self> {
        if surface.s_domain() != surface_without_torsion.s_domain() {
            return Err(Error::IllegalState {
                reason: "surface and surface_without_torsion must share an s_domain".into(),
            });
        }
        if surface.s_domain().upper_value().is_none() {
            return Err(Error::IllegalState { reason: "road surface s_domain must be bounded".into() });
        }
        if lane_sections.is_empty() {
            return Err(Error::IllegalState { reason: "road has no lane sections".into() });
        }
        let mut sorted = lane_sections;
        sorted.sort_by(|a, b| a.curve_position_start().partial_cmp(&b.curve_position_start()).unwrap());
        for (index, section) in sorted.iter().enumerate() {
            if section.id() != index {
                return Err(Error::IllegalState {
                    reason: "lane section ids must form 0..N without gaps, in start order".into(),
                });
            }
        }
        Ok(Road { id: id.into(), surface, surface_without_torsion, lane_offset, lane_sections: sorted })
    }

    /// This road's id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The road's full-`s` surface, with superelevation torsion applied.
    pub fn surface(&self) -> &Arc<dyn Surface3D + Send + Sync> {
        &self.surface
    }

    /// The road's full-`s` surface, ignoring superelevation torsion.
    pub fn surface_without_torsion(&self) -> &Arc<dyn Surface3D + Send + Sync> {
        &self.surface_without_torsion
    }

    /// The road's lane offset function, over its full `s` domain.
    pub fn lane_offset(&self) -> &Arc<dyn UnivariateFunction + Send + Sync> {
        &self.lane_offset
    }

    /// This road's lane sections, sorted by start position.
    pub fn lane_sections(&self) -> &[LaneSection] {
        &self.lane_sections
    }

    /// Looks up a lane section by its id.
    pub fn lane_section(&self, id: usize) -> Result<&LaneSection> {
        self.lane_sections
            .get(id)
            .ok_or_else(|| Error::NotFound { what: format!("lane section {id}") })
    }

    /// The curve-position domain of each lane section: closed ranges
    /// between adjacent starts, with the last section's range extending to
    /// the road surface's own `s` upper endpoint (preserving its open or
    /// closed-ness).
    pub fn lane_section_curve_position_domains(&self) -> Vec<Range> {
        let road_upper = self.surface.s_domain().upper();
        self.lane_sections
            .iter()
            .enumerate()
            .map(|(index, section)| {
                let lower = Bound::Included(section.curve_position_start());
                let upper = match self.lane_sections.get(index + 1) {
                    Some(next) => Bound::Included(next.curve_position_start()),
                    None => road_upper,
                };
                Range::new(lower, upper)
            })
            .collect()
    }

    /// Finds the lane section containing `s`, breaking ties on a shared
    /// boundary (within `tol`) in favor of the lower (earlier) section id.
    pub fn lane_section_at(&self, s: f64, tol: f64) -> Result<&LaneSection> {
        let domains = self.lane_section_curve_position_domains();
        for (index, domain) in domains.iter().enumerate() {
            if domain.contains_fuzzy(s, tol) {
                return Ok(&self.lane_sections[index]);
            }
        }
        Err(Error::NotFound { what: format!("lane section containing s = {s}") })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::AttributeList;
    use crate::lane::Lane;
    use roadgeom_function::LinearFunction;
    use roadgeom_geom3d::{PlanViewGeometry, ReferenceCurve2D, RoadSurface3D};

    fn flat_surface() -> Arc<dyn Surface3D + Send + Sync> {
        let reference_curve =
            Arc::new(ReferenceCurve2D::new(vec![PlanViewGeometry::Line { length: 100.0 }]).unwrap());
        let zero: Arc<dyn UnivariateFunction + Send + Sync> = Arc::new(LinearFunction::constant(0.0));
        Arc::new(RoadSurface3D::new(reference_curve, zero.clone(), zero, Range::closed(-10.0, 10.0)))
    }

    fn one_lane_section() -> LaneSection {
        let constant = Arc::new(LinearFunction::constant(1.0));
        let lane = Lane::new(1, constant.clone(), constant.clone(), constant, false, AttributeList::new());
        LaneSection::new(0, 0.0, vec![lane]).unwrap()
    }

    #[test]
    fn mismatched_surface_domains_are_rejected() {
        let surface = flat_surface();
        let other_reference =
            Arc::new(ReferenceCurve2D::new(vec![PlanViewGeometry::Line { length: 50.0 }]).unwrap());
        let zero: Arc<dyn UnivariateFunction + Send + Sync> = Arc::new(LinearFunction::constant(0.0));
        let without_torsion: Arc<dyn Surface3D + Send + Sync> =
            Arc::new(RoadSurface3D::new(other_reference, zero.clone(), zero, Range::closed(-10.0, 10.0)));
        let lane_offset: Arc<dyn UnivariateFunction + Send + Sync> = Arc::new(LinearFunction::constant(0.0));
        let result = Road::new("r1", surface, without_torsion, lane_offset, vec![one_lane_section()]);
        assert!(result.is_err());
    }

    #[test]
    fn single_section_domain_spans_the_whole_road() {
        let lane_offset: Arc<dyn UnivariateFunction + Send + Sync> = Arc::new(LinearFunction::constant(0.0));
        let surface = flat_surface();
        let road =
            Road::new("r1", surface.clone(), surface, lane_offset, vec![one_lane_section()]).unwrap();
        let domains = road.lane_section_curve_position_domains();
        assert_eq!(domains.len(), 1);
        assert_eq!(domains[0].lower_value(), Some(0.0));
        assert_eq!(domains[0].upper_value(), Some(100.0));
    }
}
