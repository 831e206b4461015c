use crate::errors::{Error, Result};
use roadgeom_base::Range;

/// A single plan-view geometry segment, expressed in its own local
/// coordinate frame: start position and heading, plus a length along
/// which it is valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlanViewGeometry {
    /// A straight segment.
    Line {
        /// Arc length of the segment.
        length: f64,
    },
    /// A constant-curvature arc. Positive curvature turns left.
    Arc {
        /// Arc length of the segment.
        length: f64,
        /// Signed curvature (1 / radius).
        curvature: f64,
    },
}

impl PlanViewGeometry {
    /// Arc length of this segment.
    pub fn length(&self) -> f64 {
        match self {
            PlanViewGeometry::Line { length } => *length,
            PlanViewGeometry::Arc { length, .. } => *length,
        }
    }

    /// Evaluates the local `(dx, dy, dheading)` offset from this segment's
    /// own start, at local arc length `local_s`.
    fn evaluate_local(&self, local_s: f64) -> (f64, f64, f64) {
        match self {
            PlanViewGeometry::Line { .. } => (local_s, 0.0, 0.0),
            PlanViewGeometry::Arc { curvature, .. } => {
                if curvature.abs() < f64::EPSILON {
                    (local_s, 0.0, 0.0)
                } else {
                    let radius = 1.0 / curvature;
                    let angle = local_s * curvature;
                    (radius * angle.sin(), radius * (1.0 - angle.cos()), angle)
                }
            }
        }
    }
}

/// A road's 2D reference line: a sequence of [`PlanViewGeometry`] segments,
/// each anchored at the pose left behind by the previous one, composed into
/// one continuous `s -> (x, y, heading)` map.
#[derive(Debug, Clone)]
pub struct ReferenceCurve2D {
    segments: Vec<(f64, PlanViewGeometry)>,
    total_length: f64,
}

impl ReferenceCurve2D {
    /// Builds a reference curve from geometry segments laid end to end
    /// starting at `s = 0`. Fails if `segments` is empty.
    pub fn new(segments: Vec<PlanViewGeometry>) -> Result<Self> {
        if segments.is_empty() {
            return Err(Error::DegenerateRing);
        }
        let mut starts = Vec::with_capacity(segments.len());
        let mut cursor = 0.0;
        for segment in &segments {
            starts.push((cursor, *segment));
            cursor += segment.length();
        }
        Ok(ReferenceCurve2D { segments: starts, total_length: cursor })
    }

    /// The curve's total arc length.
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// The curve's `s` domain, `[0, total_length]`.
    pub fn domain(&self) -> Range {
        Range::closed(0.0, self.total_length)
    }

    /// Evaluates the reference curve at `s`, returning `(x, y, heading)` in
    /// the road's own 2D frame.
    pub fn evaluate(&self, s: f64) -> Result<(f64, f64, f64)> {
        if !self.domain().contains_fuzzy(s, 1.0e-9) {
            return Err(Error::OutOfDomain { s });
        }
        let s = s.clamp(0.0, self.total_length);
        let index = self
            .segments
            .partition_point(|(start, _)| *start <= s)
            .saturating_sub(1);

        let mut x = 0.0;
        let mut y = 0.0;
        let mut heading = 0.0;
        for (start, segment) in &self.segments[..index] {
            let (dx, dy, dheading) = segment.evaluate_local(segment.length());
            let (rx, ry) = rotate(dx, dy, heading);
            x += rx;
            y += ry;
            heading += dheading;
            let _ = start;
        }
        let (start, segment) = &self.segments[index];
        let (dx, dy, dheading) = segment.evaluate_local(s - start);
        let (rx, ry) = rotate(dx, dy, heading);
        Ok((x + rx, y + ry, heading + dheading))
    }
}

fn rotate(dx: f64, dy: f64, heading: f64) -> (f64, f64) {
    let (sin, cos) = heading.sin_cos();
    (dx * cos - dy * sin, dx * sin + dy * cos)
}
