use crate::errors::{Error, Result};
use roadgeom_base::{near, Vector3D};

/// A closed polyline boundary: an ordered list of distinct vertices with no
/// two adjacent ones (including the wraparound pair) fuzzy-equal.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRing3D {
    points: Vec<Vector3D>,
}

impl LinearRing3D {
    /// Builds a ring from `points`, first removing adjacent fuzzy-duplicate
    /// points (including the pair that wraps from the last point back to
    /// the first). Fails with [`Error::DegenerateRing`] if fewer than three
    /// distinct points remain.
    pub fn try_new(points: Vec<Vector3D>, tol: f64) -> Result<Self> {
        let deduped = dedup_adjacent_cyclic(points, tol);
        if deduped.len() < 3 {
            return Err(Error::DegenerateRing);
        }
        Ok(LinearRing3D { points: deduped })
    }

    /// The ring's vertices, in order.
    pub fn points(&self) -> &[Vector3D] {
        &self.points
    }
}

/// Removes points that are fuzzy-equal to their predecessor, then drops the
/// last point too if it is fuzzy-equal to the first (closing the loop
/// without a duplicate seam).
fn dedup_adjacent_cyclic(points: Vec<Vector3D>, tol: f64) -> Vec<Vector3D> {
    let mut deduped: Vec<Vector3D> = Vec::with_capacity(points.len());
    for point in points {
        if deduped.last().map(|last| near(last, &point, tol)).unwrap_or(false) {
            continue;
        }
        deduped.push(point);
    }
    while deduped.len() > 1 && near(&deduped[0], deduped.last().unwrap(), tol) {
        deduped.pop();
    }
    deduped
}

/// A single planar-ish face bounded by a [`LinearRing3D`], with no holes.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon3D {
    exterior: LinearRing3D,
}

impl Polygon3D {
    /// Builds a polygon from its exterior boundary.
    pub fn new(exterior: LinearRing3D) -> Self {
        Polygon3D { exterior }
    }

    /// The polygon's boundary.
    pub fn exterior(&self) -> &LinearRing3D {
        &self.exterior
    }
}
