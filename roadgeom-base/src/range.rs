use std::ops::Bound;

/// A one-dimensional range over `f64`, each endpoint independently open,
/// closed, or unbounded.
///
/// This is the `domain` every `UnivariateFunction` and curve-relative
/// surface in this workspace declares; it plays the role the teacher
/// crate's `(Bound<f64>, Bound<f64>) parameter_range()` return value plays
/// for `ParametricCurve`, made a first-class type since domains here are
/// also intersected, tiled, and restricted in their own right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    lower: Bound<f64>,
    upper: Bound<f64>,
}

impl Range {
    /// Builds a range from explicit bounds. Panics if `lower` is
    /// numerically greater than `upper` (both bounded and finite).
    pub fn new(lower: Bound<f64>, upper: Bound<f64>) -> Self {
        if let (Bound::Included(a) | Bound::Excluded(a), Bound::Included(b) | Bound::Excluded(b)) =
            (lower, upper)
        {
            assert!(a <= b, "range lower bound {a} is greater than upper bound {b}");
        }
        Range { lower, upper }
    }

    /// `[a, b)` — the half-open interval OpenDRIVE piecewise entries use.
    pub fn closed_open(a: f64, b: f64) -> Self { Range::new(Bound::Included(a), Bound::Excluded(b)) }

    /// `[a, b]`.
    pub fn closed(a: f64, b: f64) -> Self { Range::new(Bound::Included(a), Bound::Included(b)) }

    /// `(-inf, +inf)`.
    pub fn unbounded() -> Self { Range::new(Bound::Unbounded, Bound::Unbounded) }

    /// `[a, +inf)`.
    pub fn at_least(a: f64) -> Self { Range::new(Bound::Included(a), Bound::Unbounded) }

    /// `(-inf, b)`.
    pub fn below(b: f64) -> Self { Range::new(Bound::Unbounded, Bound::Excluded(b)) }

    /// The lower bound.
    pub fn lower(&self) -> Bound<f64> { self.lower }

    /// The upper bound.
    pub fn upper(&self) -> Bound<f64> { self.upper }

    /// The lower endpoint's numeric value, if bounded.
    pub fn lower_value(&self) -> Option<f64> {
        match self.lower {
            Bound::Included(v) | Bound::Excluded(v) => Some(v),
            Bound::Unbounded => None,
        }
    }

    /// The upper endpoint's numeric value, if bounded.
    pub fn upper_value(&self) -> Option<f64> {
        match self.upper {
            Bound::Included(v) | Bound::Excluded(v) => Some(v),
            Bound::Unbounded => None,
        }
    }

    /// `true` if the upper bound is `Bound::Unbounded`.
    pub fn unbounded_above(&self) -> bool { matches!(self.upper, Bound::Unbounded) }

    /// `true` if the lower bound is `Bound::Unbounded`.
    pub fn unbounded_below(&self) -> bool { matches!(self.lower, Bound::Unbounded) }

    /// `upper - lower`, or `f64::INFINITY` if either side is unbounded.
    pub fn width(&self) -> f64 {
        match (self.lower_value(), self.upper_value()) {
            (Some(a), Some(b)) => b - a,
            _ => f64::INFINITY,
        }
    }

    /// `true` if `x` lies within the range (honoring open/closed endpoints
    /// exactly, no tolerance).
    pub fn contains(&self, x: f64) -> bool {
        let lower_ok = match self.lower {
            Bound::Included(a) => x >= a,
            Bound::Excluded(a) => x > a,
            Bound::Unbounded => true,
        };
        let upper_ok = match self.upper {
            Bound::Included(b) => x <= b,
            Bound::Excluded(b) => x < b,
            Bound::Unbounded => true,
        };
        lower_ok && upper_ok
    }

    /// `true` if `x` lies within `tol` of `self`: either strictly inside,
    /// or within `tol` of a bounded endpoint.
    pub fn contains_fuzzy(&self, x: f64, tol: f64) -> bool {
        if self.contains(x) {
            return true;
        }
        let near_lower = self.lower_value().is_some_and(|a| (x - a).abs() <= tol);
        let near_upper = self.upper_value().is_some_and(|b| (x - b).abs() <= tol);
        near_lower || near_upper
    }

    /// `true` if `x` is within `tol` of this range's lower bound.
    pub fn near_lower(&self, x: f64, tol: f64) -> bool {
        self.lower_value().is_some_and(|a| (x - a).abs() <= tol)
    }

    /// `true` if `x` is within `tol` of this range's upper bound.
    pub fn near_upper(&self, x: f64, tol: f64) -> bool {
        self.upper_value().is_some_and(|b| (x - b).abs() <= tol)
    }

    /// `true` if every point of `other` is also a point of `self`.
    pub fn contains_range(&self, other: &Range) -> bool {
        let lower_ok = match (self.lower_value(), other.lower_value()) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(a), Some(b)) => a < b || (a == b && (is_included(self.lower) || !is_included(other.lower))),
        };
        let upper_ok = match (self.upper_value(), other.upper_value()) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(a), Some(b)) => a > b || (a == b && (is_included(self.upper) || !is_included(other.upper))),
        };
        lower_ok && upper_ok
    }

    /// The intersection of `self` and `other`, or `None` if they do not
    /// overlap (an empty result is represented as `None`, not as a
    /// zero-width range, since a zero-width closed range is still valid
    /// and distinct from "no overlap").
    pub fn intersect(&self, other: &Range) -> Option<Range> {
        let lower = tighter_lower(self.lower, other.lower);
        let upper = tighter_upper(self.upper, other.upper);
        match (lower_value(lower), upper_value(upper)) {
            (Some(a), Some(b)) if a > b => None,
            (Some(a), Some(b)) if a == b && !(is_included(lower) && is_included(upper)) => None,
            _ => Some(Range { lower, upper }),
        }
    }

    /// Shifts both endpoints by `delta`.
    pub fn shifted(&self, delta: f64) -> Range {
        Range { lower: shift_bound(self.lower, delta), upper: shift_bound(self.upper, delta) }
    }

    /// A copy of this range starting at `0` with the same width, i.e. the
    /// domain a `SectionedUnivariateFunction` exposes to its callers.
    pub fn zeroed(&self) -> Range {
        match self.lower_value() {
            Some(a) => self.shifted(-a),
            None => *self,
        }
    }
}

fn lower_value(b: Bound<f64>) -> Option<f64> {
    match b {
        Bound::Included(v) | Bound::Excluded(v) => Some(v),
        Bound::Unbounded => None,
    }
}

fn upper_value(b: Bound<f64>) -> Option<f64> { lower_value(b) }

fn is_included(b: Bound<f64>) -> bool { matches!(b, Bound::Included(_)) }

fn tighter_lower(a: Bound<f64>, b: Bound<f64>) -> Bound<f64> {
    match (lower_value(a), lower_value(b)) {
        (None, _) => b,
        (_, None) => a,
        (Some(x), Some(y)) if x > y => a,
        (Some(x), Some(y)) if y > x => b,
        _ => {
            if is_included(a) {
                b
            } else {
                a
            }
        }
    }
}

fn tighter_upper(a: Bound<f64>, b: Bound<f64>) -> Bound<f64> {
    match (upper_value(a), upper_value(b)) {
        (None, _) => b,
        (_, None) => a,
        (Some(x), Some(y)) if x < y => a,
        (Some(x), Some(y)) if y < x => b,
        _ => {
            if is_included(a) {
                b
            } else {
                a
            }
        }
    }
}

fn shift_bound(b: Bound<f64>, delta: f64) -> Bound<f64> {
    match b {
        Bound::Included(v) => Bound::Included(v + delta),
        Bound::Excluded(v) => Bound::Excluded(v + delta),
        Bound::Unbounded => Bound::Unbounded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_open_contains_lower_not_upper() {
        let r = Range::closed_open(0.0, 10.0);
        assert!(r.contains(0.0));
        assert!(!r.contains(10.0));
        assert!(r.contains(9.999));
    }

    #[test]
    fn fuzzy_contains_extends_past_closed_open_upper() {
        let r = Range::closed_open(0.0, 10.0);
        assert!(!r.contains(10.0));
        assert!(r.contains_fuzzy(10.0 + 1e-9, 1e-7));
        assert!(!r.contains_fuzzy(10.1, 1e-7));
    }

    #[test]
    fn intersect_bounded_ranges() {
        let a = Range::closed(0.0, 10.0);
        let b = Range::closed(5.0, 15.0);
        let i = a.intersect(&b).unwrap();
        assert_eq!(i.lower_value(), Some(5.0));
        assert_eq!(i.upper_value(), Some(10.0));
    }

    #[test]
    fn intersect_disjoint_ranges_is_none() {
        let a = Range::closed(0.0, 1.0);
        let b = Range::closed(2.0, 3.0);
        assert!(a.intersect(&b).is_none());
    }

    #[test]
    fn intersect_with_unbounded_side() {
        let a = Range::at_least(0.0);
        let b = Range::closed(-5.0, 5.0);
        let i = a.intersect(&b).unwrap();
        assert_eq!(i.lower_value(), Some(0.0));
        assert_eq!(i.upper_value(), Some(5.0));
    }

    #[test]
    fn zeroed_shifts_bounded_range_to_start_at_zero() {
        let r = Range::closed(10.0, 20.0).zeroed();
        assert_eq!(r.lower_value(), Some(0.0));
        assert_eq!(r.upper_value(), Some(10.0));
    }

    #[test]
    fn contains_range_checks_both_endpoints() {
        let outer = Range::closed(0.0, 100.0);
        assert!(outer.contains_range(&Range::closed_open(10.0, 20.0)));
        assert!(!outer.contains_range(&Range::closed(-1.0, 20.0)));
        assert!(!outer.contains_range(&Range::closed(10.0, 200.0)));
        assert!(outer.contains_range(&outer));
    }

    #[test]
    fn width_of_unbounded_range_is_infinite() {
        assert_eq!(Range::unbounded().width(), f64::INFINITY);
        assert_eq!(Range::at_least(0.0).width(), f64::INFINITY);
    }
}
