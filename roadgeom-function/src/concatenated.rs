use crate::errors::{Error, Result};
use crate::function::UnivariateFunction;
use crate::leaf::{LinearFunction, PolynomialFunction};
use crate::report::{ReportMessage, WithReport};
use roadgeom_base::Range;
use std::ops::Bound;
use std::sync::Arc;

struct Member<F> {
    function: F,
    start: f64,
}

/// An ordered sequence of member functions tiled end-to-end starting at
/// each member's absolute `start`, with no gaps or overlaps.
///
/// Plays the role the teacher crate's `KnotVec` plays for a B-spline:
/// storage and member-selection logic, with evaluation left to the
/// function that owns it ([`ConcatenatedFunction`]).
pub struct ConcatenationContainer<F> {
    members: Vec<Member<F>>,
}

impl<F> std::fmt::Debug for ConcatenationContainer<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConcatenationContainer")
            .field("starts", &self.members.iter().map(|m| m.start).collect::<Vec<_>>())
            .finish()
    }
}

impl<F: UnivariateFunction> ConcatenationContainer<F> {
    /// Arranges `members` (function, absolute start) end-to-end. Fails if
    /// starts are not strictly ascending, or if any non-last member's
    /// domain is unbounded above (it must tile against the next start).
    pub fn new(members: Vec<(F, f64)>) -> Result<Self> {
        if members.is_empty() {
            return Err(Error::EmptyContainer);
        }
        for window in members.windows(2) {
            if window[1].1 <= window[0].1 {
                return Err(Error::NonContiguousMembers {
                    reason: format!("start {} does not strictly follow {}", window[1].1, window[0].1),
                });
            }
        }
        let n = members.len();
        for (i, (function, start)) in members.iter().enumerate() {
            if i + 1 == n {
                continue;
            }
            let upper = function.domain().upper_value();
            match upper {
                None => return Err(Error::UnboundedMemberDomain { index: i }),
                Some(width) => {
                    let expected_next_start = start + width;
                    let actual_next_start = members[i + 1].1;
                    if (expected_next_start - actual_next_start).abs() > 1e-9 {
                        return Err(Error::NonContiguousMembers {
                            reason: format!(
                                "member {i} covers up to {expected_next_start} but the next member starts at {actual_next_start}"
                            ),
                        });
                    }
                }
            }
        }
        Ok(ConcatenationContainer {
            members: members.into_iter().map(|(function, start)| Member { function, start }).collect(),
        })
    }

    /// The number of members.
    pub fn len(&self) -> usize { self.members.len() }

    /// `true` if there are no members (never constructible via [`Self::new`]).
    pub fn is_empty(&self) -> bool { self.members.is_empty() }

    /// The overall absolute domain: from the first member's lower bound to
    /// the last member's upper bound.
    pub fn domain(&self) -> Range {
        let first = &self.members[0];
        let last = self.members.last().unwrap();
        let lower = shift_bound(first.function.domain().lower(), first.start);
        let upper = shift_bound(last.function.domain().upper(), last.start);
        Range::new(lower, upper)
    }

    /// The member at `idx`.
    pub fn member(&self, idx: usize) -> &F { &self.members[idx].function }

    /// The member at `idx`'s absolute start.
    pub fn start(&self, idx: usize) -> f64 { self.members[idx].start }

    /// Translates the absolute `x` into member `idx`'s local coordinate.
    pub fn member_local_x(&self, idx: usize, x: f64) -> f64 { x - self.members[idx].start }

    /// Returns the unique member whose absolute domain contains `x`.
    pub fn strict_select_member(&self, x: f64) -> Result<usize> {
        if self.members.len() == 1 {
            let local = x - self.members[0].start;
            return if self.members[0].function.domain().contains(local) {
                Ok(0)
            } else {
                Err(Error::OutOfDomain { x })
            };
        }
        let idx = self.members.partition_point(|m| m.start <= x);
        if idx == 0 {
            return Err(Error::OutOfDomain { x });
        }
        let candidate = idx - 1;
        let local = x - self.members[candidate].start;
        if self.members[candidate].function.domain().contains(local) {
            Ok(candidate)
        } else {
            Err(Error::OutOfDomain { x })
        }
    }

    /// As [`Self::strict_select_member`], but if `x` is within `tol` of an
    /// internal boundary, picks whichever side's domain contains `x`
    /// (falling back to the left neighbor); if `x` is within `tol` of an
    /// outer domain endpoint, picks the boundary member.
    pub fn fuzzy_select_member(&self, x: f64, tol: f64) -> Result<usize> {
        if let Ok(idx) = self.strict_select_member(x) {
            return Ok(idx);
        }
        for i in 1..self.members.len() {
            let boundary = self.members[i].start;
            if (x - boundary).abs() <= tol {
                let local_right = x - self.members[i].start;
                if self.members[i].function.domain().contains_fuzzy(local_right, tol) {
                    return Ok(i);
                }
                return Ok(i - 1);
            }
        }
        let first = &self.members[0];
        if (x - first.start).abs() <= tol {
            return Ok(0);
        }
        let last_idx = self.members.len() - 1;
        let last = &self.members[last_idx];
        if let Some(upper) = last.function.domain().upper_value() {
            let abs_upper = last.start + upper;
            if (x - abs_upper).abs() <= tol {
                return Ok(last_idx);
            }
        }
        Err(Error::OutOfDomain { x })
    }
}

fn shift_bound(b: Bound<f64>, delta: f64) -> Bound<f64> {
    match b {
        Bound::Included(v) => Bound::Included(v + delta),
        Bound::Excluded(v) => Bound::Excluded(v + delta),
        Bound::Unbounded => Bound::Unbounded,
    }
}

/// A `UnivariateFunction` backed by a [`ConcatenationContainer`], with an
/// optional constant prefix covering `(-inf, starts[0])`.
///
/// The prefix exists because OpenDRIVE piecewise entries often begin at
/// `s > 0` (e.g. a road's first lane-width record may start at
/// `sOffset = 2`) while the reference line must still be defined at
/// `s = 0`; see [`Self::of_polynomial_functions`].
#[derive(Debug)]
pub struct ConcatenatedFunction {
    prefix: Option<LinearFunction>,
    container: ConcatenationContainer<Arc<dyn UnivariateFunction + Send + Sync>>,
}

impl ConcatenatedFunction {
    /// Wraps an already-built container with no prefix.
    pub fn from_container(container: ConcatenationContainer<Arc<dyn UnivariateFunction + Send + Sync>>) -> Self {
        ConcatenatedFunction { prefix: None, container }
    }

    fn container_lower(&self) -> f64 {
        self.container.start(0)
            + self.container.member(0).domain().lower_value().unwrap_or(f64::NEG_INFINITY)
    }

    /// Builds a concatenated function from ascending piecewise-polynomial
    /// entries (`starts[i]`, `coefficients[i]`). Consecutive entries that
    /// share a key (after this function's own defensive dedup pass) have
    /// their earlier occurrence dropped, with a [`ReportMessage`]
    /// recorded — matching invariant 10: building from raw,
    /// not-yet-deduped input yields the same function as building from a
    /// pre-sorted, pre-deduped sequence.
    ///
    /// If `prepend_constant_value` is `Some(v)`, a constant-`v` piece is
    /// prepended covering `(-inf, starts[0])`.
    pub fn of_polynomial_functions(
        starts: &[f64],
        coefficients: &[Vec<f64>],
        prepend_constant_value: Option<f64>,
    ) -> Result<WithReport<ConcatenatedFunction>> {
        if starts.len() != coefficients.len() {
            return Err(Error::NonContiguousMembers {
                reason: format!(
                    "{} starts but {} coefficient sets were supplied",
                    starts.len(),
                    coefficients.len()
                ),
            });
        }
        if starts.is_empty() {
            return Err(Error::EmptyContainer);
        }

        let mut messages = Vec::new();
        let mut deduped: Vec<(f64, &[f64])> = Vec::with_capacity(starts.len());
        for (&s, coeffs) in starts.iter().zip(coefficients.iter()) {
            match deduped.last() {
                Some(&(last_s, _)) if s < last_s => {
                    return Err(Error::NonContiguousMembers {
                        reason: format!("starts are not sorted: {s} follows {last_s}"),
                    });
                }
                Some(&(last_s, _)) if (s - last_s).abs() < 1e-12 => {
                    messages.push(ReportMessage::new(format!(
                        "dropping earlier entry at key {last_s} in favor of the later entry with the same key"
                    )));
                    deduped.pop();
                    deduped.push((s, coeffs));
                }
                _ => deduped.push((s, coeffs)),
            }
        }

        let n = deduped.len();
        let mut members: Vec<(Arc<dyn UnivariateFunction + Send + Sync>, f64)> = Vec::with_capacity(n);
        for (i, (start, coeffs)) in deduped.iter().enumerate() {
            let length = if i + 1 < n { deduped[i + 1].0 - start } else { f64::INFINITY };
            let function: Arc<dyn UnivariateFunction + Send + Sync> =
                Arc::new(PolynomialFunction::new(coeffs.to_vec(), length));
            members.push((function, *start));
        }

        let container = ConcatenationContainer::new(members)?;
        let prefix = prepend_constant_value
            .map(|v| LinearFunction::constant_over(v, Range::new(Bound::Unbounded, Bound::Excluded(deduped[0].0))));
        Ok(WithReport::new(ConcatenatedFunction { prefix, container }, messages))
    }

    /// Builds a concatenated function from linear pieces: each member is
    /// `slope[i] * x + intercept[i]` over `[0, length_i)`, where lengths
    /// are the successive differences of `starts` and the last member's
    /// length is unbounded. `slopes` defaults to all zeros if omitted.
    pub fn of_linear_functions(starts: &[f64], intercepts: &[f64], slopes: Option<&[f64]>) -> Result<Self> {
        if starts.len() != intercepts.len() || slopes.is_some_and(|s| s.len() != starts.len()) {
            return Err(Error::NonContiguousMembers {
                reason: "starts, intercepts, and slopes must have matching lengths".into(),
            });
        }
        if starts.is_empty() {
            return Err(Error::EmptyContainer);
        }
        let n = starts.len();
        let mut members: Vec<(Arc<dyn UnivariateFunction + Send + Sync>, f64)> = Vec::with_capacity(n);
        for i in 0..n {
            let length = if i + 1 < n { starts[i + 1] - starts[i] } else { f64::INFINITY };
            let domain = if length.is_infinite() { Range::at_least(0.0) } else { Range::closed_open(0.0, length) };
            let slope = slopes.map(|s| s[i]).unwrap_or(0.0);
            let function: Arc<dyn UnivariateFunction + Send + Sync> =
                Arc::new(LinearFunction::new(slope, intercepts[i], domain));
            members.push((function, starts[i]));
        }
        let container = ConcatenationContainer::new(members)?;
        Ok(ConcatenatedFunction { prefix: None, container })
    }
}

impl UnivariateFunction for ConcatenatedFunction {
    fn domain(&self) -> Range {
        let container_domain = self.container.domain();
        match &self.prefix {
            Some(_) => Range::new(Bound::Unbounded, container_domain.upper()),
            None => container_domain,
        }
    }

    fn value(&self, x: f64) -> Result<f64> {
        if let Some(p) = &self.prefix {
            if x < self.container_lower() {
                return p.value(x);
            }
        }
        let idx = self.container.strict_select_member(x)?;
        let local = self.container.member_local_x(idx, x);
        self.container.member(idx).value(local)
    }

    fn slope(&self, x: f64) -> Result<f64> {
        if let Some(p) = &self.prefix {
            if x < self.container_lower() {
                return p.slope(x);
            }
        }
        let idx = self.container.strict_select_member(x)?;
        let local = self.container.member_local_x(idx, x);
        self.container.member(idx).slope(local)
    }

    fn value_fuzzy(&self, x: f64, tol: f64) -> Result<f64> {
        if let Some(p) = &self.prefix {
            if x < self.container_lower() {
                return p.value(x);
            }
        }
        let idx = self.container.fuzzy_select_member(x, tol)?;
        let local = self.container.member_local_x(idx, x);
        self.container.member(idx).value_fuzzy(local, tol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_piece() -> ConcatenatedFunction {
        ConcatenatedFunction::of_polynomial_functions(&[0.0, 10.0], &[vec![3.5], vec![3.0]], Some(0.0))
            .unwrap()
            .value
    }

    #[test]
    fn prefix_region_is_zero() {
        let f = two_piece();
        assert_eq!(f.value(-5.0).unwrap(), 0.0);
        assert_eq!(f.value(-0.0001).unwrap(), 0.0);
    }

    #[test]
    fn each_piece_is_constant_on_its_range() {
        let f = two_piece();
        assert_eq!(f.value(0.0).unwrap(), 3.5);
        assert_eq!(f.value(9.999).unwrap(), 3.5);
        assert_eq!(f.value(10.0).unwrap(), 3.0);
        assert_eq!(f.value(1000.0).unwrap(), 3.0);
    }

    #[test]
    fn duplicate_start_drops_earlier_entry_and_reports() {
        let result = ConcatenatedFunction::of_polynomial_functions(
            &[0.0, 10.0, 10.0, 20.0],
            &[vec![1.0], vec![2.0], vec![3.0], vec![4.0]],
            Some(0.0),
        )
        .unwrap();
        assert_eq!(result.messages.len(), 1);
        // the surviving entry at key 10 is the later one (coefficient 3.0)
        assert_eq!(result.value.value(10.0).unwrap(), 3.0);
        assert_eq!(result.value.value(19.999).unwrap(), 3.0);
        assert_eq!(result.value.value(20.0).unwrap(), 4.0);
    }

    #[test]
    fn unsorted_starts_is_an_error() {
        let result =
            ConcatenatedFunction::of_polynomial_functions(&[10.0, 0.0], &[vec![1.0], vec![2.0]], None);
        assert!(result.is_err());
    }

    #[test]
    fn fuzzy_selection_is_stable_near_a_boundary() {
        let f = two_piece();
        for delta in [-1e-8, -1e-9, 0.0, 1e-9, 1e-8] {
            let v = f.value_fuzzy(10.0 + delta, 1e-7).unwrap();
            assert!(v == 3.0 || v == 3.5, "unexpected value {v} at delta {delta}");
        }
    }

    #[test]
    fn of_linear_functions_defaults_slopes_to_zero() {
        let f = ConcatenatedFunction::of_linear_functions(&[0.0, 5.0], &[1.0, 2.0], None).unwrap();
        assert_eq!(f.value(0.0).unwrap(), 1.0);
        assert_eq!(f.value(5.0).unwrap(), 2.0);
    }

    #[test]
    fn without_prefix_out_of_domain_below_first_start_fails() {
        let f = ConcatenatedFunction::of_polynomial_functions(&[0.0, 10.0], &[vec![1.0], vec![2.0]], None)
            .unwrap()
            .value;
        assert!(f.value(-1.0).is_err());
    }
}
