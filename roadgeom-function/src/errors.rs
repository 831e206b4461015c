use thiserror::Error;

/// Error handler for [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while building or evaluating univariate functions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// `value`/`slope` was called outside the function's domain, even
    /// after fuzzy extension by the caller's tolerance.
    /// # Examples
    /// ```
    /// use roadgeom_function::{Error, LinearFunction, UnivariateFunction};
    /// use roadgeom_base::Range;
    /// let f = LinearFunction::new(1.0, 0.0, Range::closed_open(0.0, 10.0));
    /// assert_eq!(f.value(20.0), Err(Error::OutOfDomain { x: 20.0 }));
    /// ```
    #[error("x = {x} is outside the function's domain")]
    OutOfDomain {
        /// the rejected input
        x: f64,
    },
    /// A `ConcatenationContainer` could not be built because a member
    /// function's domain is unbounded on the side that must tile against
    /// its neighbor.
    #[error("member {index} has an unbounded domain on the side that must tile against its neighbor")]
    UnboundedMemberDomain {
        /// index of the offending member
        index: usize,
    },
    /// The members supplied to a `ConcatenationContainer` do not tile
    /// their domain without gaps, or their starts are not strictly
    /// ascending.
    #[error("members do not tile a contiguous domain: {reason}")]
    NonContiguousMembers {
        /// human-readable explanation
        reason: String,
    },
    /// A `SectionedUnivariateFunction`'s requested sub-range is not
    /// contained in its source's domain.
    #[error("sub-range is not contained in the source function's domain")]
    SubRangeNotContained,
    /// `ConcatenationContainer` is empty; there is no member to select.
    #[error("concatenation container has no members")]
    EmptyContainer,
}
