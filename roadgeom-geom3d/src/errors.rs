use thiserror::Error as ThisError;

/// Errors raised while constructing or sampling 3D geometry.
#[derive(Debug, ThisError, Clone, PartialEq)]
pub enum Error {
    /// A curve or surface was queried outside its own domain.
    #[error("s = {s} is outside the curve-relative domain")]
    OutOfDomain {
        /// The offending curve parameter.
        s: f64,
    },

    /// A ring was built from fewer than three distinct points after
    /// fuzzy-duplicate removal.
    ///
    /// ```
    /// use roadgeom_geom3d::{Error, LinearRing3D};
    /// use roadgeom_base::vector3d;
    ///
    /// let points = vec![vector3d(0.0, 0.0, 0.0), vector3d(0.0, 0.0, 0.0)];
    /// let err = LinearRing3D::try_new(points, 1e-7).unwrap_err();
    /// assert_eq!(err, Error::DegenerateRing);
    /// ```
    #[error("fewer than three distinct points remain after deduplication")]
    DegenerateRing,

    /// A sub-range passed to a sectioning constructor is not contained in
    /// the source's own domain.
    #[error("sub-range is not contained in the source surface's s-domain")]
    SubRangeNotContained,

    /// The two boundary point lists passed to a strip builder have
    /// different lengths.
    #[error("left and right boundary samples have different lengths: {left} vs {right}")]
    MismatchedBoundaryLengths {
        /// Number of samples on the left boundary.
        left: usize,
        /// Number of samples on the right boundary.
        right: usize,
    },

    /// An underlying univariate function failed while being evaluated as
    /// part of a surface or curve.
    #[error(transparent)]
    Function(#[from] roadgeom_function::Error),
}

/// Convenience alias for this crate's fallible operations.
pub type Result<T> = std::result::Result<T, Error>;
