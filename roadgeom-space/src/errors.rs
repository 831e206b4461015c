use thiserror::Error as ThisError;

/// Errors raised while constructing or querying the road-space model.
#[derive(Debug, ThisError, Clone, PartialEq)]
pub enum Error {
    /// An identifier did not resolve to anything in the road-space model.
    ///
    /// ```
    /// use roadgeom_space::Error;
    /// let err = Error::NotFound { what: "lane section 3".into() };
    /// assert!(err.to_string().contains("lane section 3"));
    /// ```
    #[error("not found: {what}")]
    NotFound {
        /// A human-readable description of what was being looked up.
        what: String,
    },

    /// A constructor invariant was violated.
    #[error("illegal road-space state: {reason}")]
    IllegalState {
        /// Why the state is illegal.
        reason: String,
    },

    /// An underlying function evaluation failed.
    #[error(transparent)]
    Function(#[from] roadgeom_function::Error),

    /// An underlying 3D geometry operation failed.
    #[error(transparent)]
    Geometry(#[from] roadgeom_geom3d::Error),
}

/// Convenience alias for this crate's fallible operations.
pub type Result<T> = std::result::Result<T, Error>;
