use thiserror::Error as ThisError;

/// Errors raised while deriving lane curves, lane surfaces, or filler
/// surfaces from a road-space model.
#[derive(Debug, ThisError)]
pub enum Error {
    /// An underlying road-space lookup or construction failed.
    #[error(transparent)]
    Space(#[from] roadgeom_space::Error),

    /// An underlying 3D geometry operation failed.
    #[error(transparent)]
    Geometry(#[from] roadgeom_geom3d::Error),

    /// An underlying univariate function evaluation failed.
    #[error(transparent)]
    Function(#[from] roadgeom_function::Error),
}

/// Convenience alias for this crate's fallible operations.
pub type Result<T> = std::result::Result<T, Error>;
