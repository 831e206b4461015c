//! # Overview
//! `roadgeom_base` collects the numeric primitives shared by every other
//! crate in this workspace: the fuzzy-equality discipline (§C1 in the
//! design docs), f64-specialised 3D vector/point/pose types, and the
//! bounded `Range` used throughout the function and geometry crates to
//! describe domains.

#![warn(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

/// fuzzy numeric comparison
pub mod tolerance;
/// f64-specialised 3D vector, point, and pose types
pub mod vector3d;
/// bounded, possibly-open-ended ranges over `f64`
pub mod range;

pub use range::Range;
pub use tolerance::{Tolerance, DEFAULT_TOLERANCE};
pub use vector3d::{near, vector3d, AffineSequence3D, Pose3D, Vector3D};
