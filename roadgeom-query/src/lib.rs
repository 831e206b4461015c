//! Road-space queries: lane curves, lane surfaces, and lateral filler
//! surfaces derived from a built [`roadgeom_space::Road`].
//!
//! Every function here is a pure read of the road-space model; none of
//! them mutate it, so independent lane queries could be parallelised by a
//! caller without changing the result.

#![warn(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

mod api;
mod boundary;
mod errors;
mod filler;
mod lane_geometry;
mod lane_surface;

pub use api::{
    get_all_curves_on_lanes, get_all_filler_surfaces, get_all_lanes, get_all_left_lane_boundaries,
    get_all_right_lane_boundaries,
};
pub use boundary::{left_lane_boundary, right_lane_boundary};
pub use errors::{Error, Result};
pub use lane_geometry::{curve_on_lane, height_offset_function, lateral_offset_function};
pub use lane_surface::lane_surface;
