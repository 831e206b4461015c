//! The road-space model: roads, lane sections, lanes, their identifiers
//! and attributes, plus the `builder` module that translates OpenDRIVE
//! records ([`roadgeom_model`]) into it.
//!
//! Everything here is immutable once built: a [`Road`] is constructed in
//! a single pass and then shared read-only, via `Arc`, among every
//! sectioned view derived from it.

#![warn(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

/// non-fatal-repair-aware translation from OpenDRIVE records to a `Road`
pub mod builder;
mod attributes;
mod config;
mod errors;
mod identifiers;
mod lane;
mod lane_section;
mod road;

pub use attributes::{AttributeList, AttributeValue};
pub use config::BuilderConfig;
pub use errors::{Error, Result};
pub use identifiers::{LaneIdentifier, LaneSectionIdentifier};
pub use lane::Lane;
pub use lane_section::LaneSection;
pub use road::Road;
