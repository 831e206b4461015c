//! 3D geometry kit: curve-relative surfaces built from a road's reference
//! line, elevation and superelevation profiles, plus the linear-ring /
//! composite-surface boundary representation used to hand lane and filler
//! geometry off to a downstream serializer.

#![warn(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

mod composite;
mod curve;
mod curve_on_surface;
mod errors;
mod plan_view;
mod primitives;
mod road_surface;
mod sectioned_surface;
mod surface;

pub use composite::CompositeSurface3D;
pub use curve::Curve3D;
pub use curve_on_surface::CurveOnParametricSurface3D;
pub use errors::{Error, Result};
pub use plan_view::{PlanViewGeometry, ReferenceCurve2D};
pub use primitives::{Cuboid3D, Cylinder3D, ParametricSweep3D};
pub use road_surface::RoadSurface3D;
pub use sectioned_surface::SectionedCurveRelativeParametricSurface3D;
pub use surface::Surface3D;

mod ring;
pub use ring::{LinearRing3D, Polygon3D};
