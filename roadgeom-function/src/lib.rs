//! # Overview
//! `roadgeom_function` defines the library of univariate function
//! combinators (§C2/C3) used throughout this workspace to describe a
//! road's reference curve, superelevation, lateral shape, lane offset,
//! and per-lane width: [`LinearFunction`] and [`PolynomialFunction`] as
//! leaves, [`ConcatenatedFunction`] and [`SectionedUnivariateFunction`]
//! and [`StackedFunction`] as combinators over the [`UnivariateFunction`]
//! trait.

#![warn(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

/// errors returned by this crate
pub mod errors;
/// the result-with-message idiom threading non-fatal repair diagnostics
pub mod report;
/// the `UnivariateFunction` trait and the domain contract it declares
pub mod function;
/// `LinearFunction` and `PolynomialFunction`, the leaf functions
pub mod leaf;
/// `ConcatenationContainer` and `ConcatenatedFunction`
pub mod concatenated;
/// `SectionedUnivariateFunction`
pub mod sectioned;
/// `StackedFunction`
pub mod stacked;

pub use concatenated::{ConcatenatedFunction, ConcatenationContainer};
pub use errors::{Error, Result};
pub use function::UnivariateFunction;
pub use leaf::{LinearFunction, PolynomialFunction};
pub use report::{ReportMessage, WithReport};
pub use sectioned::SectionedUnivariateFunction;
pub use stacked::StackedFunction;
