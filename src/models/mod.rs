//! Growth-class model catalog.
//!
//! Models are small, pure functions over a `GrowthClass` tag so that the fitter
//! can stay generic.

pub mod catalog;
pub mod model;

pub use catalog::*;
pub use model::*;
