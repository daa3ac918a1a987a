//! Numeric utilities: exact-integer logarithms and typed summation.

pub mod logarithm;
pub mod summation;

pub use logarithm::*;
pub use summation::*;
