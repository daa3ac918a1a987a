//! Growth-class fitting orchestration.
//!
//! Responsibilities:
//!
//! - convert exact samples into log samples (once, at the boundary)
//! - fit each catalog model in log space (optionally in parallel)
//! - select the model with the minimal residual

pub mod fitter;
pub mod selection;

pub use fitter::*;
pub use selection::*;
