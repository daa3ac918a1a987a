//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - exact input samples (`Sample`)
//! - the growth-class tag (`GrowthClass`)
//! - fit outputs (`ScoredModel`) and run configuration (`FitConfig`)

pub mod types;

pub use types::*;
