//! Input/output helpers.
//!
//! - series text ingest + validation (`ingest`)
//! - score exports (JSON) (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
