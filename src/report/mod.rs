//! Reporting utilities: ranking tables, catalog listing and series text.

pub mod format;

pub use format::*;
