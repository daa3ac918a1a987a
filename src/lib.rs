//! `bigo-fit` library crate.
//!
//! Infers the Big-O growth class of an algorithm from measured
//! `(size, cost)` samples by fitting each catalog model in log space and
//! keeping the one with the smallest residual.
//!
//! The binary (`bigo`) is a thin wrapper around this library so that the
//! catalog, fitter and selector are testable without spawning processes.
//!
//! ```
//! use bigo_fit::domain::Sample;
//! use bigo_fit::fit::select_name;
//!
//! let series: Vec<Sample> = [10u32, 100, 1000, 10000]
//!     .iter()
//!     .map(|&n| Sample::new(n, n * n))
//!     .collect();
//! assert_eq!(select_name(&series).unwrap(), "O(n^2)");
//! ```

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod models;
pub mod report;
