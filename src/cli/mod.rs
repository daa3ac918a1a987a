//! Command-line parsing for the growth-class selector.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the fitting code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::GrowthClass;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "bigo", version, about = "Infer the Big-O growth class of measured (size, cost) samples")]
pub struct Cli {
    /// Enable debug logging on stderr (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Read a series and print the best-fitting growth class.
    Select(SelectArgs),
    /// Print every catalog model with its residual (winner marked with `*`).
    Rank(SelectArgs),
    /// List the model catalog in tie-break order.
    Models,
    /// Print a synthetic series that follows the given growth class.
    Generate(GenerateArgs),
}

/// Common options for selecting and ranking.
#[derive(Debug, Args, Clone)]
pub struct SelectArgs {
    /// Series file (`N` then `N` lines of `size cost`). Reads stdin when omitted or `-`.
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Score the catalog in parallel (also enabled by BIGO_PARALLEL).
    #[arg(long)]
    pub parallel: bool,

    /// Minimum number of samples required (falls back to BIGO_MIN_SAMPLES, then 1).
    #[arg(long, value_name = "K")]
    pub min_samples: Option<usize>,

    /// Export all model scores to JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}

/// Options for synthetic series generation.
#[derive(Debug, Args, Clone)]
pub struct GenerateArgs {
    /// Growth class to follow, by catalog name (e.g. "O(n log n)").
    #[arg(short, long)]
    pub model: GrowthClass,

    /// Comma-separated sizes (defaults depend on the model).
    #[arg(long, value_delimiter = ',')]
    pub sizes: Option<Vec<u64>>,

    /// Multiplicative constant applied to every cost.
    #[arg(long, default_value_t = 1.0)]
    pub scale: f64,

    /// Standard deviation of log-normal noise (0 = exact shape).
    #[arg(long, default_value_t = 0.0)]
    pub noise: f64,

    /// Random seed for the noise.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}
