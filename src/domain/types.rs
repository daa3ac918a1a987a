//! Shared domain types.
//!
//! - `Sample`: one exact `(size, cost)` observation
//! - `GrowthClass`: the closed set of Big-O shapes the fitter knows
//! - `ScoredModel`: a model together with its log-domain residual
//! - `FitConfig`: how a selection run is executed

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// One measured observation: input size and the cost it took.
///
/// Both values are kept as exact integers. Conversion to floating logs only
/// happens inside the fitter, so exponential costs never overflow here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub size: BigUint,
    pub cost: BigUint,
}

impl Sample {
    pub fn new(size: impl Into<BigUint>, cost: impl Into<BigUint>) -> Self {
        Self {
            size: size.into(),
            cost: cost.into(),
        }
    }
}

/// Canonical growth classes, in catalog order.
///
/// The declaration order is the tie-break order used by selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrowthClass {
    #[serde(rename = "O(1)")]
    Constant,
    #[serde(rename = "O(log n)")]
    Logarithmic,
    #[serde(rename = "O(n)")]
    Linear,
    #[serde(rename = "O(n log n)")]
    Linearithmic,
    #[serde(rename = "O(n^2)")]
    Quadratic,
    #[serde(rename = "O(n^2 log n)")]
    QuadraticLog,
    #[serde(rename = "O(n^3)")]
    Cubic,
    #[serde(rename = "O(2^n)")]
    Exponential,
}

impl GrowthClass {
    pub const ALL: [GrowthClass; 8] = [
        GrowthClass::Constant,
        GrowthClass::Logarithmic,
        GrowthClass::Linear,
        GrowthClass::Linearithmic,
        GrowthClass::Quadratic,
        GrowthClass::QuadraticLog,
        GrowthClass::Cubic,
        GrowthClass::Exponential,
    ];

    /// Catalog name, exactly as printed by the selector.
    pub fn name(self) -> &'static str {
        match self {
            GrowthClass::Constant => "O(1)",
            GrowthClass::Logarithmic => "O(log n)",
            GrowthClass::Linear => "O(n)",
            GrowthClass::Linearithmic => "O(n log n)",
            GrowthClass::Quadratic => "O(n^2)",
            GrowthClass::QuadraticLog => "O(n^2 log n)",
            GrowthClass::Cubic => "O(n^3)",
            GrowthClass::Exponential => "O(2^n)",
        }
    }

    /// Log-growth formula for listings.
    pub fn formula(self) -> &'static str {
        match self {
            GrowthClass::Constant => "0",
            GrowthClass::Logarithmic => "ln(ln n)",
            GrowthClass::Linear => "ln n",
            GrowthClass::Linearithmic => "ln n + ln(ln n)",
            GrowthClass::Quadratic => "2 ln n",
            GrowthClass::QuadraticLog => "2 ln n + ln(ln n)",
            GrowthClass::Cubic => "3 ln n",
            GrowthClass::Exponential => "n ln 2",
        }
    }

    /// Position in the catalog (0-based).
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for GrowthClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Fit quality of one catalog model against one series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredModel {
    pub model: GrowthClass,
    /// Sum of squared log-domain deviations after the optimal offset.
    ///
    /// `f64::INFINITY` when the model's log growth is undefined at some sample
    /// (e.g. `ln(ln 1)`).
    pub residual: f64,
}

impl ScoredModel {
    pub fn name(&self) -> &'static str {
        self.model.name()
    }
}

/// A selection run's configuration, derived from CLI flags plus environment.
#[derive(Debug, Clone)]
pub struct FitConfig {
    /// Score the catalog on the rayon pool instead of sequentially.
    pub parallel: bool,
    /// Reject series with fewer samples than this (never below 1).
    pub min_samples: usize,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            min_samples: 1,
        }
    }
}
