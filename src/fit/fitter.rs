//! Log-domain least-squares fit of a single growth class.
//!
//! Given samples `(n_i, y_i)` and a class with log growth `g(n)`, we fit
//!
//! ```text
//! ln(y_i) ≈ g(n_i) + c
//! ```
//!
//! with one free parameter `c` (a multiplicative constant in linear space).
//! The least-squares optimum is the mean deviation:
//!
//! ```text
//! c        = (1/N) · Σ (ln y_i − g(n_i))
//! residual = Σ (ln y_i − g(n_i) − c)²
//! ```
//!
//! Because everything happens in log space, rescaling all costs by a positive
//! constant only shifts `c` and leaves the residual unchanged.

use crate::domain::{GrowthClass, Sample, ScoredModel};
use crate::error::AppError;
use crate::math::{ln_biguint, sum_f64, to_finite_f64};
use crate::models::log_growth;

/// A sample after crossing into the float domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogSample {
    /// Input size as a float (needed as-is by `O(2^n)`).
    pub size: f64,
    /// Natural log of the measured cost.
    pub ln_cost: f64,
}

/// Convert exact samples into float log samples.
///
/// This is the only conversion from the exact integer domain. It rejects empty
/// series and samples outside the log domain before any model is fitted.
pub fn to_log_samples(series: &[Sample]) -> Result<Vec<LogSample>, AppError> {
    if series.is_empty() {
        return Err(AppError::min_samples(
            "Series is empty; at least one sample is required to fit a model.",
        ));
    }

    series
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let idx = i + 1;
            let ln_cost = ln_biguint(&s.cost).ok_or_else(|| {
                AppError::domain(format!("Sample {idx}: cost must be > 0 (got {}).", s.cost))
            })?;
            if ln_biguint(&s.size).is_none() {
                return Err(AppError::domain(format!(
                    "Sample {idx}: size must be > 0 (got {}).",
                    s.size
                )));
            }
            let size = to_finite_f64(&s.size).ok_or_else(|| {
                AppError::domain(format!("Sample {idx}: size is too large to evaluate."))
            })?;
            Ok(LogSample { size, ln_cost })
        })
        .collect()
}

/// Score one model against a series of exact samples.
pub fn score(model: GrowthClass, series: &[Sample]) -> Result<ScoredModel, AppError> {
    let samples = to_log_samples(series)?;
    Ok(score_log(model, &samples))
}

/// Score one model against already converted samples.
///
/// `samples` must be non-empty; `to_log_samples` guarantees this.
pub(crate) fn score_log(model: GrowthClass, samples: &[LogSample]) -> ScoredModel {
    let deviations: Vec<f64> = samples
        .iter()
        .map(|s| s.ln_cost - log_growth(model, s.size))
        .collect();

    let residual = if deviations.iter().all(|d| d.is_finite()) {
        let c = sum_f64(deviations.iter().copied()) / deviations.len() as f64;
        let r = sum_f64(deviations.iter().map(|&d| {
            let e = d - c;
            e * e
        }));
        if r.is_finite() { r } else { f64::INFINITY }
    } else {
        f64::INFINITY
    };

    ScoredModel { model, residual }
}
