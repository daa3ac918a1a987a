//! Model selection: score the whole catalog and keep the minimal residual.
//!
//! Selection rules:
//! 1. Convert and validate the series once (empty / zero samples fail here)
//! 2. Score every catalog model
//! 3. Pick the minimal residual; exact ties go to the earliest catalog entry
//!
//! Scoring can run on the rayon pool. Each model's residual is still summed
//! sequentially inside its own task, so both modes give identical results.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::domain::{FitConfig, GrowthClass, Sample, ScoredModel};
use crate::error::AppError;
use crate::fit::fitter::{LogSample, score_log, to_log_samples};
use crate::models::catalog;

/// Output of scoring + selection.
#[derive(Debug, Clone)]
pub struct Selection {
    pub best: ScoredModel,
    /// Scores for every catalog model, in catalog order.
    pub scores: Vec<ScoredModel>,
}

/// Select the best-fitting growth class with the default (sequential) configuration.
pub fn select(series: &[Sample]) -> Result<GrowthClass, AppError> {
    Ok(select_with(series, &FitConfig::default())?.best.model)
}

/// Select the best-fitting growth class and return its catalog name.
pub fn select_name(series: &[Sample]) -> Result<&'static str, AppError> {
    select(series).map(GrowthClass::name)
}

/// Score every catalog model, in catalog order.
pub fn score_all(series: &[Sample], config: &FitConfig) -> Result<Vec<ScoredModel>, AppError> {
    if config.min_samples > 1 && series.len() < config.min_samples {
        return Err(AppError::min_samples(format!(
            "Series has {} sample(s); at least {} are required.",
            series.len(),
            config.min_samples
        )));
    }

    let samples = to_log_samples(series)?;
    Ok(score_samples(&samples, config.parallel))
}

/// Score the catalog and reduce to the best model.
pub fn select_with(series: &[Sample], config: &FitConfig) -> Result<Selection, AppError> {
    let scores = score_all(series, config)?;
    for s in &scores {
        debug!(model = s.name(), residual = s.residual, "scored model");
    }

    let best = pick_best(&scores).ok_or_else(|| AppError::min_samples("No models were scored."))?;
    info!(
        model = best.name(),
        residual = best.residual,
        samples = series.len(),
        parallel = config.parallel,
        "selected growth class"
    );

    Ok(Selection { best, scores })
}

fn score_samples(samples: &[LogSample], parallel: bool) -> Vec<ScoredModel> {
    if parallel {
        // Indexed collect keeps catalog order regardless of which task finishes first.
        catalog()
            .par_iter()
            .map(|&model| score_log(model, samples))
            .collect()
    } else {
        catalog()
            .iter()
            .map(|&model| score_log(model, samples))
            .collect()
    }
}

/// Arg-min over residuals with a strict less-than.
///
/// `scores` must be in catalog order; the earliest entry then wins exact ties.
fn pick_best(scores: &[ScoredModel]) -> Option<ScoredModel> {
    let (first, rest) = scores.split_first()?;
    let mut best = first;
    for s in rest {
        if s.residual < best.residual {
            best = s;
        }
    }
    Some(*best)
}
