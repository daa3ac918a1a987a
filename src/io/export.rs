//! Export per-model scores to JSON.
//!
//! The export is meant to be easy to consume in downstream scripts.

use std::fs::File;
use std::path::Path;

use serde::Serialize;

use crate::domain::GrowthClass;
use crate::error::AppError;
use crate::fit::selection::Selection;

#[derive(Debug, Serialize)]
pub struct ScoreExport {
    pub tool: String,
    pub selected: GrowthClass,
    pub n_samples: usize,
    pub scores: Vec<ScoreRow>,
}

#[derive(Debug, Serialize)]
pub struct ScoreRow {
    pub model: GrowthClass,
    pub index: usize,
    /// `null` when the model is undefined on the series.
    pub residual: Option<f64>,
}

impl ScoreExport {
    pub fn from_selection(selection: &Selection, n_samples: usize) -> Self {
        Self {
            tool: "bigo".to_string(),
            selected: selection.best.model,
            n_samples,
            scores: selection
                .scores
                .iter()
                .map(|s| ScoreRow {
                    model: s.model,
                    index: s.model.index(),
                    residual: s.residual.is_finite().then_some(s.residual),
                })
                .collect(),
        }
    }
}

/// Write the selection's scores as pretty JSON.
pub fn write_scores_json(path: &Path, selection: &Selection, n_samples: usize) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::io(format!("Failed to create export JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, &ScoreExport::from_selection(selection, n_samples))
        .map_err(|e| AppError::io(format!("Failed to write export JSON: {e}")))?;

    Ok(())
}
