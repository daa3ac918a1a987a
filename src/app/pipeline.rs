//! Shared "select pipeline" logic used by the `select` and `rank` commands.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! ingest -> convert -> score catalog -> select
//!
//! The commands can then focus on presentation.

use std::path::Path;

use crate::domain::FitConfig;
use crate::error::AppError;
use crate::fit::selection::{Selection, select_with};
use crate::io::ingest::{IngestedSeries, load_series, read_series};

/// All computed outputs of a single selection run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub ingest: IngestedSeries,
    pub selection: Selection,
}

/// Execute the full pipeline on a file (or stdin).
pub fn run_select(input: Option<&Path>, config: &FitConfig) -> Result<RunOutput, AppError> {
    let ingest = load_series(input)?;
    run_select_with_series(ingest, config)
}

/// Execute the pipeline on already ingested samples.
pub fn run_select_with_series(ingest: IngestedSeries, config: &FitConfig) -> Result<RunOutput, AppError> {
    let selection = select_with(&ingest.samples, config)?;
    Ok(RunOutput { ingest, selection })
}

/// Parse series text and return the selected catalog name.
pub fn select_from_text(input: &str) -> Result<&'static str, AppError> {
    let ingest = read_series(input)?;
    let run = run_select_with_series(ingest, &FitConfig::default())?;
    Ok(run.selection.best.name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn text_to_name() {
        assert_eq!(select_from_text("4\n10 10\n100 100\n1000 1000\n10000 10000\n").unwrap(), "O(n)");
        assert_eq!(select_from_text("4\n2 4\n4 16\n6 64\n8 256").unwrap(), "O(2^n)");
    }

    #[test]
    fn errors_propagate_by_kind() {
        assert_eq!(select_from_text("x").unwrap_err().kind(), ErrorKind::ParseFailure);
        assert_eq!(select_from_text("0\n").unwrap_err().kind(), ErrorKind::MinimumSampleSize);
        assert_eq!(select_from_text("1\n5 0\n").unwrap_err().kind(), ErrorKind::DomainError);
    }

    #[test]
    fn reads_series_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("series.txt");
        std::fs::write(&path, "3\n4 16\n8 64\n16 256\n").unwrap();
        let run = run_select(Some(&path), &FitConfig::default()).unwrap();
        assert_eq!(run.selection.best.name(), "O(n^2)");
        assert_eq!(run.ingest.samples.len(), 3);

        let err = run_select(Some(&dir.path().join("missing.txt")), &FitConfig::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
