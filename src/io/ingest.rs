//! Series ingest.
//!
//! Input format:
//!
//! ```text
//! N
//! size_1 cost_1
//! ...
//! size_N cost_N
//! ```
//!
//! Both values are nonnegative integers of any length. Lines after the N-th
//! sample are ignored (with a warning). Positivity is not checked here; the
//! fitter rejects zero sizes/costs as a domain error.

use std::fs;
use std::io::Read;
use std::path::Path;

use num_bigint::BigUint;
use tracing::warn;

use crate::domain::Sample;
use crate::error::AppError;
use crate::math::sum_exact;

/// Summary stats about the ingested samples.
#[derive(Debug, Clone)]
pub struct SeriesStats {
    pub n_samples: usize,
    pub size_min: BigUint,
    pub size_max: BigUint,
    pub total_cost: BigUint,
}

/// Ingest output: samples in input order + stats.
#[derive(Debug, Clone)]
pub struct IngestedSeries {
    pub samples: Vec<Sample>,
    /// `None` when the declared count is zero.
    pub stats: Option<SeriesStats>,
    /// Non-empty lines after the declared samples that were not read.
    pub trailing_lines: usize,
}

/// Read a series from a file, or from stdin when `path` is `None` or `-`.
pub fn load_series(path: Option<&Path>) -> Result<IngestedSeries, AppError> {
    let text = match path {
        Some(p) if p != Path::new("-") => fs::read_to_string(p).map_err(|e| {
            AppError::io(format!("Failed to read input '{}': {e}", p.display()))
        })?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| AppError::io(format!("Failed to read stdin: {e}")))?;
            buf
        }
    };
    read_series(&text)
}

/// Parse the series text format.
pub fn read_series(input: &str) -> Result<IngestedSeries, AppError> {
    let mut lines = input.lines().enumerate();

    let (_, count_line) = lines
        .next()
        .ok_or_else(|| AppError::parse("Missing sample count on line 1."))?;
    let count_line = count_line.trim().trim_start_matches('\u{feff}');
    let invalid_count = || AppError::parse(format!("Invalid sample count '{count_line}' on line 1."));
    if count_line.is_empty() || !count_line.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_count());
    }
    let count: usize = count_line.parse().map_err(|_| invalid_count())?;

    // The declared count is untrusted; never allocate more than the lines present.
    let mut samples = Vec::with_capacity(count.min(input.lines().count()));
    for i in 0..count {
        let (idx, line) = lines.next().ok_or_else(|| {
            AppError::parse(format!(
                "Expected {count} sample line(s), found {i}."
            ))
        })?;
        samples.push(parse_sample(line, idx + 1)?);
    }

    let trailing_lines = lines.filter(|(_, l)| !l.trim().is_empty()).count();
    if trailing_lines > 0 {
        warn!(trailing_lines, "ignoring lines after the declared samples");
    }

    let stats = compute_stats(&samples);
    Ok(IngestedSeries {
        samples,
        stats,
        trailing_lines,
    })
}

fn parse_sample(line: &str, line_no: usize) -> Result<Sample, AppError> {
    let mut tokens = line.split_whitespace();
    let (Some(size), Some(cost), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(AppError::parse(format!(
            "Line {line_no}: expected two integers `size cost`, got '{}'.",
            line.trim()
        )));
    };

    Ok(Sample {
        size: parse_uint(size, "size", line_no)?,
        cost: parse_uint(cost, "cost", line_no)?,
    })
}

fn parse_uint(token: &str, field: &str, line_no: usize) -> Result<BigUint, AppError> {
    // `BigUint::from_str` also accepts `+` and `_`; the format only allows digits.
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::parse(format!(
            "Line {line_no}: {field} '{token}' is not a nonnegative integer."
        )));
    }
    token.parse::<BigUint>().map_err(|e| {
        AppError::parse(format!("Line {line_no}: invalid {field} '{token}': {e}"))
    })
}

fn compute_stats(samples: &[Sample]) -> Option<SeriesStats> {
    let size_min = samples.iter().map(|s| &s.size).min()?.clone();
    let size_max = samples.iter().map(|s| &s.size).max()?.clone();
    Some(SeriesStats {
        n_samples: samples.len(),
        size_min,
        size_max,
        total_cost: sum_exact(samples.iter().map(|s| &s.cost)),
    })
}
