//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the fitting code stays clean and testable
//! - output changes are localized

use crate::domain::{GrowthClass, Sample};
use crate::fit::selection::Selection;
use crate::io::ingest::SeriesStats;

/// Format the ranking table: every catalog model with its residual.
pub fn format_rankings(selection: &Selection, stats: Option<&SeriesStats>) -> String {
    let mut out = String::new();

    out.push_str(format!("  {:<14} {:>14}\n", "model", "residual").trim_end());
    out.push('\n');
    out.push_str(format!("  {:-<14} {:-<14}\n", "", "").trim_end());
    out.push('\n');

    for s in &selection.scores {
        let chosen = if s.model == selection.best.model { "*" } else { " " };
        out.push_str(&format!("{chosen} {:<14} {:>14}\n", s.name(), fmt_residual(s.residual)));
    }

    if let Some(stats) = stats {
        out.push('\n');
        out.push_str(&format!(
            "Samples: n={} | size=[{}, {}] | total cost={}\n",
            stats.n_samples,
            stats.size_min,
            stats.size_max,
            truncate(&stats.total_cost.to_string(), 24),
        ));
    }

    out
}

/// List the catalog in declared order.
pub fn format_catalog() -> String {
    let mut out = String::new();
    for class in crate::models::catalog() {
        out.push_str(&format!("{} {:<14} {}\n", class.index(), class.name(), class.formula()));
    }
    out
}

/// Render samples in the series input format.
pub fn format_series(samples: &[Sample]) -> String {
    let mut out = format!("{}\n", samples.len());
    for s in samples {
        out.push_str(&format!("{} {}\n", s.size, s.cost));
    }
    out
}

/// Header comment for `generate` output on stderr.
pub fn format_generated_note(class: GrowthClass, n: usize) -> String {
    format!("generated {n} sample(s) following {class}")
}

fn fmt_residual(v: f64) -> String {
    if v.is_finite() { format!("{v:.6e}") } else { "undefined".to_string() }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let digits = s.chars().count();
    let head: String = s.chars().take(max.saturating_sub(8)).collect();
    format!("{head}... ({digits} digits)")
}
