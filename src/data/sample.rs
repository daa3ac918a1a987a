//! Synthetic series generation from a growth class.
//!
//! Costs are generated in log space,
//!
//! ```text
//! ln(cost) = ln(scale) + log_growth(n) + noise · Z,   Z ~ N(0, 1)
//! ```
//!
//! and only then rounded to an exact integer, so `O(2^n)` series with large `n`
//! come out exact instead of overflowing a float.

use num_bigint::BigUint;
use num_traits::{FromPrimitive, One};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

use crate::domain::{GrowthClass, Sample};
use crate::error::AppError;
use crate::models::log_growth;

/// Above this log value `exp` is no longer safe to evaluate directly.
const DIRECT_LN_MAX: f64 = 600.0;

/// Mantissa precision used when building large integers from a log value.
const MANTISSA_BITS: i64 = 52;

/// Options for synthetic series generation.
#[derive(Debug, Clone)]
pub struct SynthOptions {
    /// Multiplicative constant applied to every cost.
    pub scale: f64,
    /// Standard deviation of the log-normal noise (0 = exact shape).
    pub noise: f64,
    pub seed: u64,
}

impl Default for SynthOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            noise: 0.0,
            seed: 42,
        }
    }
}

/// Sizes that separate the catalog well for the given class.
pub fn default_sizes(class: GrowthClass) -> Vec<u64> {
    match class {
        GrowthClass::Exponential => (1..=8).map(|i| i * 8).collect(),
        _ => (2..=8).map(|i| 1u64 << (2 * i)).collect(),
    }
}

/// Generate a series whose costs follow `class`.
pub fn generate_series(class: GrowthClass, sizes: &[u64], opts: &SynthOptions) -> Result<Vec<Sample>, AppError> {
    if sizes.is_empty() {
        return Err(AppError::config("At least one size is required."));
    }
    if sizes.contains(&0) {
        return Err(AppError::config("Sizes must be > 0."));
    }
    if !(opts.scale.is_finite() && opts.scale > 0.0) {
        return Err(AppError::config(format!("Invalid scale {} (must be finite and > 0).", opts.scale)));
    }
    if !(opts.noise.is_finite() && opts.noise >= 0.0) {
        return Err(AppError::config(format!("Invalid noise {} (must be finite and >= 0).", opts.noise)));
    }

    let mut rng = StdRng::seed_from_u64(opts.seed);
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| AppError::config(format!("Noise distribution error: {e}")))?;

    let ln_scale = opts.scale.ln();
    let mut out = Vec::with_capacity(sizes.len());
    for &n in sizes {
        let z: f64 = if opts.noise > 0.0 { normal.sample(&mut rng) } else { 0.0 };
        let ln_cost = ln_scale + log_growth(class, n as f64) + opts.noise * z;
        out.push(Sample::new(n, cost_from_ln(ln_cost)));
    }

    Ok(out)
}

/// Round `exp(ln_cost)` to an integer, clamped to at least 1.
fn cost_from_ln(ln_cost: f64) -> BigUint {
    if !ln_cost.is_finite() || ln_cost <= 0.0 {
        return BigUint::one();
    }

    if ln_cost <= DIRECT_LN_MAX {
        return BigUint::from_f64(ln_cost.exp().round())
            .filter(|v| v >= &BigUint::one())
            .unwrap_or_else(BigUint::one);
    }

    // exp(ln_cost) = m · 2^s with m in [2^52, 2^53).
    let log2 = ln_cost / std::f64::consts::LN_2;
    let shift = log2.floor() as i64 - MANTISSA_BITS;
    let mantissa = (log2 - shift as f64).exp2().round() as u64;
    BigUint::from(mantissa) << (shift.max(0) as usize)
}
