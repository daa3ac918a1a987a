//! Typed summation helpers.
//!
//! Two sums, one per numeric domain:
//! - `sum_exact` over `BigUint` for raw-input bookkeeping
//! - `sum_f64` over floats for the log-domain regression
//!
//! `sum_f64` is a plain left-to-right accumulation in iteration order. The
//! fitter relies on that fixed order: float addition is not associative, and
//! residual ties between catalog models must come out the same on every run.

use num_bigint::BigUint;
use num_traits::Zero;

/// Exact sum of arbitrary-precision integers.
pub fn sum_exact<'a, I>(values: I) -> BigUint
where
    I: IntoIterator<Item = &'a BigUint>,
{
    let mut acc = BigUint::zero();
    for v in values {
        acc += v;
    }
    acc
}

/// Sequential float sum in iteration order.
pub fn sum_f64<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut acc = 0.0;
    for v in values {
        acc += v;
    }
    acc
}
