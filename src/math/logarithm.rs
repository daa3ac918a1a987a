//! Natural logarithm of exact integers.
//!
//! This is the single place where the exact integer domain crosses into floats.
//!
//! For values that fit an `f64` we convert and call `ln` directly. Larger values
//! are split as `x = m · 2^s` where `m` holds the top 64 bits, giving
//!
//! ```text
//! ln(x) ≈ ln(m) + s · ln(2)
//! ```
//!
//! with a relative error bounded by the 64-bit mantissa truncation, far below
//! anything the regression can observe.

use std::f64::consts::LN_2;

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

/// Bit length up to which `BigUint::to_f64` stays finite with room to spare.
const DIRECT_BITS: u64 = 1000;

/// Number of leading bits kept when splitting off the exponent.
const MANTISSA_BITS: u64 = 64;

/// `ln(x)` for an exact integer. Returns `None` for zero.
pub fn ln_biguint(x: &BigUint) -> Option<f64> {
    if x.is_zero() {
        return None;
    }

    let bits = x.bits();
    if bits <= DIRECT_BITS {
        return x.to_f64().map(f64::ln);
    }

    let shift = bits - MANTISSA_BITS;
    let mantissa = (x >> shift).to_u64()?;
    Some((mantissa as f64).ln() + shift as f64 * LN_2)
}

/// Convert an exact integer to `f64`, rejecting values beyond the finite range.
pub fn to_finite_f64(x: &BigUint) -> Option<f64> {
    x.to_f64().filter(|v| v.is_finite())
}
