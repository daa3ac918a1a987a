//! Log-growth evaluation for each growth class.
//!
//! Every class is fitted as `ln(cost) ≈ log_growth(n) + c`, so each function
//! here returns the natural log of the class's shape, up to an additive
//! constant that the fitter absorbs.

use std::f64::consts::LN_2;

use crate::domain::GrowthClass;

/// Natural-log growth of `class` at size `n`.
///
/// Classes with an `ln(ln n)` term are `-inf` at `n = 1` and `NaN` below it;
/// the fitter treats any non-finite value as a model that cannot explain the
/// series.
pub fn log_growth(class: GrowthClass, n: f64) -> f64 {
    match class {
        GrowthClass::Constant => 0.0,
        GrowthClass::Logarithmic => n.ln().ln(),
        GrowthClass::Linear => n.ln(),
        GrowthClass::Linearithmic => {
            let ln_n = n.ln();
            ln_n + ln_n.ln()
        }
        GrowthClass::Quadratic => 2.0 * n.ln(),
        GrowthClass::QuadraticLog => {
            let ln_n = n.ln();
            2.0 * ln_n + ln_n.ln()
        }
        GrowthClass::Cubic => 3.0 * n.ln(),
        GrowthClass::Exponential => n * LN_2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_growth_matches_closed_forms() {
        let n: f64 = 100.0;
        let ln_n = n.ln();
        assert_eq!(log_growth(GrowthClass::Constant, n), 0.0);
        assert!((log_growth(GrowthClass::Logarithmic, n) - ln_n.ln()).abs() < 1e-15);
        assert!((log_growth(GrowthClass::Linear, n) - ln_n).abs() < 1e-15);
        assert!((log_growth(GrowthClass::Quadratic, n) - (n * n).ln()).abs() < 1e-12);
        assert!((log_growth(GrowthClass::Cubic, n) - (n * n * n).ln()).abs() < 1e-12);
        assert!((log_growth(GrowthClass::Exponential, n) - 100.0 * LN_2).abs() < 1e-12);
        assert!(
            (log_growth(GrowthClass::QuadraticLog, n) - (n * n * ln_n).ln()).abs() < 1e-12
        );
        assert!((log_growth(GrowthClass::Linearithmic, n) - (n * ln_n).ln()).abs() < 1e-12);
    }

    #[test]
    fn log_of_log_is_undefined_at_one() {
        assert_eq!(log_growth(GrowthClass::Logarithmic, 1.0), f64::NEG_INFINITY);
        assert!(log_growth(GrowthClass::Linear, 1.0).is_finite());
        assert!(log_growth(GrowthClass::Exponential, 1.0).is_finite());
    }
}
