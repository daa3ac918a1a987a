//! End-to-end properties of growth-class selection.
//!
//! ## Test Organization
//!
//! 1. **Exact shapes** - every catalog model recovers its own synthetic data
//! 2. **Invariances** - determinism, cost rescaling, appending consistent samples
//! 3. **Boundaries** - empty series, zero samples, huge exponential costs
//! 4. **Execution modes** - parallel and sequential scoring agree

use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use bigo_fit::app::pipeline::select_from_text;
use bigo_fit::data::{SynthOptions, default_sizes, generate_series};
use bigo_fit::domain::{FitConfig, GrowthClass, Sample};
use bigo_fit::error::ErrorKind;
use bigo_fit::fit::{score, select, select_name, select_with};
use bigo_fit::models::{catalog, find_model};

fn series(points: &[(u64, u64)]) -> Vec<Sample> {
    points.iter().map(|&(n, y)| Sample::new(n, y)).collect()
}

fn exact(class: GrowthClass, scale: f64) -> Vec<Sample> {
    let opts = SynthOptions {
        scale,
        noise: 0.0,
        seed: 0,
    };
    generate_series(class, &default_sizes(class), &opts).unwrap()
}

// ============================================================================
// Exact shapes
// ============================================================================

#[test]
fn every_model_recovers_its_own_shape() {
    for &class in catalog() {
        for scale in [1e6, 3.5e7] {
            let s = exact(class, scale);
            assert_eq!(select(&s).unwrap(), class, "scale={scale}");
        }
    }
}

#[test]
fn reference_series_select_expected_names() {
    let sizes = [10u64, 100, 1000, 10000];
    assert_eq!(select_name(&series(&sizes.map(|n| (n, n)))).unwrap(), "O(n)");
    assert_eq!(select_name(&series(&sizes.map(|n| (n, n * n)))).unwrap(), "O(n^2)");
    assert_eq!(
        select_name(&series(&[(2, 4), (4, 16), (6, 64), (8, 256)])).unwrap(),
        "O(2^n)"
    );
    assert_eq!(
        select_name(&series(&[(1, 1), (2, 1), (4, 1), (8, 1), (16, 1), (32, 1)])).unwrap(),
        "O(1)"
    );
}

#[test]
fn noisy_series_still_recover_their_class() {
    for &class in catalog() {
        let opts = SynthOptions {
            scale: 1e6,
            noise: 0.02,
            seed: 11,
        };
        let s = generate_series(class, &default_sizes(class), &opts).unwrap();
        assert_eq!(select(&s).unwrap(), class);
    }
}

// ============================================================================
// Invariances
// ============================================================================

#[test]
fn selection_is_deterministic() {
    let s = series(&[(5, 31), (9, 120), (20, 610), (33, 2000), (70, 9800)]);
    let first = select_with(&s, &FitConfig::default()).unwrap();
    let second = select_with(&s, &FitConfig::default()).unwrap();
    assert_eq!(first.best.model, second.best.model);
    for (a, b) in first.scores.iter().zip(second.scores.iter()) {
        assert_eq!(a.residual.to_bits(), b.residual.to_bits());
    }
}

#[test]
fn rescaling_costs_does_not_change_selection() {
    let mut rng = StdRng::seed_from_u64(2024);
    for &class in catalog() {
        let opts = SynthOptions {
            scale: 50.0,
            noise: 0.05,
            seed: 3,
        };
        let base = generate_series(class, &default_sizes(class), &opts).unwrap();
        let want = select(&base).unwrap();

        for _ in 0..5 {
            let k: u64 = rng.gen_range(2..1_000_000);
            let scaled: Vec<Sample> = base
                .iter()
                .map(|s| Sample {
                    size: s.size.clone(),
                    cost: &s.cost * k,
                })
                .collect();
            assert_eq!(select(&scaled).unwrap(), want, "{class} scaled by {k}");
        }
    }
}

#[test]
fn appending_consistent_samples_keeps_selection() {
    let mut s = series(&[(10, 10), (100, 100), (1000, 1000)]);
    assert_eq!(select_name(&s).unwrap(), "O(n)");
    for n in [10_000u64, 100_000, 1_000_000] {
        s.push(Sample::new(n, n));
        assert_eq!(select_name(&s).unwrap(), "O(n)");
    }

    let mut s = exact(GrowthClass::Cubic, 1e3);
    for n in [100_000u64, 200_000] {
        s.push(Sample::new(n, BigUint::from(n).pow(3) * 1000u32));
        assert_eq!(select(&s).unwrap(), GrowthClass::Cubic);
    }
}

#[test]
fn residual_is_non_negative_and_exact_fit_is_best() {
    let s = exact(GrowthClass::Linearithmic, 1e6);
    let own = score(GrowthClass::Linearithmic, &s).unwrap().residual;
    for &class in catalog() {
        let r = score(class, &s).unwrap().residual;
        assert!(r >= 0.0, "{class}: {r}");
        assert!(own <= r, "{class}: {r} < {own}");
    }
}

// ============================================================================
// Boundaries
// ============================================================================

#[test]
fn empty_series_is_minimum_sample_size() {
    assert_eq!(select(&[]).unwrap_err().kind(), ErrorKind::MinimumSampleSize);
    assert_eq!(select_from_text("0").unwrap_err().kind(), ErrorKind::MinimumSampleSize);
}

#[test]
fn zero_size_or_cost_is_domain_error() {
    assert_eq!(
        select(&series(&[(1, 1), (2, 0)])).unwrap_err().kind(),
        ErrorKind::DomainError
    );
    assert_eq!(
        select(&series(&[(0, 1), (2, 2)])).unwrap_err().kind(),
        ErrorKind::DomainError
    );
}

#[test]
fn single_sample_ties_resolve_to_constant() {
    // One sample fits every model exactly, so all eight residuals are zero.
    let s = series(&[(7, 9)]);
    let selection = select_with(&s, &FitConfig::default()).unwrap();
    assert!(selection.scores.iter().all(|m| m.residual == 0.0));
    assert_eq!(select(&s).unwrap(), GrowthClass::Constant);
}

#[test]
fn catalog_lookup_is_closed() {
    assert_eq!(catalog().len(), 8);
    assert_eq!(find_model("O(n^3)").unwrap(), GrowthClass::Cubic);
    assert_eq!(find_model("O(n^4)").unwrap_err().kind(), ErrorKind::NotFound);
}

#[test]
fn huge_exponential_costs_do_not_overflow() {
    let s: Vec<Sample> = [1000u32, 2000, 3000, 4000]
        .iter()
        .map(|&n| Sample::new(n, BigUint::from(1u8) << (n as usize)))
        .collect();
    assert_eq!(select(&s).unwrap(), GrowthClass::Exponential);

    let text = format!("2\n600 {}\n1200 {}\n", BigUint::from(1u8) << 600usize, BigUint::from(1u8) << 1200usize);
    assert_eq!(select_from_text(&text).unwrap(), "O(2^n)");
}

// ============================================================================
// Execution modes
// ============================================================================

#[test]
fn parallel_scoring_agrees_with_sequential() {
    let parallel = FitConfig {
        parallel: true,
        ..FitConfig::default()
    };
    for &class in catalog() {
        let opts = SynthOptions {
            scale: 10.0,
            noise: 0.1,
            seed: 99,
        };
        let s = generate_series(class, &default_sizes(class), &opts).unwrap();
        let seq = select_with(&s, &FitConfig::default()).unwrap();
        let par = select_with(&s, &parallel).unwrap();
        assert_eq!(seq.best.model, par.best.model);
        let seq_bits: Vec<u64> = seq.scores.iter().map(|s| s.residual.to_bits()).collect();
        let par_bits: Vec<u64> = par.scores.iter().map(|s| s.residual.to_bits()).collect();
        assert_eq!(seq_bits, par_bits);
    }
}
