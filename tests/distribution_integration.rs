//! Distribution engine integration tests
//!
//! End-to-end checks of the public surface: pinned values for the exact
//! arithmetic and the mass function, the documented degenerate shapes of
//! every entry point, and a fixed-seed Monte Carlo cross-check of the
//! closed-form results.

use num_bigint::BigUint;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wardice::core::EngineError;
use wardice::model::{approx_eq_all, BinomialOutcome};
use wardice::stats::arithmetic::{binomial_coefficient, factorial};
use wardice::stats::{DistributionEngine, GroupSize, Trials};

/// Surface degenerate-path logs when RUST_LOG is set
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn outcomes(probabilities: &[f64]) -> Vec<BinomialOutcome> {
    probabilities
        .iter()
        .enumerate()
        .map(|(k, p)| BinomialOutcome::new(k as u32, *p))
        .collect()
}

#[test]
fn test_factorial_of_forty() {
    let expected: BigUint = "815915283247897734345611269596115894272000000000"
        .parse()
        .unwrap();
    assert_eq!(factorial(40).unwrap(), expected);
}

#[test]
fn test_factorial_rejects_negative_input() {
    assert!(matches!(
        factorial(-1),
        Err(EngineError::NegativeFactorial(-1))
    ));
}

#[test]
fn test_binomial_coefficient_fifty_choose_thirty_two() {
    assert_eq!(
        binomial_coefficient(50, 32),
        BigUint::from(18_053_528_883_775u64)
    );
}

#[test]
fn test_binomial_coefficient_out_of_range_is_zero_not_error() {
    assert_eq!(binomial_coefficient(-1, 1), BigUint::default());
}

#[test]
fn test_mass_function_pinned_values() {
    let engine = DistributionEngine::new();
    let round4 = |v: f64| (v * 10_000.0).round() / 10_000.0;

    assert_eq!(engine.probability_mass_function(1, 1, 0.5), 0.5);
    assert_eq!(round4(engine.probability_mass_function(10, 5, 0.25)), 0.0584);
    assert_eq!(round4(engine.probability_mass_function(50, 32, 0.5)), 0.0160);
}

#[test]
fn test_binomial_distribution_sums_to_one() {
    let engine = DistributionEngine::new();

    for trials in [1, 2, 5, 10, 40] {
        for probability in [0.1, 0.5, 1.0 / 3.0, 0.9] {
            let distribution =
                engine.binomial_distribution(Trials::fixed(trials), probability, GroupSize::default());
            let total: f64 = distribution.iter().map(|o| o.probability).sum();
            assert!(
                (total - 1.0).abs() < 1e-4,
                "binomial({trials}, {probability}) sums to {total}"
            );
        }
    }
}

#[test]
fn test_cumulative_distribution_ends_at_one_and_is_monotone() {
    let engine = DistributionEngine::new();

    for trials in [1, 4, 12] {
        for probability in [0.25, 0.5, 2.0 / 3.0] {
            let distribution = engine.cumulative_distribution(
                Trials::fixed(trials),
                probability,
                GroupSize::default(),
            );

            assert!((distribution.last().unwrap().probability - 1.0).abs() < 1e-4);
            for window in distribution.windows(2) {
                assert!(window[0].probability <= window[1].probability + 1e-12);
            }
        }
    }
}

#[test]
fn test_survivor_distribution_starts_at_one_and_is_monotone() {
    let engine = DistributionEngine::new();

    for trials in [1, 4, 12] {
        for probability in [0.25, 0.5, 2.0 / 3.0] {
            let distribution = engine.survivor_distribution(
                Trials::fixed(trials),
                probability,
                GroupSize::default(),
            );

            assert!((distribution[0].probability - 1.0).abs() < 1e-4);
            for window in distribution.windows(2) {
                assert!(window[0].probability + 1e-12 >= window[1].probability);
            }
        }
    }
}

#[test]
fn test_variable_trials_pinned_distribution() {
    let engine = DistributionEngine::new();
    let actual = engine.binomial_distribution(Trials::range(1, 3), 0.5, GroupSize::default());
    assert!(approx_eq_all(
        &actual,
        &outcomes(&[0.2917, 0.4583, 0.2083, 0.0417])
    ));
}

#[test]
fn test_variable_trials_pinned_cumulative() {
    let engine = DistributionEngine::new();
    let actual = engine.cumulative_distribution(Trials::range(1, 3), 0.5, GroupSize::default());
    assert!(approx_eq_all(
        &actual,
        &outcomes(&[0.2917, 0.75, 0.9583, 1.0])
    ));
    assert_eq!(actual.last().unwrap().probability, 1.0);
}

#[test]
fn test_zero_trials_degenerates_to_certain_zero() {
    init_tracing();
    let engine = DistributionEngine::new();
    let expected = vec![BinomialOutcome::new(0, 1.0)];

    assert_eq!(
        engine.binomial_distribution(Trials::fixed(0), 0.5, GroupSize::default()),
        expected
    );
    assert_eq!(
        engine.cumulative_distribution(Trials::fixed(0), 0.5, GroupSize::default()),
        expected
    );
    assert_eq!(
        engine.survivor_distribution(Trials::fixed(0), 0.5, GroupSize::default()),
        expected
    );
}

#[test]
fn test_degenerate_probability_shapes_per_entry_point() {
    init_tracing();
    let engine = DistributionEngine::new();
    let trials = Trials::fixed(3);

    // p <= 0: zero successes certain
    assert_eq!(
        engine.binomial_distribution(trials, -1.0, GroupSize::default()),
        outcomes(&[1.0, 0.0, 0.0, 0.0])
    );
    assert_eq!(
        engine.cumulative_distribution(trials, 0.0, GroupSize::default()),
        outcomes(&[1.0, 1.0, 1.0, 1.0])
    );
    assert_eq!(
        engine.survivor_distribution(trials, 0.0, GroupSize::default()),
        outcomes(&[1.0, 0.0, 0.0, 0.0])
    );

    // p >= 1: every success certain
    assert_eq!(
        engine.binomial_distribution(trials, 1.0, GroupSize::default()),
        outcomes(&[0.0, 0.0, 0.0, 1.0])
    );
    assert_eq!(
        engine.cumulative_distribution(trials, 1.0, GroupSize::default()),
        outcomes(&[0.0, 0.0, 0.0, 1.0])
    );
    assert_eq!(
        engine.survivor_distribution(trials, 1.5, GroupSize::default()),
        outcomes(&[1.0, 1.0, 1.0, 1.0])
    );
}

#[test]
fn test_grouped_forecast_full_pipeline() {
    // Six attacks hitting on 4+, two wounds per model destroyed: the
    // survivor column answers "what are the odds of destroying at least
    // k models".
    let engine = DistributionEngine::new();
    let hit_probability = wardice::dice::probability_of_success(6, 3);
    assert_eq!(hit_probability, 0.5);

    let survivor =
        engine.survivor_distribution(Trials::fixed(6), hit_probability, GroupSize::fixed(2));

    assert_eq!(survivor[0].probability, 1.0);
    assert_eq!(survivor.len(), 4);
    for window in survivor.windows(2) {
        assert!(window[0].probability >= window[1].probability);
    }
}

#[test]
fn test_monte_carlo_agrees_with_closed_form() {
    let engine = DistributionEngine::new();
    let mut rng = ChaCha8Rng::seed_from_u64(0xD1CE);

    const TRIALS: i32 = 6;
    const PROBABILITY: f64 = 0.5;
    const SAMPLES: u32 = 20_000;

    let mut counts = [0u32; (TRIALS + 1) as usize];
    for _ in 0..SAMPLES {
        let successes = (0..TRIALS)
            .filter(|_| rng.gen_bool(PROBABILITY))
            .count();
        counts[successes] += 1;
    }

    for (k, count) in counts.iter().enumerate() {
        let observed = *count as f64 / SAMPLES as f64;
        let predicted = engine.probability_mass_function(TRIALS, k as i32, PROBABILITY);
        assert!(
            (observed - predicted).abs() < 0.02,
            "k = {k}: observed {observed}, predicted {predicted}"
        );
    }
}

#[test]
fn test_outcome_serde_round_trip() {
    let outcome = BinomialOutcome::new(3, 0.375);
    let json = serde_json::to_string(&outcome).unwrap();
    let back: BinomialOutcome = serde_json::from_str(&json).unwrap();
    assert_eq!(outcome, back);
}
