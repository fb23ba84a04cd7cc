//! Range extraction tests
//!
//! Containment, integrality and the one/two-argument equivalence.

use math_random_core_rs::rng::{self, GeneratorState, RandomArgs};
use proptest::prelude::*;

fn seeded(seed: f64) -> GeneratorState {
    let mut state = GeneratorState::new();
    rng::reseed(&mut state, seed);
    state
}

#[test]
fn test_unit_interval_containment() {
    let mut state = seeded(7.0);
    for _ in 0..1_000_000 {
        let d = rng::extract(&mut state, RandomArgs::Unit);
        assert!((0.0..1.0).contains(&d), "unit draw {} outside [0, 1)", d);
    }
}

#[test]
fn test_range_containment() {
    let mut state = seeded(99.0);
    let (r1, r2) = (-17.0, 23.0);
    for _ in 0..100_000 {
        let v = rng::extract(&mut state, RandomArgs::Between(r1, r2));
        assert!(v >= r1 && v <= r2, "value {} outside [{}, {}]", v, r1, r2);
        assert_eq!((v - r1).fract(), 0.0, "value {} not an integral offset", v);
    }
}

#[test]
fn test_range_hits_both_ends() {
    let mut state = seeded(3.0);
    let mut seen = [false; 6];
    for _ in 0..10_000 {
        let v = rng::extract(&mut state, RandomArgs::UpTo(6.0));
        seen[v as usize - 1] = true;
    }
    assert!(seen.iter().all(|&s| s), "not every face seen: {:?}", seen);
}

#[test]
fn test_degenerate_single_value_range() {
    let mut state = seeded(11.0);
    for _ in 0..100 {
        assert_eq!(rng::extract(&mut state, RandomArgs::Between(5.0, 5.0)), 5.0);
    }
}

#[test]
fn test_fractional_bounds_pass_through() {
    // Result is the raw arithmetic, even when it overshoots r2
    let mut a = seeded(0.0);
    let mut b = seeded(0.0);
    let d = rng::extract(&mut a, RandomArgs::Unit);
    let v = rng::extract(&mut b, RandomArgs::Between(0.0, 0.5));
    assert_eq!(v, (d * 1.5).floor());
    assert_eq!(v, 1.0);
}

proptest! {
    #[test]
    fn prop_single_argument_equivalence(seed in -1e6f64..1e6, r1 in 1i32..1_000_000) {
        let r1 = r1 as f64;
        let mut a = seeded(seed);
        let mut b = a.clone();
        prop_assert_eq!(
            rng::extract(&mut a, RandomArgs::UpTo(r1)),
            rng::extract(&mut b, RandomArgs::Between(1.0, r1))
        );
    }

    #[test]
    fn prop_integer_range_containment(
        seed in any::<f64>(),
        r1 in -1_000_000i32..1_000_000,
        span in 0i32..1_000_000,
    ) {
        let r1 = r1 as f64;
        let r2 = r1 + span as f64;
        let mut state = seeded(seed);
        for _ in 0..64 {
            let v = rng::extract(&mut state, RandomArgs::Between(r1, r2));
            prop_assert!(v >= r1 && v <= r2);
            prop_assert_eq!(v.fract(), 0.0);
        }
    }
}
