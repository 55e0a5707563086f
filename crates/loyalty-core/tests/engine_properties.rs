//! Range, clamping, partition, and monotonicity properties over input grids.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use loyalty_core::{compute_raw, Assessment, LoyaltyState, LOYALTY_STATES};

/// 0.0, 0.5, ..., 10.0
fn grid() -> impl Iterator<Item = f64> + Clone {
    (0..=20).map(|i| f64::from(i) * 0.5)
}

fn assess(s: f64, d: f64, m: f64) -> Assessment {
    compute_raw(s, d, m).unwrap()
}

#[test]
fn clamping_matches_bounds() {
    let top = assess(10.0, 10.0, 10.0);
    for v in [10.0, 10.5, 99.0, 1e12] {
        assert_eq!(assess(v, v, v), top);
    }

    let bottom = assess(0.0, 0.0, 0.0);
    for v in [0.0, -0.1, -99.0, -1e12] {
        assert_eq!(assess(v, v, v), bottom);
    }
}

#[test]
fn derived_values_stay_in_range() {
    for s in grid() {
        for d in grid() {
            for m in grid() {
                let a = assess(s, d, m);
                for (name, v) in [
                    ("true_satisfaction", a.true_satisfaction),
                    ("emotional_vulnerability", a.emotional_vulnerability),
                    ("autonomy", a.autonomy),
                    ("power_imbalance", a.power_imbalance),
                ] {
                    assert!((0.0..=10.0).contains(&v), "{name}={v} at ({s},{d},{m})");
                }
                assert!(
                    (0.0..=100.0).contains(&a.health_score),
                    "health_score={} at ({s},{d},{m})",
                    a.health_score
                );
            }
        }
    }
}

#[test]
fn every_score_maps_to_exactly_one_band() {
    for tenth in 0..=1000 {
        let score = f64::from(tenth) / 10.0;
        let state = LoyaltyState::classify(score);

        let idx = LOYALTY_STATES.iter().position(|b| b.state == state).unwrap();
        assert!(LOYALTY_STATES[idx].threshold <= score, "score={score}");
        if idx > 0 {
            assert!(score < LOYALTY_STATES[idx - 1].threshold, "score={score}");
        }
    }
}

#[test]
fn health_is_monotonic_in_each_signal() {
    for a in grid() {
        for b in grid() {
            let by_s: Vec<f64> = grid().map(|s| assess(s, a, b).health_score).collect();
            assert!(by_s.windows(2).all(|w| w[0] <= w[1]), "satisfaction d={a} m={b}");

            let by_d: Vec<f64> = grid().map(|d| assess(a, d, b).health_score).collect();
            assert!(by_d.windows(2).all(|w| w[0] >= w[1]), "dependency s={a} m={b}");

            let by_m: Vec<f64> = grid().map(|m| assess(a, b, m).health_score).collect();
            assert!(by_m.windows(2).all(|w| w[0] >= w[1]), "manipulation s={a} d={b}");
        }
    }
}

#[test]
fn state_band_brackets_rounded_score() {
    // Classification runs on the unrounded score; rounding moves it by at most 0.05.
    const SLACK: f64 = 0.05 + 1e-9;

    for s in grid() {
        for d in grid() {
            for m in grid() {
                let a = assess(s, d, m);
                let idx = LOYALTY_STATES
                    .iter()
                    .position(|b| b.state == a.loyalty_state)
                    .unwrap();

                assert!(
                    a.health_score + SLACK >= LOYALTY_STATES[idx].threshold,
                    "below band at ({s},{d},{m}): {} {}",
                    a.health_score,
                    a.loyalty_state
                );
                if idx > 0 {
                    assert!(
                        a.health_score - SLACK < LOYALTY_STATES[idx - 1].threshold,
                        "above band at ({s},{d},{m}): {} {}",
                        a.health_score,
                        a.loyalty_state
                    );
                }
            }
        }
    }
}
