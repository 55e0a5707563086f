//! Metrics engine (pure, stateless).
//!
//! Computation rules:
//! - All formulas run on clamped inputs and unrounded intermediates.
//! - Risk rules and classification see unrounded values too.
//! - Rounding is the very last step and is presentation precision only.
//!
//! The weights and divisors below are fixed tuning constants. Keep them
//! literal.

use crate::error::Result;
use crate::model::{Assessment, LoyaltyState, RawInput, RiskFactor};

/// Manipulation divisor for the satisfaction discount (m=10 keeps 1/3).
const MANIPULATION_DISCOUNT_DIVISOR: f64 = 15.0;

const VULNERABILITY_DEPENDENCY_WEIGHT: f64 = 0.7;
const VULNERABILITY_MANIPULATION_WEIGHT: f64 = 0.3;

const AUTONOMY_DEPENDENCY_WEIGHT: f64 = 0.5;
const AUTONOMY_MANIPULATION_WEIGHT: f64 = 0.5;

const IMBALANCE_MANIPULATION_WEIGHT: f64 = 0.6;
const IMBALANCE_DEPENDENCY_WEIGHT: f64 = 0.4;

// Health score weights (sum to 100).
const HEALTH_TRUE_SATISFACTION_WEIGHT: f64 = 30.0;
const HEALTH_AUTONOMY_WEIGHT: f64 = 25.0;
const HEALTH_INDEPENDENCE_WEIGHT: f64 = 25.0;
const HEALTH_BALANCE_WEIGHT: f64 = 20.0;

const SCALE: f64 = 10.0;

const SUB_METRIC_DECIMALS: usize = 2;
const HEALTH_DECIMALS: usize = 1;

/// Validate, clamp, and assess a raw triple.
pub fn compute_raw(satisfaction: f64, dependency: f64, manipulation: f64) -> Result<Assessment> {
    let input = RawInput::new(satisfaction, dependency, manipulation)?;
    Ok(compute(input))
}

/// Assess a validated input. Total: never fails.
pub fn compute(input: RawInput) -> Assessment {
    let s = input.satisfaction();
    let d = input.dependency();
    let m = input.manipulation();

    let true_satisfaction = s * (1.0 - m / MANIPULATION_DISCOUNT_DIVISOR);
    let emotional_vulnerability =
        (d * VULNERABILITY_DEPENDENCY_WEIGHT + m * VULNERABILITY_MANIPULATION_WEIGHT).min(SCALE);
    let autonomy =
        (SCALE - (d * AUTONOMY_DEPENDENCY_WEIGHT + m * AUTONOMY_MANIPULATION_WEIGHT)).max(0.0);
    let power_imbalance =
        (m * IMBALANCE_MANIPULATION_WEIGHT + d * IMBALANCE_DEPENDENCY_WEIGHT).min(SCALE);

    let health_score = true_satisfaction / SCALE * HEALTH_TRUE_SATISFACTION_WEIGHT
        + autonomy / SCALE * HEALTH_AUTONOMY_WEIGHT
        + (SCALE - d) / SCALE * HEALTH_INDEPENDENCE_WEIGHT
        + (SCALE - power_imbalance) / SCALE * HEALTH_BALANCE_WEIGHT;

    let risk_factors = RiskFactor::evaluate(m, d, true_satisfaction, autonomy);
    let loyalty_state = LoyaltyState::classify(health_score);

    Assessment {
        satisfaction: s,
        dependency: d,
        manipulation: m,
        true_satisfaction: round_to(true_satisfaction, SUB_METRIC_DECIMALS),
        emotional_vulnerability: round_to(emotional_vulnerability, SUB_METRIC_DECIMALS),
        autonomy: round_to(autonomy, SUB_METRIC_DECIMALS),
        power_imbalance: round_to(power_imbalance, SUB_METRIC_DECIMALS),
        health_score: round_to(health_score, HEALTH_DECIMALS),
        loyalty_state,
        risk_factors,
    }
}

/// Round to `decimals` places using the exact binary value.
///
/// `(x * 10^n).round()` would round 19.649999... up to 19.7 because the
/// multiplication itself rounds; formatting inspects the exact value.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}
