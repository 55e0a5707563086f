//! Raw input signals.
//!
//! Every signal lives on a 0..=10 scale. Finite values outside the scale are
//! clamped; NaN and infinities are rejected, since clamping them would
//! silently corrupt classification downstream.

use crate::error::{LoyaltyError, Result};

/// Lower bound of every input signal.
pub const SIGNAL_MIN: f64 = 0.0;
/// Upper bound of every input signal.
pub const SIGNAL_MAX: f64 = 10.0;

/// Validated and clamped (satisfaction, dependency, manipulation) triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawInput {
    satisfaction: f64,
    dependency: f64,
    manipulation: f64,
}

impl RawInput {
    /// Validate and clamp a raw triple.
    pub fn new(satisfaction: f64, dependency: f64, manipulation: f64) -> Result<Self> {
        Ok(Self {
            satisfaction: clamp_signal("satisfaction", satisfaction)?,
            dependency: clamp_signal("dependency", dependency)?,
            manipulation: clamp_signal("manipulation", manipulation)?,
        })
    }

    pub fn satisfaction(&self) -> f64 {
        self.satisfaction
    }

    pub fn dependency(&self) -> f64 {
        self.dependency
    }

    pub fn manipulation(&self) -> f64 {
        self.manipulation
    }
}

/// Clamp one finite signal into `[SIGNAL_MIN, SIGNAL_MAX]`.
pub fn clamp_signal(name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(LoyaltyError::InvalidInput(format!(
            "{name} must be finite, got {value}"
        )));
    }
    Ok(value.clamp(SIGNAL_MIN, SIGNAL_MAX))
}
