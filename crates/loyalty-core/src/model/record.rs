//! Derived metric records.
//!
//! `Assessment` is what the engine produces from one input triple.
//! `MetricRecord` is that assessment once a history log has given it a
//! sequence number. Both are plain values; the log only ever hands out
//! shared references or clones, so a stored record never changes.

use serde::{Deserialize, Serialize};

use super::risk::RiskFactor;
use super::state::LoyaltyState;

/// Engine output for a single measurement (no sequence number yet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Clamped inputs.
    pub satisfaction: f64,
    pub dependency: f64,
    pub manipulation: f64,

    /// Derived sub-metrics, 0..=10, rounded to 2 decimals.
    pub true_satisfaction: f64,
    pub emotional_vulnerability: f64,
    pub autonomy: f64,
    pub power_imbalance: f64,

    /// Weighted composite, 0..=100, rounded to 1 decimal.
    pub health_score: f64,
    pub loyalty_state: LoyaltyState,
    /// Triggered flags in evaluation order.
    pub risk_factors: Vec<RiskFactor>,
}

impl Assessment {
    /// Attach a sequence number.
    pub fn into_record(self, sequence: u64) -> MetricRecord {
        MetricRecord {
            sequence,
            assessment: self,
        }
    }
}

/// A sequenced entry of a `HistoryLog`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    /// 1-based position in the owning log.
    pub sequence: u64,
    #[serde(flatten)]
    pub assessment: Assessment,
}

impl std::ops::Deref for MetricRecord {
    type Target = Assessment;

    fn deref(&self) -> &Assessment {
        &self.assessment
    }
}
