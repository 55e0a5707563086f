//! Loyalty states and the ordered threshold table.
//!
//! `LOYALTY_STATES` is evaluated top to bottom: the first band whose
//! threshold is at or below the health score wins. Thresholds strictly
//! decrease and the last band starts at 0, so every score in `[0, 100]`
//! lands in exactly one band.

use serde::{Deserialize, Serialize};

/// Discrete relationship state, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LoyaltyState {
    Healthy,
    Stable,
    #[serde(rename = "At Risk")]
    AtRisk,
    Unstable,
    Toxic,
}

impl LoyaltyState {
    /// Display name.
    pub fn as_str(self) -> &'static str {
        match self {
            LoyaltyState::Healthy => "Healthy",
            LoyaltyState::Stable => "Stable",
            LoyaltyState::AtRisk => "At Risk",
            LoyaltyState::Unstable => "Unstable",
            LoyaltyState::Toxic => "Toxic",
        }
    }

    /// Table entry for this state.
    pub fn band(self) -> &'static StateBand {
        let idx = match self {
            LoyaltyState::Healthy => 0,
            LoyaltyState::Stable => 1,
            LoyaltyState::AtRisk => 2,
            LoyaltyState::Unstable => 3,
            LoyaltyState::Toxic => 4,
        };
        &LOYALTY_STATES[idx]
    }

    /// Display color (hex, `#rrggbb`).
    pub fn color(self) -> &'static str {
        self.band().color
    }

    /// Minimum health score for this state.
    pub fn threshold(self) -> f64 {
        self.band().threshold
    }

    /// Classify a health score against `LOYALTY_STATES`.
    pub fn classify(health_score: f64) -> LoyaltyState {
        LOYALTY_STATES
            .iter()
            .find(|band| health_score >= band.threshold)
            .map(|band| band.state)
            .unwrap_or(LoyaltyState::Toxic)
    }
}

impl std::fmt::Display for LoyaltyState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the state table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StateBand {
    pub state: LoyaltyState,
    pub color: &'static str,
    /// Inclusive lower bound on the health score.
    pub threshold: f64,
}

/// Ordered state table, highest threshold first.
pub static LOYALTY_STATES: [StateBand; 5] = [
    StateBand { state: LoyaltyState::Healthy, color: "#2ecc71", threshold: 75.0 },
    StateBand { state: LoyaltyState::Stable, color: "#3498db", threshold: 60.0 },
    StateBand { state: LoyaltyState::AtRisk, color: "#f1c40f", threshold: 50.0 },
    StateBand { state: LoyaltyState::Unstable, color: "#e67e22", threshold: 40.0 },
    StateBand { state: LoyaltyState::Toxic, color: "#e74c3c", threshold: 0.0 },
];
