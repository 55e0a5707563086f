use serde::Serialize;

use loyalty_core::{LoyaltyState, LOYALTY_STATES};

/// One legend row, in table order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub state: LoyaltyState,
    pub color: &'static str,
    pub threshold: f64,
}

pub fn legend() -> Vec<LegendEntry> {
    LOYALTY_STATES
        .iter()
        .map(|band| LegendEntry {
            state: band.state,
            color: band.color,
            threshold: band.threshold,
        })
        .collect()
}
