//! Data model shared by the engine, the history log, and presentation layers.
//!
//! - `input`: validated, clamped raw signals.
//! - `state`: loyalty states and the ordered threshold table.
//! - `risk`: risk-factor flags and their trigger rules.
//! - `record`: the derived, immutable per-measurement record.

pub mod input;
pub mod record;
pub mod risk;
pub mod state;

pub use input::RawInput;
pub use record::{Assessment, MetricRecord};
pub use risk::RiskFactor;
pub use state::{LoyaltyState, StateBand, LOYALTY_STATES};
