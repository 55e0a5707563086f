//! Loyalty core: relationship-health metrics, state classification, and the
//! append-only history log.
//!
//! This crate holds the pure scoring engine and the data contract consumed by
//! presentation layers. It carries no runtime, I/O, or rendering dependencies
//! so it can be embedded anywhere.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! The only fallible path is non-finite input, surfaced as
//! `LoyaltyError::InvalidInput`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod engine;
pub mod error;
pub mod history;
pub mod model;

/// Shared result type.
pub use error::{ErrorCode, LoyaltyError, Result};

pub use engine::{compute, compute_raw};
pub use history::HistoryLog;
pub use model::{
    Assessment, LoyaltyState, MetricRecord, RawInput, RiskFactor, StateBand, LOYALTY_STATES,
};
