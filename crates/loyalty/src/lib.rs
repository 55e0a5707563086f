//! Top-level facade crate for the loyalty tracker.
//!
//! Re-exports the scoring core and the tracker library so users can depend on a single crate.

pub mod core {
    pub use loyalty_core::*;
}

pub mod tracker {
    pub use loyalty_tracker::*;
}
