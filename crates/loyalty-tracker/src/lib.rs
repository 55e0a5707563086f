//! Loyalty tracker library entry.
//!
//! Wires the strict config loader, the shared tracker handle, the tracker
//! registry, and the presentation helpers around `loyalty-core`. It is
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod config;
pub mod registry;
pub mod report;
pub mod tracker;

pub use registry::TrackerRegistry;
pub use tracker::Tracker;
