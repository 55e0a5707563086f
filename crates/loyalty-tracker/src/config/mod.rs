//! Tracker config loader (strict parsing).

pub mod schema;

use std::fs;

use loyalty_core::error::{LoyaltyError, Result};

pub use schema::{Measurement, OutputFormat, TrackerConfig, TrackerSection};

pub fn load_from_file(path: &str) -> Result<TrackerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| LoyaltyError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<TrackerConfig> {
    let cfg: TrackerConfig = serde_yaml::from_str(s)
        .map_err(|e| LoyaltyError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
