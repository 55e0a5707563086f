use serde::Deserialize;

use loyalty_core::error::{LoyaltyError, Result};
use loyalty_core::model::input::clamp_signal;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrackerConfig {
    pub version: u32,

    #[serde(default)]
    pub tracker: TrackerSection,

    /// Replayed in order into the tracker. May be empty.
    #[serde(default)]
    pub measurements: Vec<Measurement>,
}

impl TrackerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(LoyaltyError::UnsupportedVersion);
        }

        self.tracker.validate()?;

        for (i, m) in self.measurements.iter().enumerate() {
            m.validate()
                .map_err(|e| LoyaltyError::InvalidInput(format!("measurements[{i}]: {e}")))?;
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrackerSection {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default)]
    pub output: OutputFormat,
}

impl Default for TrackerSection {
    fn default() -> Self {
        Self {
            name: default_name(),
            output: OutputFormat::default(),
        }
    }
}

impl TrackerSection {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(LoyaltyError::BadRequest("tracker.name must not be empty".into()));
        }
        Ok(())
    }
}

fn default_name() -> String {
    "Customer Analysis".into()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Measurement {
    pub satisfaction: f64,
    pub dependency: f64,
    pub manipulation: f64,
}

impl Measurement {
    fn validate(&self) -> Result<()> {
        clamp_signal("satisfaction", self.satisfaction)?;
        clamp_signal("dependency", self.dependency)?;
        clamp_signal("manipulation", self.manipulation)?;
        Ok(())
    }
}
