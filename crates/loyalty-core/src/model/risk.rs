//! Risk-factor flags.

use serde::{Deserialize, Serialize};

/// Manipulation strictly above this raises `HighManipulation`.
pub const HIGH_MANIPULATION_ABOVE: f64 = 6.0;
/// Dependency strictly above this raises `HighDependency`.
pub const HIGH_DEPENDENCY_ABOVE: f64 = 7.0;
/// True satisfaction strictly below this raises `LowSatisfaction`.
pub const LOW_SATISFACTION_BELOW: f64 = 4.0;
/// Autonomy strictly below this raises `LowAutonomy`.
pub const LOW_AUTONOMY_BELOW: f64 = 3.0;

/// A named flag raised when a metric crosses its trigger threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskFactor {
    #[serde(rename = "High Manipulation")]
    HighManipulation,
    #[serde(rename = "High Dependency")]
    HighDependency,
    #[serde(rename = "Low Satisfaction")]
    LowSatisfaction,
    #[serde(rename = "Low Autonomy")]
    LowAutonomy,
}

impl RiskFactor {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskFactor::HighManipulation => "High Manipulation",
            RiskFactor::HighDependency => "High Dependency",
            RiskFactor::LowSatisfaction => "Low Satisfaction",
            RiskFactor::LowAutonomy => "Low Autonomy",
        }
    }

    /// Evaluate every rule in fixed order.
    ///
    /// Inputs are the clamped signals and the unrounded derived metrics.
    pub fn evaluate(
        manipulation: f64,
        dependency: f64,
        true_satisfaction: f64,
        autonomy: f64,
    ) -> Vec<RiskFactor> {
        let rules = [
            (manipulation > HIGH_MANIPULATION_ABOVE, RiskFactor::HighManipulation),
            (dependency > HIGH_DEPENDENCY_ABOVE, RiskFactor::HighDependency),
            (true_satisfaction < LOW_SATISFACTION_BELOW, RiskFactor::LowSatisfaction),
            (autonomy < LOW_AUTONOMY_BELOW, RiskFactor::LowAutonomy),
        ];
        rules
            .into_iter()
            .filter_map(|(hit, factor)| hit.then_some(factor))
            .collect()
    }
}

impl std::fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
