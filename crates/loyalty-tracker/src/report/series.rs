//! Per-metric series for chart renderers.
//!
//! Values share the 0..=10 axis; the health score is scaled down by 10 so it
//! can be drawn as a background band on the same axis.

use serde::Serialize;

use loyalty_core::{Assessment, MetricRecord};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSeries {
    pub label: &'static str,
    pub color: &'static str,
    pub points: Vec<(u64, f64)>,
}

type Extract = fn(&Assessment) -> f64;

const METRICS: [(&str, &str, Extract); 6] = [
    ("Satisfaction", "#2ecc71", |a: &Assessment| a.satisfaction),
    ("True Satisfaction", "#27ae60", |a: &Assessment| a.true_satisfaction),
    ("Dependency", "#3498db", |a: &Assessment| a.dependency),
    ("Manipulation", "#e74c3c", |a: &Assessment| a.manipulation),
    ("Emotional Vulnerability", "#9b59b6", |a: &Assessment| a.emotional_vulnerability),
    ("Autonomy", "#f1c40f", |a: &Assessment| a.autonomy),
];

pub const HEALTH_ZONE_LABEL: &str = "Health Score Zone";
pub const HEALTH_ZONE_COLOR: &str = "#ecf0f1";

/// Plot series in legend order, health zone last. Empty input yields
/// series with no points.
pub fn series(records: &[MetricRecord]) -> Vec<MetricSeries> {
    let mut out: Vec<MetricSeries> = METRICS
        .iter()
        .map(|&(label, color, extract)| MetricSeries {
            label,
            color,
            points: records
                .iter()
                .map(|r| (r.sequence, extract(&r.assessment)))
                .collect(),
        })
        .collect();

    out.push(MetricSeries {
        label: HEALTH_ZONE_LABEL,
        color: HEALTH_ZONE_COLOR,
        points: records
            .iter()
            .map(|r| (r.sequence, r.health_score / 10.0))
            .collect(),
    });
    out
}
