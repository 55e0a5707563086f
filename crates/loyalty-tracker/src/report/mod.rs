//! Presentation-side helpers.
//!
//! Everything here only reads `MetricRecord`s and the state table; nothing
//! feeds back into the engine. Renderers must treat an empty history as
//! "nothing to draw".

pub mod legend;
pub mod render;
pub mod series;

use loyalty_core::MetricRecord;

pub use legend::{legend, LegendEntry};
pub use render::{render, render_json, render_text};
pub use series::{series, MetricSeries};

/// Per-point label: state, health score, and any risk factors.
pub fn annotation(record: &MetricRecord) -> String {
    let mut label = format!(
        "{}\nHealth: {:.1}%",
        record.loyalty_state, record.health_score
    );
    if !record.risk_factors.is_empty() {
        let risks: Vec<&str> = record.risk_factors.iter().map(|r| r.as_str()).collect();
        label.push('\n');
        label.push_str(&risks.join(", "));
    }
    label
}
