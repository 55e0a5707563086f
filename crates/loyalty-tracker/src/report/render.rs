//! Text and JSON renderers for a tracker's history.

use std::fmt::Write;

use serde::Serialize;

use loyalty_core::error::{LoyaltyError, Result};
use loyalty_core::MetricRecord;

use super::legend::{legend, LegendEntry};
use crate::config::OutputFormat;

/// Render with the configured format. `None` means there was nothing to draw.
pub fn render(format: OutputFormat, name: &str, records: &[MetricRecord]) -> Result<Option<String>> {
    if records.is_empty() {
        return Ok(None);
    }
    match format {
        OutputFormat::Text => Ok(render_text(name, records)),
        OutputFormat::Json => render_json(name, records).map(Some),
    }
}

/// Plain-text timeline. Returns `None` for an empty history.
pub fn render_text(name: &str, records: &[MetricRecord]) -> Option<String> {
    if records.is_empty() {
        return None;
    }

    let mut out = String::new();
    let _ = writeln!(out, "Loyalty Analysis for {name}");
    let _ = writeln!(
        out,
        "{:>4}  {:>6}  {:>6}  {:>6}  {:>6}  {:>6}  {:>6}  {:>6}  {:<9} risks",
        "step", "sat", "true", "dep", "manip", "vuln", "auto", "health", "state"
    );
    for r in records {
        let risks: Vec<&str> = r.risk_factors.iter().map(|f| f.as_str()).collect();
        let _ = writeln!(
            out,
            "{:>4}  {:>6.2}  {:>6.2}  {:>6.2}  {:>6.2}  {:>6.2}  {:>6.2}  {:>6.1}  {:<9} {}",
            r.sequence,
            r.satisfaction,
            r.true_satisfaction,
            r.dependency,
            r.manipulation,
            r.emotional_vulnerability,
            r.autonomy,
            r.health_score,
            r.loyalty_state.as_str(),
            if risks.is_empty() { "-".to_string() } else { risks.join(", ") },
        );
    }

    let _ = writeln!(out, "\nLoyalty States");
    for entry in legend() {
        let _ = writeln!(
            out,
            "  {:<9} {}  >= {}",
            entry.state.as_str(),
            entry.color,
            entry.threshold
        );
    }
    Some(out)
}

#[derive(Serialize)]
struct JsonReport<'a> {
    name: &'a str,
    records: &'a [MetricRecord],
    legend: Vec<LegendEntry>,
}

/// Pretty JSON document: name, records, and legend. Empty histories still
/// produce a document with an empty `records` array.
pub fn render_json(name: &str, records: &[MetricRecord]) -> Result<String> {
    let report = JsonReport {
        name,
        records,
        legend: legend(),
    };
    serde_json::to_string_pretty(&report)
        .map_err(|e| LoyaltyError::Internal(format!("json render failed: {e}")))
}
