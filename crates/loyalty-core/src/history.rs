//! Append-only history of metric records.

use crate::engine;
use crate::error::Result;
use crate::model::MetricRecord;

/// Ordered, append-only log. Sequence numbers are exactly `1..=len()`.
///
/// Appending takes `&mut self`; callers with several producers must funnel
/// them through a lock.
#[derive(Debug, Default, Clone)]
pub struct HistoryLog {
    records: Vec<MetricRecord>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assess a raw triple and append the resulting record.
    ///
    /// Non-finite input is rejected and leaves the log unchanged.
    pub fn append(
        &mut self,
        satisfaction: f64,
        dependency: f64,
        manipulation: f64,
    ) -> Result<MetricRecord> {
        let assessment = engine::compute_raw(satisfaction, dependency, manipulation)
            .inspect_err(|e| tracing::warn!(error = %e, "measurement rejected"))?;

        let sequence = self.records.len() as u64 + 1;
        let record = assessment.into_record(sequence);
        tracing::debug!(
            sequence,
            health_score = record.health_score,
            state = %record.loyalty_state,
            risks = record.risk_factors.len(),
            "measurement recorded"
        );

        self.records.push(record.clone());
        Ok(record)
    }

    /// All records in insertion order. May be empty.
    pub fn all(&self) -> &[MetricRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MetricRecord> {
        self.records.iter()
    }

    pub fn last(&self) -> Option<&MetricRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a HistoryLog {
    type Item = &'a MetricRecord;
    type IntoIter = std::slice::Iter<'a, MetricRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
