//! Named, shareable tracker.
//!
//! Wraps a `HistoryLog` behind a mutex so several producers can append
//! through cloned handles. Appends are serialized; reads take a snapshot.

use std::sync::{Arc, Mutex, MutexGuard};

use loyalty_core::error::{LoyaltyError, Result};
use loyalty_core::{HistoryLog, MetricRecord};

use crate::config::TrackerConfig;

#[derive(Clone)]
pub struct Tracker {
    inner: Arc<TrackerInner>,
}

struct TrackerInner {
    name: String,
    log: Mutex<HistoryLog>,
}

impl Tracker {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(TrackerInner {
                name: name.into(),
                log: Mutex::new(HistoryLog::new()),
            }),
        }
    }

    /// Build a tracker from config and replay its measurements.
    /// Returns Result so main can report bad input without panicking.
    pub fn from_config(cfg: &TrackerConfig) -> Result<Self> {
        let tracker = Self::new(cfg.tracker.name.clone());
        for m in &cfg.measurements {
            tracker.add_measurement(m.satisfaction, m.dependency, m.manipulation)?;
        }
        tracing::info!(
            tracker = %tracker.name(),
            measurements = cfg.measurements.len(),
            "tracker loaded"
        );
        Ok(tracker)
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Assess and append one measurement.
    pub fn add_measurement(
        &self,
        satisfaction: f64,
        dependency: f64,
        manipulation: f64,
    ) -> Result<MetricRecord> {
        self.lock()?.append(satisfaction, dependency, manipulation)
    }

    /// Snapshot of all records in insertion order.
    pub fn history(&self) -> Result<Vec<MetricRecord>> {
        Ok(self.lock()?.all().to_vec())
    }

    pub fn latest(&self) -> Result<Option<MetricRecord>> {
        Ok(self.lock()?.last().cloned())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> Result<MutexGuard<'_, HistoryLog>> {
        self.inner.log.lock().map_err(|_| {
            LoyaltyError::Internal(format!("history lock poisoned (tracker={})", self.inner.name))
        })
    }
}
