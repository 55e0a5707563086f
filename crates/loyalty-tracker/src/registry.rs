//! Named trackers shared across producers.

use dashmap::DashMap;

use crate::tracker::Tracker;

/// Tracker registry: `name -> Tracker`.
#[derive(Default)]
pub struct TrackerRegistry {
    trackers: DashMap<String, Tracker>,
}

impl TrackerRegistry {
    pub fn new() -> Self {
        Self {
            trackers: DashMap::new(),
        }
    }

    /// Return the tracker for `name`, creating an empty one if needed.
    pub fn get_or_create(&self, name: &str) -> Tracker {
        self.trackers
            .entry(name.to_string())
            .or_insert_with(|| {
                tracing::debug!(tracker = %name, "tracker created");
                Tracker::new(name)
            })
            .value()
            .clone()
    }

    pub fn get(&self, name: &str) -> Option<Tracker> {
        self.trackers.get(name).map(|r| r.value().clone())
    }

    /// Register an already-built tracker under its own name.
    /// Returns the tracker it replaced, if any.
    pub fn insert(&self, tracker: Tracker) -> Option<Tracker> {
        self.trackers.insert(tracker.name().to_string(), tracker)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.trackers.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.trackers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trackers.is_empty()
    }
}
