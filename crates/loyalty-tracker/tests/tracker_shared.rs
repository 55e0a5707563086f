#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::thread;

use loyalty_core::LoyaltyState;
use loyalty_tracker::{config, Tracker, TrackerRegistry};

#[test]
fn tracker_from_config_replays_measurements() {
    let cfg = config::load_from_str(
        r#"
version: 1
tracker:
  name: "Customer Analysis"
measurements:
  - { satisfaction: 7, dependency: 3, manipulation: 2 }
  - { satisfaction: 2, dependency: 8, manipulation: 7 }
"#,
    )
    .unwrap();

    let tracker = Tracker::from_config(&cfg).unwrap();
    assert_eq!(tracker.name(), "Customer Analysis");

    let history = tracker.history().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].loyalty_state, LoyaltyState::Stable);
    assert_eq!(history[1].loyalty_state, LoyaltyState::Toxic);
    assert_eq!(tracker.latest().unwrap().unwrap().sequence, 2);
}

#[test]
fn clones_share_one_history() {
    let tracker = Tracker::new("shared");
    let other = tracker.clone();

    tracker.add_measurement(5.0, 5.0, 5.0).unwrap();
    let rec = other.add_measurement(6.0, 4.0, 3.0).unwrap();

    assert_eq!(rec.sequence, 2);
    assert_eq!(tracker.len().unwrap(), 2);
}

#[test]
fn concurrent_producers_keep_sequence_gapless() {
    let tracker = Tracker::new("concurrent");

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let tracker = tracker.clone();
            thread::spawn(move || {
                for i in 0..50 {
                    let x = f64::from(t * 50 + i) % 10.0;
                    tracker.add_measurement(x, 10.0 - x, x / 2.0).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let history = tracker.history().unwrap();
    assert_eq!(history.len(), 200);
    for (i, rec) in history.iter().enumerate() {
        assert_eq!(rec.sequence, i as u64 + 1);
    }
}

#[test]
fn rejected_measurement_does_not_advance_sequence() {
    let tracker = Tracker::new("strict");
    tracker.add_measurement(f64::INFINITY, 1.0, 1.0).expect_err("must fail");
    assert!(tracker.is_empty().unwrap());
    assert_eq!(tracker.add_measurement(1.0, 1.0, 1.0).unwrap().sequence, 1);
}

#[test]
fn registry_get_or_create_is_idempotent() {
    let registry = TrackerRegistry::new();
    assert!(registry.is_empty());

    let a = registry.get_or_create("alice");
    a.add_measurement(7.0, 3.0, 2.0).unwrap();

    let again = registry.get_or_create("alice");
    assert_eq!(again.len().unwrap(), 1);

    registry.get_or_create("bob");
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.names(), vec!["alice".to_string(), "bob".to_string()]);
    assert!(registry.get("carol").is_none());
}

#[test]
fn registry_insert_replaces_by_name() {
    let registry = TrackerRegistry::new();
    let first = Tracker::new("team");
    first.add_measurement(1.0, 1.0, 1.0).unwrap();

    assert!(registry.insert(first).is_none());
    let replaced = registry.insert(Tracker::new("team")).unwrap();
    assert_eq!(replaced.len().unwrap(), 1);
    assert!(registry.get("team").unwrap().is_empty().unwrap());
}

#[test]
fn bundled_demo_config_replays_reference_progression() {
    let cfg = config::load_from_file("../../tracker.yaml").unwrap();
    let tracker = Tracker::from_config(&cfg).unwrap();
    let history = tracker.history().unwrap();

    assert_eq!(history.len(), 21);
    assert_eq!(history[0].loyalty_state, LoyaltyState::Stable);
    assert_eq!(history[10].loyalty_state, LoyaltyState::Toxic);
    assert_eq!(history[20].loyalty_state, LoyaltyState::Stable);
}
