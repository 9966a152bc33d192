//! Tests for the fleet domain entities

use core_kernel::Versioned;
use domain_fleet::{Fleet, FleetState};

#[test]
fn test_fleet_new_defaults() {
    let fleet = Fleet::new("f1", "Alpha");

    assert_eq!(fleet.id, "f1");
    assert_eq!(fleet.version, 1);
    assert_eq!(fleet.name, "Alpha");
    assert_eq!(fleet.state, FleetState::Docked);
}

#[test]
fn test_fleet_versioned_contract() {
    let mut fleet = Fleet::new("f1", "Alpha");

    assert_eq!(Fleet::KIND, "Fleet");
    assert_eq!(Versioned::id(&fleet), "f1");
    assert_eq!(fleet.version(), 1);

    fleet.set_version(7);
    assert_eq!(fleet.version(), 7);
}

#[test]
fn test_next_id_is_prefixed_and_unique() {
    let a = Fleet::next_id();
    let b = Fleet::next_id();

    assert!(a.starts_with("FLT-"));
    assert_ne!(a, b);
}

#[test]
fn test_fleet_state_wire_names() {
    // The HTTP layer exchanges states by their PascalCase names.
    let json = serde_json::to_string(&FleetState::FailedPreparation).unwrap();
    assert_eq!(json, "\"FailedPreparation\"");

    let state: FleetState = serde_json::from_str("\"InBattle\"").unwrap();
    assert_eq!(state, FleetState::InBattle);
}
