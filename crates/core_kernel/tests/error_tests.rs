//! Tests for the storage error taxonomy

use core_kernel::StorageError;

#[test]
fn test_not_found_message_names_kind_and_id() {
    let error = StorageError::not_found("Fleet", "f-missing");
    let message = error.to_string();
    assert!(message.contains("Fleet"));
    assert!(message.contains("f-missing"));
}

#[test]
fn test_duplicate_message_names_kind_and_id() {
    let error = StorageError::duplicate("ResourcePool", "pool-fuel");
    let message = error.to_string();
    assert!(message.contains("ResourcePool"));
    assert!(message.contains("pool-fuel"));
}

#[test]
fn test_conflict_message_reports_versions() {
    let error = StorageError::conflict("Command", "c1", 4, 7);
    let message = error.to_string();
    assert!(message.contains("expected version 4"));
    assert!(message.contains("was 7"));
}

#[test]
fn test_predicates_are_mutually_exclusive() {
    let not_found = StorageError::not_found("Fleet", "f1");
    let duplicate = StorageError::duplicate("Fleet", "f1");
    let conflict = StorageError::conflict("Fleet", "f1", 1, 2);

    assert!(not_found.is_not_found());
    assert!(!not_found.is_duplicate());
    assert!(!not_found.is_conflict());

    assert!(duplicate.is_duplicate());
    assert!(!duplicate.is_not_found());
    assert!(!duplicate.is_conflict());

    assert!(conflict.is_conflict());
    assert!(!conflict.is_not_found());
    assert!(!conflict.is_duplicate());
}

#[test]
fn test_every_variant_carries_the_entity_id() {
    for error in [
        StorageError::not_found("Fleet", "f1"),
        StorageError::duplicate("Fleet", "f1"),
        StorageError::conflict("Fleet", "f1", 1, 2),
    ] {
        assert_eq!(error.entity_id(), "f1");
        assert_eq!(error.entity_kind(), "Fleet");
    }
}
