//! Custom Test Assertions
//!
//! Assertion helpers for the storage error taxonomy that give more
//! meaningful failure messages than bare `matches!` checks.

use core_kernel::StorageError;

/// Asserts that an error is NotFound for the given id
///
/// # Panics
///
/// Panics with the full error if the kind or id differ
pub fn assert_not_found(error: &StorageError, id: &str) {
    assert!(
        error.is_not_found(),
        "expected NotFound for '{id}', got {error:?}"
    );
    assert_eq!(
        error.entity_id(),
        id,
        "NotFound carried the wrong id: {error:?}"
    );
}

/// Asserts that an error is DuplicateId for the given id
pub fn assert_duplicate(error: &StorageError, id: &str) {
    assert!(
        error.is_duplicate(),
        "expected DuplicateId for '{id}', got {error:?}"
    );
    assert_eq!(
        error.entity_id(),
        id,
        "DuplicateId carried the wrong id: {error:?}"
    );
}

/// Asserts that an error is a Concurrency conflict reporting exactly the
/// given expected/actual version pair
pub fn assert_conflict(error: &StorageError, expected_version: u64, actual_version: u64) {
    match error {
        StorageError::Concurrency {
            expected, actual, ..
        } => {
            assert_eq!(
                (*expected, *actual),
                (expected_version, actual_version),
                "Concurrency carried the wrong versions: {error:?}"
            );
        }
        other => panic!("expected Concurrency, got {other:?}"),
    }
}
