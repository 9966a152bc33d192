//! Property-Based Test Generators
//!
//! Proptest strategies for generating random test data that respects the
//! domain invariants (ids non-empty, `reserved <= total`, versions >= 1).

use domain_fleet::{Fleet, FleetState};
use domain_resource::{ResourcePool, ResourceType};
use proptest::prelude::*;

/// Strategy for generating entity identifiers
pub fn entity_id_strategy() -> impl Strategy<Value = String> {
    (1u32..100_000u32).prop_map(|n| format!("entity-{n}"))
}

/// Strategy for generating initial version counters
pub fn version_strategy() -> impl Strategy<Value = u64> {
    1u64..1_000u64
}

/// Strategy for generating fleet lifecycle states
pub fn fleet_state_strategy() -> impl Strategy<Value = FleetState> {
    prop_oneof![
        Just(FleetState::Docked),
        Just(FleetState::Preparing),
        Just(FleetState::Ready),
        Just(FleetState::Deployed),
        Just(FleetState::InBattle),
        Just(FleetState::Victorious),
        Just(FleetState::Destroyed),
        Just(FleetState::FailedPreparation),
    ]
}

/// Strategy for generating resource categories
pub fn resource_type_strategy() -> impl Strategy<Value = ResourceType> {
    prop_oneof![
        Just(ResourceType::Fuel),
        Just(ResourceType::HyperdriveCore),
        Just(ResourceType::BattleDroids),
    ]
}

/// Strategy for generating fleets with a random id, name, state, and
/// initial version
pub fn fleet_strategy() -> impl Strategy<Value = Fleet> {
    (
        entity_id_strategy(),
        (1u32..10_000u32).prop_map(|n| format!("Fleet {n}")),
        fleet_state_strategy(),
        version_strategy(),
    )
        .prop_map(|(id, name, state, version)| {
            let mut fleet = Fleet::new(id, name);
            fleet.state = state;
            fleet.version = version;
            fleet
        })
}

/// Strategy for generating resource pools with `reserved <= total` and a
/// random initial version
pub fn resource_pool_strategy() -> impl Strategy<Value = ResourcePool> {
    (entity_id_strategy(), resource_type_strategy(), 0u64..10_000u64)
        .prop_flat_map(|(id, resource_type, total)| {
            (
                Just(id),
                Just(resource_type),
                Just(total),
                0u64..=total,
                version_strategy(),
            )
        })
        .prop_map(|(id, resource_type, total, reserved, version)| {
            let mut pool = ResourcePool::new(id, resource_type, total);
            pool.reserved = reserved;
            pool.version = version;
            pool
        })
}
