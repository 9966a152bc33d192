//! Tests for the persistence context and the repository aliases it bundles

use core_kernel::Repository;
use domain_fleet::FleetState;
use domain_resource::ResourceType;
use domain_command::CommandStatus;
use infra_memory::{CommandRepository, FleetRepository, PersistenceContext, ResourcePoolRepository};
use test_utils::{
    assert_conflict, CommandBuilder, CommandFixtures, FleetBuilder, FleetFixtures, IdFixtures,
    PoolFixtures,
};

// ============================================================================
// Context Tests
// ============================================================================

mod context_tests {
    use super::*;

    #[test]
    fn test_new_context_starts_empty() {
        let ctx = PersistenceContext::new();

        assert!(ctx.fleets.is_empty());
        assert!(ctx.commands.is_empty());
        assert!(ctx.resource_pools.is_empty());
    }

    #[test]
    fn test_contexts_have_independent_stores() {
        let ctx1 = PersistenceContext::new();
        let ctx2 = PersistenceContext::new();

        ctx1.fleets.create(FleetFixtures::alpha()).unwrap();

        assert!(ctx1.fleets.get("f1").is_some());
        assert!(ctx2.fleets.get("f1").is_none());
    }

    #[test]
    fn test_context_repos_support_create_and_get() {
        let ctx = PersistenceContext::new();

        ctx.fleets.create(FleetFixtures::alpha()).unwrap();
        ctx.commands.create(CommandFixtures::prepare_fleet()).unwrap();

        assert_eq!(ctx.fleets.get_required("f1").unwrap().name, "Alpha");
        assert_eq!(
            ctx.commands.get_required("c1").unwrap().command_type,
            "PrepareFleet"
        );
    }

    #[test]
    fn test_repositories_within_one_context_are_disjoint() {
        let ctx = PersistenceContext::new();

        // Same id in two repositories is two unrelated entities.
        ctx.fleets.create(FleetFixtures::alpha()).unwrap();
        assert!(ctx.commands.get("f1").is_none());
        assert!(ctx.resource_pools.get("f1").is_none());
    }
}

// ============================================================================
// Repository Alias Tests
// ============================================================================

mod alias_tests {
    use super::*;

    #[test]
    fn test_fleet_repository_clears_independently() {
        let repo = FleetRepository::new();
        repo.create(FleetFixtures::alpha()).unwrap();

        repo.clear();

        assert!(repo.get("f1").is_none());
    }

    #[test]
    fn test_command_repository_supports_create_and_get() {
        let repo = CommandRepository::new();
        repo.create(CommandFixtures::deploy_fleet()).unwrap();

        assert_eq!(
            repo.get_required("c2").unwrap().command_type,
            "DeployFleet"
        );
    }

    #[test]
    fn test_resource_pool_repository_supports_get_by_type() {
        let repo = ResourcePoolRepository::new();
        repo.create(PoolFixtures::fuel()).unwrap();

        let by_type = repo.get_by_type(ResourceType::Fuel).unwrap();
        assert_eq!(by_type.total, 1000);
        assert_eq!(
            repo.get_required("pool-fuel").unwrap().resource_type,
            ResourceType::Fuel
        );
    }

    #[test]
    fn test_create_honors_caller_chosen_initial_version() {
        let repo = FleetRepository::new();
        let id = IdFixtures::unique();
        let fleet = FleetBuilder::new().with_id(&id).with_version(5).build();
        repo.create(fleet).unwrap();

        assert_eq!(repo.get_required(&id).unwrap().version, 5);

        let updated = repo.update(&id, 5, &|f| f.clone()).unwrap();
        assert_eq!(updated.version, 6);
    }

    #[test]
    fn test_terminal_command_round_trip() {
        let repo = CommandRepository::new();
        let command = CommandBuilder::new()
            .with_id("c9")
            .with_type("DeployFleet")
            .with_status(CommandStatus::Failed)
            .build();
        repo.create(command).unwrap();

        assert!(repo.get_required("c9").unwrap().status.is_terminal());
    }

    #[test]
    fn test_one_pool_per_category_round_trip() {
        let repo = ResourcePoolRepository::new();
        for pool in PoolFixtures::one_per_type() {
            repo.create(pool).unwrap();
        }

        for resource_type in ResourceType::ALL {
            let pool = repo.get_by_type(resource_type).unwrap();
            assert_eq!(pool.resource_type, resource_type);
        }
    }
}

// ============================================================================
// End-to-End Scenario
// ============================================================================

mod scenario_tests {
    use super::*;

    /// The canonical optimistic-locking walk-through: prepare a fleet, then
    /// observe a stale writer being rejected.
    #[test]
    fn test_fleet_preparation_with_stale_second_writer() {
        let ctx = PersistenceContext::new();
        ctx.fleets.create(FleetFixtures::alpha()).unwrap();

        let prepared = ctx
            .fleets
            .update("f1", 1, &|fleet| {
                let mut next = fleet.clone();
                next.state = FleetState::Preparing;
                next
            })
            .unwrap();
        assert_eq!(prepared.version, 2);
        assert_eq!(prepared.state, FleetState::Preparing);

        // A second writer still holding version 1 loses the race.
        let error = ctx
            .fleets
            .update("f1", 1, &|fleet| {
                let mut next = fleet.clone();
                next.state = FleetState::Ready;
                next
            })
            .unwrap_err();
        assert_conflict(&error, 1, 2);

        let stored = ctx.fleets.get_required("f1").unwrap();
        assert_eq!(stored.state, FleetState::Preparing);
        assert_eq!(stored.version, 2);
    }

    /// Reservation flows through an updater; the repository stamps the
    /// version, the domain arithmetic keeps `reserved <= total`.
    #[test]
    fn test_resource_reservation_through_updater() {
        let ctx = PersistenceContext::new();
        ctx.resource_pools
            .create(PoolFixtures::hyperdrive_cores())
            .unwrap();

        let pool = ctx.resource_pools.get_by_type(ResourceType::HyperdriveCore).unwrap();
        let updated = ctx
            .resource_pools
            .update(&pool.id, pool.version, &|p| {
                let mut next = p.clone();
                next.reserve(3).expect("enough cores in fixture");
                next
            })
            .unwrap();

        assert_eq!(updated.version, 2);
        let view = ctx
            .resource_pools
            .availability(ResourceType::HyperdriveCore)
            .unwrap();
        assert_eq!(view.reserved, 3);
        assert_eq!(view.available, 5);
    }
}
