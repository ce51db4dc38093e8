//! Unit tests for gossip-fleet.

#[cfg(test)]
mod driver {
    use gossip_core::{GossipId, GossipSet, Route, StopId};

    use crate::Driver;

    fn universe(ids: &[u32]) -> GossipSet {
        ids.iter().copied().map(GossipId).collect()
    }

    fn driver(stops: &[u32], origin: u32) -> Driver {
        Driver::new(Route::from_raw(stops).unwrap(), GossipId(origin))
    }

    #[test]
    fn starts_at_first_stop_knowing_origin() {
        let d = driver(&[1, 2], 0);
        assert_eq!(d.current_stop(), StopId(1));
        assert_eq!(d.known_count(), 1);
        assert!(d.knows(GossipId(0)));
    }

    #[test]
    fn advance_steps_through_route() {
        let mut d = driver(&[1, 2], 0);
        d.advance();
        assert_eq!(d.current_stop(), StopId(2));
    }

    #[test]
    fn full_cycle_returns_to_start() {
        // Route of length L returns to its original stop after L advances.
        let mut d = driver(&[4, 2, 3, 4, 5], 0);
        let start = d.current_stop();
        for _ in 0..5 {
            d.advance();
        }
        assert_eq!(d.current_stop(), start);
    }

    #[test]
    fn knows_all_over_own_origin() {
        let d = driver(&[0], 3);
        assert!(d.knows_all(&universe(&[3])));
        assert!(!d.knows_all(&universe(&[3, 4])));
    }

    #[test]
    fn learn_is_monotone_and_idempotent() {
        let mut d = driver(&[0], 0);
        d.learn([GossipId(1), GossipId(2)]);
        assert_eq!(d.known_count(), 3);

        // Re-learning known items changes nothing.
        let before = d.known().clone();
        d.learn([GossipId(0), GossipId(1), GossipId(2)]);
        assert_eq!(*d.known(), before);
    }

    #[test]
    fn knows_all_after_learning_everything() {
        let mut d = driver(&[0], 0);
        d.learn([GossipId(1)]);
        assert!(d.knows_all(&universe(&[0, 1])));
    }

    #[test]
    fn reset_restores_origin_only() {
        let mut d = driver(&[1, 2, 3], 7);
        d.advance();
        d.learn([GossipId(8), GossipId(9)]);
        d.reset();
        assert_eq!(d.current_stop(), StopId(1));
        assert_eq!(d.known_count(), 1);
        assert!(d.knows(GossipId(7)));
    }
}

#[cfg(test)]
mod fleet {
    use gossip_core::{DriverId, GossipId, GossipSet, Route, StopId};

    use crate::{Driver, DriverFleet};

    fn fleet_of(routes: &[&[u32]]) -> DriverFleet {
        let mut fleet = DriverFleet::new();
        for (i, stops) in routes.iter().enumerate() {
            fleet.push(Driver::new(
                Route::from_raw(stops).unwrap(),
                GossipId(i as u32),
            ));
        }
        fleet
    }

    #[test]
    fn push_assigns_sequential_ids() {
        let mut fleet = DriverFleet::new();
        let a = fleet.push(Driver::new(Route::from_raw(&[0]).unwrap(), GossipId(0)));
        let b = fleet.push(Driver::new(Route::from_raw(&[1]).unwrap(), GossipId(1)));
        assert_eq!(a, DriverId(0));
        assert_eq!(b, DriverId(1));
        assert_eq!(fleet.len(), 2);
    }

    #[test]
    fn get_unknown_id_errors() {
        let fleet = fleet_of(&[&[0]]);
        assert!(fleet.get(DriverId(5)).is_err());
    }

    #[test]
    fn advance_all_moves_every_driver() {
        let mut fleet = fleet_of(&[&[1, 2], &[3, 4]]);
        fleet.advance_all();
        assert_eq!(fleet.get(DriverId(0)).unwrap().current_stop(), StopId(2));
        assert_eq!(fleet.get(DriverId(1)).unwrap().current_stop(), StopId(4));
    }

    #[test]
    fn all_know_vacuous_for_empty_fleet() {
        let fleet = DriverFleet::new();
        let universe: GossipSet = [GossipId(0)].into_iter().collect();
        assert!(fleet.all_know(&universe));
    }

    #[test]
    fn all_know_requires_every_driver() {
        let mut fleet = fleet_of(&[&[0], &[1]]);
        let universe: GossipSet = [GossipId(0), GossipId(1)].into_iter().collect();
        assert!(!fleet.all_know(&universe));

        fleet.get_mut(DriverId(0)).unwrap().learn([GossipId(1)]);
        assert!(!fleet.all_know(&universe), "driver 1 still ignorant");

        fleet.get_mut(DriverId(1)).unwrap().learn([GossipId(0)]);
        assert!(fleet.all_know(&universe));
    }

    #[test]
    fn reset_all_restores_every_driver() {
        let mut fleet = fleet_of(&[&[1, 2], &[3, 4]]);
        fleet.advance_all();
        fleet.get_mut(DriverId(0)).unwrap().learn([GossipId(1)]);
        fleet.reset_all();
        assert_eq!(fleet.get(DriverId(0)).unwrap().current_stop(), StopId(1));
        assert_eq!(fleet.get(DriverId(0)).unwrap().known_count(), 1);
    }
}

#[cfg(test)]
mod synth {
    use gossip_core::SimRng;

    use crate::random_routes;

    #[test]
    fn generates_requested_count_within_bounds() {
        let mut rng = SimRng::new(42);
        let routes = random_routes(20, 10, 2..=6, &mut rng).unwrap();
        assert_eq!(routes.len(), 20);
        for route in &routes {
            assert!((2..=6).contains(&route.len()));
            assert!(route.stops().iter().all(|s| s.0 < 10));
        }
    }

    #[test]
    fn same_seed_same_fleet() {
        let a = random_routes(10, 5, 1..=4, &mut SimRng::new(7)).unwrap();
        let b = random_routes(10, 5, 1..=4, &mut SimRng::new(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_length_range_rejected() {
        let mut rng = SimRng::new(0);
        assert!(random_routes(1, 5, 0..=3, &mut rng).is_err());
    }

    #[test]
    fn empty_stop_universe_rejected() {
        let mut rng = SimRng::new(0);
        assert!(random_routes(1, 0, 1..=3, &mut rng).is_err());
    }
}
