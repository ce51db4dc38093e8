//! Unit tests for gossip-core primitives.

#[cfg(test)]
mod ids {
    use crate::{DriverId, GossipId, StopId};

    #[test]
    fn index_roundtrip() {
        let id = DriverId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(DriverId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(DriverId(0) < DriverId(1));
        assert!(StopId(100) > StopId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(DriverId::INVALID.0, u32::MAX);
        assert_eq!(StopId::INVALID.0, u32::MAX);
        assert_eq!(GossipId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(DriverId(7).to_string(), "DriverId(7)");
        assert_eq!(StopId(3).to_string(), "StopId(3)");
    }
}

#[cfg(test)]
mod route {
    use crate::{GossipError, Route, StopId};

    #[test]
    fn empty_route_rejected() {
        let err = Route::new(vec![]).unwrap_err();
        assert!(matches!(err, GossipError::EmptyRoute));
    }

    #[test]
    fn single_stop_route() {
        let r = Route::from_raw(&[9]).unwrap();
        assert_eq!(r.len(), 1);
        assert_eq!(r.stop(0), StopId(9));
        // A one-stop loop wraps onto itself.
        assert_eq!(r.next_cursor(0), 0);
    }

    #[test]
    fn cursor_wraps_at_end() {
        let r = Route::from_raw(&[1, 2, 3]).unwrap();
        assert_eq!(r.next_cursor(0), 1);
        assert_eq!(r.next_cursor(1), 2);
        assert_eq!(r.next_cursor(2), 0);
    }

    #[test]
    fn repeated_stops_allowed() {
        let r = Route::from_raw(&[3, 1, 2, 3]).unwrap();
        assert_eq!(r.len(), 4);
        assert_eq!(r.stop(0), r.stop(3));
    }
}

#[cfg(test)]
mod time {
    use crate::{SimConfig, Tick, DEFAULT_HORIZON_TICKS};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn tick_display() {
        assert_eq!(Tick(37).to_string(), "T37");
    }

    #[test]
    fn default_horizon_is_one_shift() {
        let config = SimConfig::default();
        assert_eq!(config.horizon_ticks, 480);
        assert_eq!(config.end_tick(), Tick(DEFAULT_HORIZON_TICKS));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(99);
        let mut b = SimRng::new(99);
        for _ in 0..10 {
            let x: u64 = a.random();
            let y: u64 = b.random();
            assert_eq!(x, y);
        }
    }

    #[test]
    fn different_seeds_differ() {
        let mut a = SimRng::new(1);
        let mut b = SimRng::new(2);
        let x: u64 = a.random();
        let y: u64 = b.random();
        assert_ne!(x, y);
    }

    #[test]
    fn children_are_reproducible() {
        let mut root1 = SimRng::new(7);
        let mut root2 = SimRng::new(7);
        let x: u64 = root1.child(1).random();
        let y: u64 = root2.child(1).random();
        assert_eq!(x, y);
    }
}
