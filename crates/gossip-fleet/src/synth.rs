//! Seeded synthetic route generation for demos and stress tests.
//!
//! Real deployments feed actual timetables into the engine; demos and
//! stress tests need plausible fleets on demand.  Generation is driven by
//! [`SimRng`] so the same seed always yields the same fleet.

use std::ops::RangeInclusive;

use gossip_core::{GossipError, GossipResult, Route, SimRng, StopId};

/// Generate `driver_count` random routes over a universe of `stop_count`
/// stops, each with a length drawn uniformly from `route_len`.
///
/// Fails with [`GossipError::Config`] if the stop universe is empty or the
/// length range starts at zero (an empty route is never valid).
pub fn random_routes(
    driver_count: usize,
    stop_count:   u32,
    route_len:    RangeInclusive<usize>,
    rng:          &mut SimRng,
) -> GossipResult<Vec<Route>> {
    if stop_count == 0 {
        return Err(GossipError::Config(
            "stop universe must contain at least one stop".into(),
        ));
    }
    if *route_len.start() == 0 {
        return Err(GossipError::Config(
            "route length range must start at 1 or more".into(),
        ));
    }

    (0..driver_count)
        .map(|_| {
            let len = rng.gen_range(route_len.clone());
            let stops = (0..len)
                .map(|_| StopId(rng.gen_range(0..stop_count)))
                .collect();
            Route::new(stops)
        })
        .collect()
}
