//! The `Sim` struct and its tick loop.

use std::fmt;

use gossip_core::{DriverId, GossipId, GossipSet, Route, SimConfig, StopId, Tick};
use gossip_fleet::{Driver, DriverFleet};
use rustc_hash::FxHashMap;

use crate::{SimError, SimObserver, SimResult};

// ── Convergence ───────────────────────────────────────────────────────────────

/// Terminal outcome of a simulation run.
///
/// `Never` is a first-class result, not an error: callers branch on it
/// explicitly.  `Display` renders the converged tick count as a bare number
/// and non-convergence as the literal `never`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Convergence {
    /// Every driver knew the full gossip universe at this tick (the minimum
    /// such tick).
    Converged(Tick),
    /// The horizon was exhausted with at least one driver still ignorant.
    Never,
}

impl Convergence {
    /// The converged tick, if any.
    pub fn tick(self) -> Option<Tick> {
        match self {
            Convergence::Converged(t) => Some(t),
            Convergence::Never        => None,
        }
    }

    pub fn is_converged(self) -> bool {
        matches!(self, Convergence::Converged(_))
    }
}

impl fmt::Display for Convergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Convergence::Converged(t) => write!(f, "{}", t.0),
            Convergence::Never        => write!(f, "never"),
        }
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation engine.
///
/// Owns the [`DriverFleet`], the interned gossip label table, and the gossip
/// universe (the union of every driver's originating item).  Drivers are
/// registered one at a time before the first [`run`][Self::run]; after that
/// the fleet is frozen and registration fails with
/// [`SimError::AlreadyStarted`].
///
/// `run` is idempotent: it resets all driver state (cursors and knowledge)
/// before searching, so calling it twice yields the same outcome.
pub struct Sim {
    /// Global configuration (horizon, snapshot interval, seed).
    pub config: SimConfig,

    fleet:     DriverFleet,
    universe:  GossipSet,
    /// Interned label table: `labels[id.index()]` is the caller-supplied
    /// string for `GossipId(id)`.
    labels:    Vec<String>,
    label_ids: FxHashMap<String, GossipId>,
    tick:      Tick,
    started:   bool,
}

impl Sim {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            fleet:     DriverFleet::new(),
            universe:  GossipSet::default(),
            labels:    Vec::new(),
            label_ids: FxHashMap::default(),
            tick:      Tick::ZERO,
            started:   false,
        }
    }

    // ── Registration ──────────────────────────────────────────────────────

    /// Register a driver with its route and originating gossip item.
    ///
    /// The route must be non-empty (`GossipError::EmptyRoute` otherwise).
    /// Registering the same label twice makes both drivers originators of
    /// the one interned item.  Fails with [`SimError::AlreadyStarted`] once
    /// a run has begun.
    pub fn register(
        &mut self,
        stops:  Vec<StopId>,
        gossip: impl Into<String>,
    ) -> SimResult<DriverId> {
        if self.started {
            return Err(SimError::AlreadyStarted);
        }
        let route = Route::new(stops)?;
        let item = self.intern(gossip.into());
        self.universe.insert(item);
        Ok(self.fleet.push(Driver::new(route, item)))
    }

    /// Convenience registration from raw stop numbers.
    pub fn register_raw(&mut self, stops: &[u32], gossip: &str) -> SimResult<DriverId> {
        self.register(stops.iter().copied().map(StopId).collect(), gossip)
    }

    fn intern(&mut self, label: String) -> GossipId {
        if let Some(&id) = self.label_ids.get(&label) {
            return id;
        }
        let id = GossipId(self.labels.len() as u32);
        self.labels.push(label.clone());
        self.label_ids.insert(label, id);
        id
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn fleet(&self) -> &DriverFleet {
        &self.fleet
    }

    /// The full gossip universe — the convergence target.
    pub fn universe(&self) -> &GossipSet {
        &self.universe
    }

    /// The caller-supplied label for an interned gossip item.
    pub fn gossip_label(&self, item: GossipId) -> Option<&str> {
        self.labels.get(item.index()).map(String::as_str)
    }

    pub fn driver_count(&self) -> usize {
        self.fleet.len()
    }

    pub fn gossip_count(&self) -> usize {
        self.labels.len()
    }

    /// The tick counter as of the last processed tick.
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    // ── The bounded convergence search ────────────────────────────────────

    /// Find the minimum tick at which every driver knows every gossip item.
    ///
    /// Runs at most `config.horizon_ticks` ticks.  Each tick: exchange
    /// between co-located drivers, test convergence, and only then advance —
    /// so drivers meeting at their starting stops converge at tick 1.
    ///
    /// A fleet of one driver (or none) is vacuously converged at tick 1.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> Convergence {
        // Reset so repeated runs search from the same initial state.
        self.started = true;
        self.tick = Tick::ZERO;
        self.fleet.reset_all();

        for t in 1..=self.config.horizon_ticks {
            let tick = Tick(t);
            self.tick = tick;
            observer.on_tick_start(tick);

            let meetings = self.exchange_phase();
            let converged = self.fleet.all_know(&self.universe);

            observer.on_tick_end(tick, meetings);
            let interval = self.config.output_interval_ticks;
            if interval > 0 && t.is_multiple_of(interval) {
                observer.on_snapshot(tick, &self.fleet, &self.universe);
            }

            if converged {
                observer.on_sim_end(tick);
                return Convergence::Converged(tick);
            }

            self.fleet.advance_all();
        }

        observer.on_sim_end(self.tick);
        Convergence::Never
    }

    // ── Exchange phase ────────────────────────────────────────────────────

    /// Perform all same-stop gossip exchanges for the current tick and
    /// return the number of co-located driver pairs.
    ///
    /// Every group of co-located drivers pools the union of its members'
    /// pre-tick knowledge, then every member learns the pool.  This is
    /// equivalent to exchanging between every unordered pair over
    /// start-of-scan snapshots, and makes order independence structural:
    /// nothing learned this tick can leak into another exchange this tick.
    fn exchange_phase(&mut self) -> usize {
        let groups = build_stop_index(&self.fleet);

        let mut meetings = 0;

        #[cfg(not(feature = "parallel"))]
        let pools: Vec<(Vec<DriverId>, GossipSet)> = groups
            .into_values()
            .filter(|group| group.len() >= 2)
            .map(|group| {
                let pool = pooled_knowledge(&self.fleet, &group);
                (group, pool)
            })
            .collect();

        #[cfg(feature = "parallel")]
        let pools: Vec<(Vec<DriverId>, GossipSet)> = {
            use rayon::prelude::*;

            // Pools are computed read-only against the pre-tick fleet state;
            // the apply loop below is the sequential write barrier.
            let groups: Vec<Vec<DriverId>> = groups
                .into_values()
                .filter(|group| group.len() >= 2)
                .collect();
            groups
                .into_par_iter()
                .map(|group| {
                    let pool = pooled_knowledge(&self.fleet, &group);
                    (group, pool)
                })
                .collect()
        };

        for (group, pool) in pools {
            meetings += group.len() * (group.len() - 1) / 2;
            for &driver in &group {
                self.fleet.as_mut_slice()[driver.index()].learn(pool.iter().copied());
            }
        }

        meetings
    }
}

// ── Stop index helpers ────────────────────────────────────────────────────────

/// Build a `StopId → Vec<DriverId>` index of all drivers at their current
/// stops.  Time complexity: O(driver_count).
fn build_stop_index(fleet: &DriverFleet) -> FxHashMap<StopId, Vec<DriverId>> {
    let mut index: FxHashMap<StopId, Vec<DriverId>> = FxHashMap::default();
    for (i, driver) in fleet.iter().enumerate() {
        index
            .entry(driver.current_stop())
            .or_default()
            .push(DriverId(i as u32));
    }
    index
}

/// Union of the known-gossip sets of every driver in `group`, taken before
/// any of them mutates this tick.
fn pooled_knowledge(fleet: &DriverFleet, group: &[DriverId]) -> GossipSet {
    let drivers = fleet.as_slice();
    let mut pool = GossipSet::default();
    for &driver in group {
        pool.extend(drivers[driver.index()].known().iter().copied());
    }
    pool
}
