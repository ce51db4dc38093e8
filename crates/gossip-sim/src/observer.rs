//! Simulation observer trait for progress reporting and data collection.

use gossip_core::{GossipSet, Tick};
use gossip_fleet::DriverFleet;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, meetings: usize) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {meetings} meetings");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before the exchange scan.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the exchange scan and convergence check of each tick.
    ///
    /// `meetings` is the number of co-located driver pairs this tick.
    fn on_tick_end(&mut self, _tick: Tick, _meetings: usize) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks; never when the interval is 0).
    ///
    /// Provides read-only access to the fleet and the gossip universe so
    /// that output writers can record per-driver knowledge without the sim
    /// needing to know about any specific output format.
    fn on_snapshot(&mut self, _tick: Tick, _fleet: &DriverFleet, _universe: &GossipSet) {}

    /// Called once after the run completes, converged or not.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
