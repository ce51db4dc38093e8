//! `gossip-sim` — tick loop orchestrator for the rust_gossip simulator.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 1..=config.horizon_ticks:
//!   ① Exchange   — bucket drivers by current stop; every group of two or
//!                  more drivers pools its pre-tick knowledge and every
//!                  member learns the pool.
//!   ② Converged? — if every driver knows the full gossip universe, return
//!                  Convergence::Converged(tick).
//!   ③ Advance    — every driver moves one stop along its cyclic route.
//! exhausted → Convergence::Never
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Computes per-stop gossip pools on Rayon's thread pool. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gossip_core::SimConfig;
//! use gossip_sim::{NoopObserver, Sim};
//!
//! let mut sim = Sim::new(SimConfig::default());
//! sim.register_raw(&[1, 2], "engine trouble")?;
//! sim.register_raw(&[3, 2], "new timetable")?;
//! let outcome = sim.run(&mut NoopObserver);
//! println!("{outcome}"); // "2"
//! ```

pub mod error;
pub mod observer;
pub mod sim;


pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Convergence, Sim};
