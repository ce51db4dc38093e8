//! `gossip-fleet` — driver state and fleet storage for the `rust_gossip`
//! simulator.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`driver`]   | `Driver` — route cursor + known-gossip set             |
//! | [`fleet`]    | `DriverFleet` — append-only collection, bulk helpers   |
//! | [`synth`]    | Seeded random route generation for demos/stress tests  |
//!
//! Drivers never reference the fleet, the engine, or each other; the engine
//! in `gossip-sim` reads driver state and instructs mutations.  Data flows
//! one way.

pub mod driver;
pub mod fleet;
pub mod synth;

#[cfg(test)]
mod tests;

pub use driver::Driver;
pub use fleet::DriverFleet;
pub use synth::random_routes;
