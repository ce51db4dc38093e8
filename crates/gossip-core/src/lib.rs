//! `gossip-core` — foundational types for the `rust_gossip` simulator.
//!
//! This crate is a dependency of every other `gossip-*` crate.  It
//! intentionally has no `gossip-*` dependencies and minimal external ones
//! (only `rand`, `rustc-hash`, and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `DriverId`, `StopId`, `GossipId`                      |
//! | [`route`]   | `Route` — non-empty cyclic stop sequence              |
//! | [`time`]    | `Tick`, `SimConfig`                                   |
//! | [`rng`]     | `SimRng` (seeded, reproducible)                       |
//! | [`error`]   | `GossipError`, `GossipResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod rng;
pub mod route;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{GossipError, GossipResult};
pub use ids::{DriverId, GossipId, StopId};
pub use rng::SimRng;
pub use route::Route;
pub use time::{SimConfig, Tick, DEFAULT_HORIZON_TICKS};

/// Set of gossip items, keyed by interned [`GossipId`].
///
/// FxHash beats SipHash on small integer keys, and gossip sets are compared
/// and unioned on every tick of the hot loop.
pub type GossipSet = rustc_hash::FxHashSet<GossipId>;
