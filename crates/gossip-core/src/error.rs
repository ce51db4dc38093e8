//! Simulator error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `GossipError` via `From` impls, or keep them separate and wrap
//! `GossipError` as one variant.  Both patterns are acceptable; prefer
//! whichever keeps error sites clean.

use thiserror::Error;

use crate::DriverId;

/// The top-level error type for `gossip-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum GossipError {
    /// A route with zero stops has no current stop.  Rejected at
    /// construction time, never silently defaulted.
    #[error("route is empty — a driver needs at least one stop")]
    EmptyRoute,

    #[error("driver {0} not found")]
    DriverNotFound(DriverId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `gossip-*` crates.
pub type GossipResult<T> = Result<T, GossipError>;
