//! `Route` — a driver's fixed, cyclic sequence of stops.
//!
//! A route is a loop, not a path with an endpoint: after the last stop the
//! driver returns to the first.  Stops may repeat within a route.  The
//! sequence is immutable for the driver's lifetime.

use crate::{GossipError, GossipResult, StopId};

/// A non-empty, ordered sequence of stops traversed cyclically.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    stops: Vec<StopId>,
}

impl Route {
    /// Build a route from a stop sequence.
    ///
    /// Fails with [`GossipError::EmptyRoute`] if `stops` is empty — an empty
    /// route has no current stop and is rejected at construction rather than
    /// silently defaulted.
    pub fn new(stops: Vec<StopId>) -> GossipResult<Self> {
        if stops.is_empty() {
            return Err(GossipError::EmptyRoute);
        }
        Ok(Self { stops })
    }

    /// Convenience constructor from raw stop numbers.
    pub fn from_raw(stops: &[u32]) -> GossipResult<Self> {
        Self::new(stops.iter().copied().map(StopId).collect())
    }

    /// Number of stops in one full cycle.  Always ≥ 1.
    #[inline]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// The stop at `cursor`, which must be in `[0, len())`.
    #[inline]
    pub fn stop(&self, cursor: usize) -> StopId {
        self.stops[cursor]
    }

    /// The cursor one step after `cursor`, wrapping at the end of the cycle.
    #[inline]
    pub fn next_cursor(&self, cursor: usize) -> usize {
        (cursor + 1) % self.stops.len()
    }

    /// Read-only view of the full stop sequence.
    pub fn stops(&self) -> &[StopId] {
        &self.stops
    }
}
