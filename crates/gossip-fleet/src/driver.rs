//! `Driver` — one simulated bus driver.
//!
//! A driver owns three pieces of state: an immutable cyclic [`Route`], a
//! cursor into that route, and the set of gossip items currently known.
//! The knowledge set starts as the single originating item and only ever
//! grows (set union is the sole mutation).

use gossip_core::{GossipId, GossipSet, Route, StopId};

/// A single driver: route, position cursor, and known gossip.
///
/// # Invariants
///
/// - `cursor` is always a valid index into `route` (enforced by wrapping
///   arithmetic in [`advance`][Self::advance]).
/// - `known` is never empty after construction and never shrinks.
#[derive(Clone, Debug)]
pub struct Driver {
    route:  Route,
    cursor: usize,
    known:  GossipSet,
    /// The item this driver originated — retained so [`reset`][Self::reset]
    /// can restore the pre-run state for idempotent engine re-runs.
    origin: GossipId,
}

impl Driver {
    /// Create a driver at the first stop of `route`, knowing only `origin`.
    ///
    /// Route validity (non-emptiness) is enforced by [`Route::new`]; a
    /// `Driver` can therefore never exist without a current stop.
    pub fn new(route: Route, origin: GossipId) -> Self {
        let mut known = GossipSet::default();
        known.insert(origin);
        Self { route, cursor: 0, known, origin }
    }

    /// The stop this driver is currently at.
    #[inline]
    pub fn current_stop(&self) -> StopId {
        self.route.stop(self.cursor)
    }

    /// Move to the next stop, wrapping at the end of the route.
    #[inline]
    pub fn advance(&mut self) {
        self.cursor = self.route.next_cursor(self.cursor);
    }

    /// `true` iff this driver knows every item in `universe`.
    #[inline]
    pub fn knows_all(&self, universe: &GossipSet) -> bool {
        universe.is_subset(&self.known)
    }

    /// `true` iff this driver knows `item`.
    #[inline]
    pub fn knows(&self, item: GossipId) -> bool {
        self.known.contains(&item)
    }

    /// Union `items` into this driver's knowledge.  Learning already-known
    /// items is observably a no-op.
    pub fn learn<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = GossipId>,
    {
        self.known.extend(items);
    }

    /// Read-only view of the known-gossip set.
    #[inline]
    pub fn known(&self) -> &GossipSet {
        &self.known
    }

    /// Number of items currently known.
    #[inline]
    pub fn known_count(&self) -> usize {
        self.known.len()
    }

    /// The item this driver originated.
    #[inline]
    pub fn origin(&self) -> GossipId {
        self.origin
    }

    /// This driver's route.
    #[inline]
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Restore pre-run state: cursor to the first stop, knowledge back to
    /// the originating item alone.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.known.clear();
        self.known.insert(self.origin);
    }
}
