//! `DriverFleet` — append-only driver collection with bulk helpers.
//!
//! Registration order defines identity: the `DriverId` of a driver is its
//! index in the fleet, so `fleet.get(id)` is a direct `Vec` access.
//! Membership is fixed once the simulation starts (the engine enforces this;
//! the fleet itself only supports appends).

use gossip_core::{DriverId, GossipError, GossipResult, GossipSet};

use crate::Driver;

/// Ordered collection of all drivers in a simulation.
#[derive(Default)]
pub struct DriverFleet {
    drivers: Vec<Driver>,
}

impl DriverFleet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a driver; its `DriverId` is the index it lands at.
    pub fn push(&mut self, driver: Driver) -> DriverId {
        let id = DriverId(self.drivers.len() as u32);
        self.drivers.push(driver);
        id
    }

    /// Number of registered drivers.
    #[inline]
    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    /// Shared access to one driver.
    pub fn get(&self, id: DriverId) -> GossipResult<&Driver> {
        self.drivers
            .get(id.index())
            .ok_or(GossipError::DriverNotFound(id))
    }

    /// Mutable access to one driver.
    pub fn get_mut(&mut self, id: DriverId) -> GossipResult<&mut Driver> {
        self.drivers
            .get_mut(id.index())
            .ok_or(GossipError::DriverNotFound(id))
    }

    /// Iterator over all drivers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Driver> {
        self.drivers.iter()
    }

    /// Direct slice access for hot-loop indexing by `DriverId::index()`.
    #[inline]
    pub fn as_slice(&self) -> &[Driver] {
        &self.drivers
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Driver] {
        &mut self.drivers
    }

    /// Iterator over all `DriverId`s in ascending index order.
    pub fn driver_ids(&self) -> impl Iterator<Item = DriverId> + '_ {
        (0..self.drivers.len() as u32).map(DriverId)
    }

    // ── Bulk operations used by the engine's tick loop ────────────────────

    /// Advance every driver one stop along its route.
    pub fn advance_all(&mut self) {
        for driver in &mut self.drivers {
            driver.advance();
        }
    }

    /// `true` iff every driver knows every item in `universe`.
    ///
    /// Vacuously true for an empty fleet.
    pub fn all_know(&self, universe: &GossipSet) -> bool {
        self.drivers.iter().all(|d| d.knows_all(universe))
    }

    /// Restore every driver to its pre-run state.
    pub fn reset_all(&mut self) {
        for driver in &mut self.drivers {
            driver.reset();
        }
    }
}
