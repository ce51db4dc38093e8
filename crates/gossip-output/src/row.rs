//! Plain data row types written by output backends.

/// A snapshot of one driver's state at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverSnapshotRow {
    pub driver_id:   u32,
    pub tick:        u64,
    /// The stop the driver is at this tick.
    pub stop:        u32,
    /// Number of gossip items the driver currently knows.
    pub known_count: u64,
    /// Whether the driver knows the full gossip universe.
    pub knows_all:   bool,
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:     u64,
    /// Co-located driver pairs that exchanged gossip this tick.
    pub meetings: u64,
}
