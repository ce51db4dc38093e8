//! `gossip-output` — observer-driven trace writers for the `rust_gossip`
//! simulator.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`row`]      | Plain data rows (`DriverSnapshotRow`, `TickSummaryRow`)|
//! | [`writer`]   | The `OutputWriter` backend trait                       |
//! | [`csv`]      | CSV backend (always available)                         |
//! | [`sqlite`]   | SQLite backend (feature `sqlite`)                      |
//! | [`observer`] | `SimOutputObserver<W>` — `SimObserver` → writer bridge |
//! | [`error`]    | `OutputError`, `OutputResult`                          |

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
#[cfg(feature = "sqlite")]
pub mod sqlite;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{DriverSnapshotRow, TickSummaryRow};
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
pub use writer::OutputWriter;
