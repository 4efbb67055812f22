//! Storage boundary.
//!
//! The generator never touches storage. Loading happens before a run and
//! persistence after it, through these two traits:
//!
//! - [`RosterSource`]: employees, raw settings, requests, prior rows.
//! - [`AssignmentSink`]: atomic replacement of a month's rows.
//!
//! [`MemoryStore`] implements both in-process. [`RosterService`] wires a
//! store to the generator.

mod memory;
mod service;

pub use memory::MemoryStore;
pub use service::RosterService;

use std::collections::HashMap;

use crate::error::RosterResult;
use crate::models::{DailyAssignmentRow, Employee, Request};

/// Read side of the store.
pub trait RosterSource {
    /// All active employees, ordered by name.
    ///
    /// [`RosterService`] re-sorts with [`sort_roster`](crate::models::sort_roster)
    /// before generating or exporting, so an implementation that breaks
    /// the order still yields a deterministic roster.
    fn employees(&self) -> RosterResult<Vec<Employee>>;

    /// Raw key/value settings.
    fn settings(&self) -> RosterResult<HashMap<String, String>>;

    /// Requests overlapping `year`-`month`.
    fn requests(&self, year: i32, month: u32) -> RosterResult<Vec<Request>>;

    /// Assignment rows stored for `year`-`month`.
    fn assignments(&self, year: i32, month: u32) -> RosterResult<Vec<DailyAssignmentRow>>;
}

/// Write side of the store.
pub trait AssignmentSink {
    /// Replaces every row of `year`-`month` with `rows`.
    ///
    /// Must be atomic: on error, the previous rows remain. Returns the
    /// number of rows written.
    fn replace_month(
        &self,
        year: i32,
        month: u32,
        rows: &[DailyAssignmentRow],
    ) -> RosterResult<usize>;
}
