//! Monthly shift roster generation for a call center.
//!
//! Assigns every employee a Morning or Evening shift per week, one
//! balanced rest day per week, Fridays off, and vacations, producing one
//! symbol per employee per day of the target month.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Employee`, `CoverageSettings`,
//!   `VacationSet`, `WeekIndex`, `MonthCalendar`, `PreviousMonthState`,
//!   `MonthSchedule`
//! - **`scheduler`**: Pipeline stages, `RosterGenerator`, `RosterKpi`,
//!   `CandidateSearch`
//! - **`validation`**: Roster integrity checks
//! - **`store`**: Loader/writer traits, in-memory store, `RosterService`
//! - **`export`**: Presentation grid with relief substitution
//!
//! # Determinism
//!
//! Generation uses no randomness. Given the same roster order, coverage,
//! vacations and previous-month tail state, it yields the same rows in
//! the same order. Weekly shifts never change mid-week and alternate
//! between consecutive weeks, across month boundaries too.

pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod scheduler;
pub mod store;
pub mod validation;

pub use error::{RosterError, RosterResult};
