//! Roster generation pipeline.
//!
//! Stages, in dependency order:
//!
//! 1. [`assign_weekly_shifts`]: Morning/Evening per employee per week,
//!    alternating week to week.
//! 2. [`distribute_off_days`]: one balanced non-Friday rest day per
//!    employee per week.
//! 3. [`build_daily_rows`]: one symbol per employee per day, resolved as
//!    Friday > Vacation > weekly off-day > weekly shift.
//!
//! [`RosterGenerator`] runs the stages for one month. [`CandidateSearch`]
//! wraps it to compare several seeded roster orderings by [`RosterKpi`].

mod candidates;
mod daily;
mod generator;
mod kpi;
mod off_days;
mod shifts;

pub use candidates::{CandidateResult, CandidateScore, CandidateSearch};
pub use daily::{build_daily_rows, resolve_symbol};
pub use generator::{DebugInfo, GenerationInput, GenerationOutput, RosterGenerator};
pub use kpi::RosterKpi;
pub use off_days::{distribute_off_days, MissingOffDay, OffDayPlan, WeeklyOffAssignment};
pub use shifts::{
    assign_weekly_shifts, base_shifts, EmployeeWeeklyShift, ShiftCounts, WeeklyShiftPlan,
};
