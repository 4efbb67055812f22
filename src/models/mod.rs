//! Roster domain models.
//!
//! Provides the data types consumed and produced by monthly roster
//! generation.
//!
//! | Type | Role |
//! |------|------|
//! | `Employee` | Read-only roster entry |
//! | `CoverageSettings` | Target headcount seeding the first week |
//! | `VacationSet` | Exact (employee, date) vacation days |
//! | `WeekIndex` / `MonthCalendar` | Saturday-anchored global weeks |
//! | `PreviousMonthState` | Tail shift carried across months |
//! | `MonthSchedule` | One symbol per employee per day |

mod calendar;
mod employee;
mod history;
mod request;
mod schedule;
mod settings;
mod shift;

pub use calendar::{previous_month, MonthCalendar, WeekIndex, WeekPartitioner, DEFAULT_EPOCH};
pub use employee::{sort_roster, Employee};
pub use history::{PreviousMonthState, TailShift};
pub use request::{Request, RequestKind, VacationRequest, VacationSet};
pub use schedule::{DailyAssignmentRow, MonthSchedule};
pub use settings::{
    CoverageSettings, GeneratorConfig, COVERAGE_EVENING_KEY, COVERAGE_MORNING_KEY,
    DEFAULT_COVERAGE_EVENING, DEFAULT_COVERAGE_MORNING,
};
pub use shift::{EmploymentType, Shift, ShiftSymbol, UnknownSymbol};
