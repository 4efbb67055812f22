//! Weekly shift assignment.
//!
//! # Algorithm
//!
//! 1. Base shift for the month's first week:
//!    - With history: keep the tail shift if the first week *is* the
//!      previous month's last week, otherwise flip it.
//!    - Without history: fill Morning in roster order until the Morning
//!      target is reached, counting employees already seeded Morning from
//!      history; everyone after that starts on Evening.
//! 2. Week at position `k` gets the base shift when `k` is even and the
//!    flipped shift when `k` is odd.
//!
//! Coverage targets are not enforced after the first week; the weekly
//! shift never changes mid-week.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use tracing::debug;

use crate::models::{CoverageSettings, Employee, PreviousMonthState, Shift, WeekIndex};

/// Per-employee, per-week base shift.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeWeeklyShift {
    by_employee: HashMap<String, BTreeMap<WeekIndex, Shift>>,
}

impl EmployeeWeeklyShift {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the shift of `employee_id` in `week`.
    pub fn insert(&mut self, employee_id: &str, week: WeekIndex, shift: Shift) {
        self.by_employee
            .entry(employee_id.to_string())
            .or_default()
            .insert(week, shift);
    }

    /// Shift of `employee_id` in `week`.
    pub fn get(&self, employee_id: &str, week: WeekIndex) -> Option<Shift> {
        self.by_employee
            .get(employee_id)
            .and_then(|weeks| weeks.get(&week))
            .copied()
    }

    /// An employee's shifts ordered by week.
    pub fn weeks_of(&self, employee_id: &str) -> Vec<(WeekIndex, Shift)> {
        self.by_employee
            .get(employee_id)
            .map(|weeks| weeks.iter().map(|(&w, &s)| (w, s)).collect())
            .unwrap_or_default()
    }

    /// Number of employees with at least one week assigned.
    pub fn employee_count(&self) -> usize {
        self.by_employee.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_employee.is_empty()
    }
}

/// Morning/Evening headcount for one week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftCounts {
    pub week: WeekIndex,
    pub morning: usize,
    pub evening: usize,
}

/// Output of [`assign_weekly_shifts`].
#[derive(Debug, Clone, Default)]
pub struct WeeklyShiftPlan {
    pub shifts: EmployeeWeeklyShift,
    /// One entry per week, in week order.
    pub counts: Vec<ShiftCounts>,
}

/// Determines every employee's shift for `first_week`.
///
/// Tails with a recorded week alternate from that week, so a tail found
/// two weeks back keeps its shift. Returns base shifts in roster order.
pub fn base_shifts(
    employees: &[Employee],
    previous: &PreviousMonthState,
    coverage: CoverageSettings,
    first_week: WeekIndex,
    same_week_as_prev: bool,
) -> Vec<Shift> {
    let seeded: Vec<Option<Shift>> = employees
        .iter()
        .map(|e| {
            previous
                .tail_of(&e.id)
                .map(|tail| tail.shift_in(first_week, same_week_as_prev))
        })
        .collect();

    let mut morning_taken = seeded
        .iter()
        .filter(|s| **s == Some(Shift::Morning))
        .count();

    seeded
        .into_iter()
        .map(|seed| {
            seed.unwrap_or_else(|| {
                if morning_taken < coverage.coverage_morning {
                    morning_taken += 1;
                    Shift::Morning
                } else {
                    Shift::Evening
                }
            })
        })
        .collect()
}

/// Assigns each employee a shift for every week of the month.
///
/// `weeks` must be the month's week indices in ascending order.
pub fn assign_weekly_shifts(
    employees: &[Employee],
    previous: &PreviousMonthState,
    coverage: CoverageSettings,
    weeks: &[WeekIndex],
    same_week_as_prev: bool,
) -> WeeklyShiftPlan {
    let mut plan = WeeklyShiftPlan::default();
    let Some(&first_week) = weeks.first() else {
        return plan;
    };
    let bases = base_shifts(employees, previous, coverage, first_week, same_week_as_prev);

    for (k, &week) in weeks.iter().enumerate() {
        let mut counts = ShiftCounts {
            week,
            morning: 0,
            evening: 0,
        };

        for (employee, &base) in employees.iter().zip(&bases) {
            let shift = if k % 2 == 0 { base } else { base.flipped() };
            plan.shifts.insert(&employee.id, week, shift);
            match shift {
                Shift::Morning => counts.morning += 1,
                Shift::Evening => counts.evening += 1,
            }
        }

        debug!(
            week = week.0,
            position = k,
            morning = counts.morning,
            evening = counts.evening,
            target_morning = coverage.coverage_morning,
            target_evening = coverage.coverage_evening,
            "weekly shift counts"
        );
        plan.counts.push(counts);
    }

    plan
}
