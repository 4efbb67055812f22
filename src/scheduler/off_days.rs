//! Weekly off-day distribution.
//!
//! # Algorithm
//!
//! Per week, each non-Friday day of the month in that week starts with an
//! off-count of zero. The Morning group is processed first, then the
//! Evening group, each in roster order. Every employee takes the day with
//! the lowest current count (earliest day on ties) and bumps its count.
//! The pinned employee takes Saturday whenever Saturday is a candidate.
//!
//! Greedy and incremental: the maximum per-day count is kept low as
//! employees are placed, with no rebalancing afterwards.
//!
//! A week with no candidates (a month starting on a Friday) yields a
//! [`MissingOffDay`] for every employee instead of an assignment.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;
use tracing::warn;

use super::EmployeeWeeklyShift;
use crate::models::{Employee, MonthCalendar, Shift, WeekIndex};

/// Week → employee → designated off-day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyOffAssignment {
    by_week: BTreeMap<WeekIndex, HashMap<String, NaiveDate>>,
}

impl WeeklyOffAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Designates `date` as the employee's off-day for `week`.
    ///
    /// Returns the previous designation, if any.
    pub fn insert(&mut self, week: WeekIndex, employee_id: &str, date: NaiveDate) -> Option<NaiveDate> {
        self.by_week
            .entry(week)
            .or_default()
            .insert(employee_id.to_string(), date)
    }

    /// Off-day of `employee_id` in `week`.
    pub fn get(&self, week: WeekIndex, employee_id: &str) -> Option<NaiveDate> {
        self.by_week
            .get(&week)
            .and_then(|m| m.get(employee_id))
            .copied()
    }

    /// Number of employees resting on `date` within `week`.
    pub fn off_count(&self, week: WeekIndex, date: NaiveDate) -> usize {
        self.by_week
            .get(&week)
            .map(|m| m.values().filter(|&&d| d == date).count())
            .unwrap_or(0)
    }

    /// Total designations across all weeks.
    pub fn len(&self) -> usize {
        self.by_week.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An employee left without an off-day because the week had no
/// non-Friday day inside the month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingOffDay {
    pub week: WeekIndex,
    pub employee_id: String,
}

/// Output of [`distribute_off_days`].
#[derive(Debug, Clone, Default)]
pub struct OffDayPlan {
    pub offs: WeeklyOffAssignment,
    pub missing: Vec<MissingOffDay>,
}

/// Picks one non-Friday off-day per employee per week.
pub fn distribute_off_days(
    employees: &[Employee],
    shifts: &EmployeeWeeklyShift,
    calendar: &MonthCalendar,
    pinned_saturday: Option<&str>,
) -> OffDayPlan {
    let mut plan = OffDayPlan::default();

    for &week in &calendar.weeks {
        let candidates = calendar.off_day_candidates(week);
        let mut counts = vec![0usize; candidates.len()];
        let saturday = candidates.iter().position(|d| d.weekday() == Weekday::Sat);

        for group in [Shift::Morning, Shift::Evening] {
            let members = employees
                .iter()
                .filter(|e| shifts.get(&e.id, week) == Some(group));

            for employee in members {
                let pinned = pinned_saturday == Some(employee.id.as_str());
                let chosen = match saturday {
                    Some(sat) if pinned => Some(sat),
                    _ => least_loaded(&counts),
                };

                match chosen {
                    Some(i) => {
                        counts[i] += 1;
                        plan.offs.insert(week, &employee.id, candidates[i]);
                    }
                    None => {
                        warn!(
                            week = week.0,
                            employee = %employee.id,
                            "no off-day candidate in week"
                        );
                        plan.missing.push(MissingOffDay {
                            week,
                            employee_id: employee.id.clone(),
                        });
                    }
                }
            }
        }
    }

    plan
}

/// Index of the smallest count; the earliest wins ties.
fn least_loaded(counts: &[usize]) -> Option<usize> {
    counts
        .iter()
        .enumerate()
        .min_by_key(|&(_, &c)| c)
        .map(|(i, _)| i)
}
