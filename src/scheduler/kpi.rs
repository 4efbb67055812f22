//! Roster quality metrics (KPIs).
//!
//! Audit figures computed from a generated month. Used by management
//! review and by [`super::CandidateSearch`] to rank candidates.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Morning shortfall | Σ over working days of max(0, target − Morning headcount) |
//! | Evening shortfall | Σ over working days of max(0, target − Evening headcount) |
//! | Min daily headcount | Smallest Morning or Evening headcount on a non-Friday |
//! | Unpreferred off-days | Weekly off-days not on a preferred rest day |
//! | Disallowed shifts | Working days on a shift outside the employee's allowed set |

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::models::{CoverageSettings, Employee, MonthSchedule, Shift, ShiftSymbol};

/// Weight of a disallowed-shift day in [`RosterKpi::score`].
const DISALLOWED_WEIGHT: f64 = 10.0;
/// Weight of an unpreferred off-day in [`RosterKpi::score`].
const UNPREFERRED_WEIGHT: f64 = 0.5;

/// Roster quality indicators.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterKpi {
    pub morning_shortfall: usize,
    pub evening_shortfall: usize,
    /// `None` when the month has no working days or no rows.
    pub min_daily_headcount: Option<usize>,
    pub unpreferred_off_days: usize,
    pub disallowed_shift_days: usize,
}

impl RosterKpi {
    /// Computes KPIs for a schedule.
    ///
    /// # Arguments
    /// * `schedule` - The generated month.
    /// * `employees` - The roster (for preferences and allowed shifts).
    /// * `coverage` - Daily headcount targets.
    pub fn calculate(
        schedule: &MonthSchedule,
        employees: &[Employee],
        coverage: CoverageSettings,
    ) -> Self {
        let mut dates: Vec<NaiveDate> = schedule.rows.iter().map(|r| r.date).collect();
        dates.sort();
        dates.dedup();

        let mut morning_shortfall = 0;
        let mut evening_shortfall = 0;
        let mut min_daily_headcount: Option<usize> = None;

        for date in dates.into_iter().filter(|d| d.weekday() != Weekday::Fri) {
            let morning = schedule.headcount(date, Shift::Morning);
            let evening = schedule.headcount(date, Shift::Evening);
            morning_shortfall += coverage.coverage_morning.saturating_sub(morning);
            evening_shortfall += coverage.coverage_evening.saturating_sub(evening);
            let low = morning.min(evening);
            min_daily_headcount = Some(min_daily_headcount.map_or(low, |m| m.min(low)));
        }

        let mut unpreferred_off_days = 0;
        let mut disallowed_shift_days = 0;
        for employee in employees {
            for row in schedule.rows_for_employee(&employee.id) {
                let is_weekly_off =
                    row.symbol == ShiftSymbol::Off && row.date.weekday() != Weekday::Fri;
                if is_weekly_off
                    && !employee.preferred_days_off.is_empty()
                    && !employee.prefers_off(row.date.weekday())
                {
                    unpreferred_off_days += 1;
                }
                if let Some(shift) = row.symbol.shift() {
                    if !employee.allows(shift) {
                        disallowed_shift_days += 1;
                    }
                }
            }
        }

        Self {
            morning_shortfall,
            evening_shortfall,
            min_daily_headcount,
            unpreferred_off_days,
            disallowed_shift_days,
        }
    }

    /// Single ranking figure. Lower is better.
    pub fn score(&self) -> f64 {
        (self.morning_shortfall + self.evening_shortfall) as f64
            + DISALLOWED_WEIGHT * self.disallowed_shift_days as f64
            + UNPREFERRED_WEIGHT * self.unpreferred_off_days as f64
    }

    /// Whether the schedule meets the given thresholds.
    pub fn meets_thresholds(&self, max_shortfall: usize, min_headcount: usize) -> bool {
        self.morning_shortfall + self.evening_shortfall <= max_shortfall
            && self.min_daily_headcount.unwrap_or(0) >= min_headcount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DailyAssignmentRow;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn sample() -> (MonthSchedule, Vec<Employee>) {
        // Mon 3 and Tue 4, plus Fri 7.
        let employees = vec![
            Employee::new("A", "A").with_preferred_day_off(Weekday::Mon),
            Employee::new("B", "B").with_allowed_shifts(vec![Shift::Evening]),
        ];
        let mut s = MonthSchedule::new(2024, 6);
        s.add_row(DailyAssignmentRow::new("A", date(3), ShiftSymbol::Off));
        s.add_row(DailyAssignmentRow::new("B", date(3), ShiftSymbol::MorningFullTime));
        s.add_row(DailyAssignmentRow::new("A", date(4), ShiftSymbol::EveningFullTime));
        s.add_row(DailyAssignmentRow::new("B", date(4), ShiftSymbol::Off));
        s.add_row(DailyAssignmentRow::new("A", date(7), ShiftSymbol::Off));
        s.add_row(DailyAssignmentRow::new("B", date(7), ShiftSymbol::Off));
        (s, employees)
    }

    #[test]
    fn test_shortfall() {
        let (s, employees) = sample();
        let kpi = RosterKpi::calculate(&s, &employees, CoverageSettings::new(1, 1));
        // Day 3: M=1, E=0 → evening short 1. Day 4: M=0, E=1 → morning short 1.
        assert_eq!(kpi.morning_shortfall, 1);
        assert_eq!(kpi.evening_shortfall, 1);
        assert_eq!(kpi.min_daily_headcount, Some(0));
    }

    #[test]
    fn test_preferences_and_allowed() {
        let (s, employees) = sample();
        let kpi = RosterKpi::calculate(&s, &employees, CoverageSettings::new(0, 0));
        // A rests Monday (preferred). B has no preference. Fridays ignored.
        assert_eq!(kpi.unpreferred_off_days, 0);
        // B works Morning on day 3 but is Evening-only.
        assert_eq!(kpi.disallowed_shift_days, 1);
        assert!((kpi.score() - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_schedule() {
        let kpi = RosterKpi::calculate(&MonthSchedule::new(2024, 6), &[], CoverageSettings::default());
        assert_eq!(kpi.morning_shortfall, 0);
        assert_eq!(kpi.min_daily_headcount, None);
        assert!((kpi.score() - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_meets_thresholds() {
        let (s, employees) = sample();
        let kpi = RosterKpi::calculate(&s, &employees, CoverageSettings::new(1, 1));
        assert!(kpi.meets_thresholds(2, 0));
        assert!(!kpi.meets_thresholds(1, 0));
        assert!(!kpi.meets_thresholds(2, 1));
    }
}
