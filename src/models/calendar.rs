//! Week partitioning and month calendars.
//!
//! # Week Model
//! Weeks run Saturday through Friday. A [`WeekIndex`] counts whole weeks
//! from a fixed anchor Saturday, so the index is continuous across month
//! and year boundaries: the last week of one month and the first week of
//! the next can be compared directly.
//!
//! ```text
//!           January 2000
//! Sa Su Mo Tu We Th Fr
//!  1  2  3  4  5  6  7   < anchor week = 0
//!  8  9 10 11 12 13 14     1
//! ```

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{RosterError, RosterResult};

/// Default epoch. 2000-01-01 is itself a Saturday.
pub const DEFAULT_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2000, 1, 1) {
    Some(d) => d,
    None => panic!("2000-01-01 is a valid date"),
};

/// A Saturday-anchored week number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WeekIndex(pub i64);

impl WeekIndex {
    /// The following week.
    #[inline]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Maps calendar dates onto [`WeekIndex`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekPartitioner {
    anchor: NaiveDate,
}

impl WeekPartitioner {
    /// Creates a partitioner anchored on the Saturday on-or-before `epoch`.
    pub fn new(epoch: NaiveDate) -> Self {
        let since_saturday = (epoch.weekday().num_days_from_monday() + 2) % 7;
        Self {
            anchor: epoch - chrono::Duration::days(i64::from(since_saturday)),
        }
    }

    /// The anchor Saturday (start of week 0).
    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// Week index of `date`. Total, monotonic, constant within a
    /// Saturday-to-Friday span.
    pub fn week_index(&self, date: NaiveDate) -> WeekIndex {
        WeekIndex((date - self.anchor).num_days().div_euclid(7))
    }
}

impl Default for WeekPartitioner {
    fn default() -> Self {
        Self::new(DEFAULT_EPOCH)
    }
}

/// The days of one target month, grouped into global weeks.
#[derive(Debug, Clone)]
pub struct MonthCalendar {
    pub year: i32,
    pub month: u32,
    /// Every day of the month, chronological.
    pub days: Vec<NaiveDate>,
    /// Distinct week indices touched by the month, ascending.
    pub weeks: Vec<WeekIndex>,
    /// Week index of each entry in `days`.
    day_weeks: Vec<WeekIndex>,
    /// Whether the month's first week is the previous month's last week.
    same_week_as_previous: bool,
}

impl MonthCalendar {
    /// Builds the calendar for `year`-`month`.
    ///
    /// # Errors
    /// [`RosterError::InvalidMonth`] if the month is outside 1..=12 or the
    /// year is outside chrono's range.
    pub fn new(year: i32, month: u32, partitioner: &WeekPartitioner) -> RosterResult<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(RosterError::InvalidMonth { year, month })?;

        let days: Vec<NaiveDate> = first
            .iter_days()
            .take_while(|d| d.month() == month)
            .collect();
        let day_weeks: Vec<WeekIndex> =
            days.iter().map(|&d| partitioner.week_index(d)).collect();

        let mut weeks = day_weeks.clone();
        weeks.dedup();

        let same_week_as_previous = first
            .pred_opt()
            .map(|prev| partitioner.week_index(prev) == partitioner.week_index(first))
            .unwrap_or(false);

        Ok(Self {
            year,
            month,
            days,
            weeks,
            day_weeks,
            same_week_as_previous,
        })
    }

    /// Whether the first week of this month continues the last week of
    /// the previous month (the month does not start on a Saturday).
    pub fn same_week_as_previous_month(&self) -> bool {
        self.same_week_as_previous
    }

    /// 0-based position of `week` within this month, if present.
    pub fn week_position(&self, week: WeekIndex) -> Option<usize> {
        self.weeks.iter().position(|&w| w == week)
    }

    /// Week index of a day in this month.
    pub fn week_of(&self, date: NaiveDate) -> Option<WeekIndex> {
        self.days
            .iter()
            .position(|&d| d == date)
            .map(|i| self.day_weeks[i])
    }

    /// Days of the month that fall in `week`, chronological.
    pub fn days_in_week(&self, week: WeekIndex) -> Vec<NaiveDate> {
        self.days
            .iter()
            .zip(&self.day_weeks)
            .filter(|(_, &w)| w == week)
            .map(|(&d, _)| d)
            .collect()
    }

    /// Non-Friday days of the month that fall in `week`.
    pub fn off_day_candidates(&self, week: WeekIndex) -> Vec<NaiveDate> {
        self.days_in_week(week)
            .into_iter()
            .filter(|d| d.weekday() != Weekday::Fri)
            .collect()
    }

    /// Iterates `(date, week)` pairs in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, WeekIndex)> + '_ {
        self.days.iter().copied().zip(self.day_weeks.iter().copied())
    }

    /// Whether `date` lies in this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// The month preceding `year`-`month`.
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_anchor_is_saturday() {
        let p = WeekPartitioner::default();
        assert_eq!(p.anchor().weekday(), Weekday::Sat);
        assert_eq!(p.week_index(date(2000, 1, 1)), WeekIndex(0));
        assert_eq!(p.week_index(date(2000, 1, 7)), WeekIndex(0)); // Friday
        assert_eq!(p.week_index(date(2000, 1, 8)), WeekIndex(1)); // Saturday
        assert_eq!(p.week_index(date(1999, 12, 31)), WeekIndex(-1));
    }

    #[test]
    fn test_anchor_rolls_back_to_saturday() {
        // 2024-01-03 is a Wednesday; previous Saturday is 2023-12-30.
        let p = WeekPartitioner::new(date(2024, 1, 3));
        assert_eq!(p.anchor(), date(2023, 12, 30));
        assert_eq!(p.week_index(date(2024, 1, 5)), WeekIndex(0));
        assert_eq!(p.week_index(date(2024, 1, 6)), WeekIndex(1));
    }

    #[test]
    fn test_week_index_monotonic_and_periodic() {
        let p = WeekPartitioner::default();
        let start = date(2023, 12, 20);
        let mut prev = p.week_index(start);
        for d in start.iter_days().take(60) {
            let w = p.week_index(d);
            assert!(w >= prev);
            assert_eq!(p.week_index(d + chrono::Duration::days(7)), w.next());
            let same_week = d.weekday() != Weekday::Sat;
            if same_week {
                assert_eq!(w, prev);
            }
            prev = w;
        }
    }

    #[test]
    fn test_month_calendar_weeks() {
        // June 2024 starts on Saturday: no carry-over week.
        let p = WeekPartitioner::default();
        let cal = MonthCalendar::new(2024, 6, &p).unwrap();
        assert_eq!(cal.days.len(), 30);
        assert_eq!(cal.weeks.len(), 5);
        assert!(!cal.same_week_as_previous_month());
        assert_eq!(cal.days_in_week(cal.weeks[0]).len(), 7);
        assert_eq!(cal.off_day_candidates(cal.weeks[0]).len(), 6);
        // Last week: Sat 29, Sun 30.
        assert_eq!(cal.days_in_week(cal.weeks[4]).len(), 2);
    }

    #[test]
    fn test_month_calendar_carry_over() {
        // May 2024 starts on Wednesday: first week began in April.
        let p = WeekPartitioner::default();
        let cal = MonthCalendar::new(2024, 5, &p).unwrap();
        assert!(cal.same_week_as_previous_month());
        let april = MonthCalendar::new(2024, 4, &p).unwrap();
        assert_eq!(april.weeks.last(), cal.weeks.first());
        assert_eq!(cal.week_position(cal.weeks[2]), Some(2));
        assert_eq!(cal.week_of(date(2024, 5, 1)), Some(cal.weeks[0]));
        assert_eq!(cal.week_of(date(2024, 6, 1)), None);
    }

    #[test]
    fn test_friday_only_week() {
        // March 2024 starts on Friday: its first week has no off-day candidates.
        let p = WeekPartitioner::default();
        let cal = MonthCalendar::new(2024, 3, &p).unwrap();
        assert_eq!(cal.days_in_week(cal.weeks[0]), vec![date(2024, 3, 1)]);
        assert!(cal.off_day_candidates(cal.weeks[0]).is_empty());
    }

    #[test]
    fn test_invalid_month() {
        let p = WeekPartitioner::default();
        assert!(matches!(
            MonthCalendar::new(2024, 13, &p),
            Err(RosterError::InvalidMonth { month: 13, .. })
        ));
        assert!(MonthCalendar::new(2024, 0, &p).is_err());
    }

    #[test]
    fn test_previous_month() {
        assert_eq!(previous_month(2024, 1), (2023, 12));
        assert_eq!(previous_month(2024, 7), (2024, 6));
    }
}
