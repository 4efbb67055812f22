//! Previous-month tail state.
//!
//! For each employee, the last working shift of the prior month and the
//! week it was worked in. Rest symbols (`O`, `V`) and the export-only
//! relief symbol are skipped while scanning backward, so the tail week can
//! be earlier than the month's last week (a month ending on a Saturday
//! always rests everyone that day).

use std::collections::HashMap;

use super::{DailyAssignmentRow, Shift, WeekIndex, WeekPartitioner};

/// An employee's last known working shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TailShift {
    pub shift: Shift,
    /// Week the shift was worked in. `None` = assumed to be the previous
    /// month's last week.
    pub week: Option<WeekIndex>,
}

impl TailShift {
    /// Shift this employee should work in `week` to keep strict weekly
    /// alternation with the tail.
    ///
    /// Without a recorded week, `same_week_as_prev` decides: keep when the
    /// target week continues the previous month's last week, flip otherwise.
    pub fn shift_in(&self, week: WeekIndex, same_week_as_prev: bool) -> Shift {
        let keep = match self.week {
            Some(tail_week) => (week.0 - tail_week.0).rem_euclid(2) == 0,
            None => same_week_as_prev,
        };
        if keep {
            self.shift
        } else {
            self.shift.flipped()
        }
    }
}

/// Employee id → last working shift of the previous month.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviousMonthState {
    tails: HashMap<String, TailShift>,
}

impl PreviousMonthState {
    /// Creates an empty state (no history).
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the tail state from the previous month's rows.
    pub fn from_rows(rows: &[DailyAssignmentRow], partitioner: &WeekPartitioner) -> Self {
        let mut ordered: Vec<&DailyAssignmentRow> = rows.iter().collect();
        // Latest date first; stable, so ties keep input order.
        ordered.sort_by(|a, b| b.date.cmp(&a.date));

        let mut tails = HashMap::new();
        for row in ordered {
            if let Some(shift) = row.symbol.shift() {
                tails.entry(row.employee_id.clone()).or_insert(TailShift {
                    shift,
                    week: Some(partitioner.week_index(row.date)),
                });
            }
        }
        Self { tails }
    }

    /// Records a tail shift assumed to lie in the previous month's last week.
    pub fn with_shift(mut self, employee_id: impl Into<String>, shift: Shift) -> Self {
        self.tails
            .insert(employee_id.into(), TailShift { shift, week: None });
        self
    }

    /// Records a tail shift worked in a known week.
    pub fn with_shift_in_week(
        mut self,
        employee_id: impl Into<String>,
        shift: Shift,
        week: WeekIndex,
    ) -> Self {
        self.tails.insert(
            employee_id.into(),
            TailShift {
                shift,
                week: Some(week),
            },
        );
        self
    }

    /// Last known shift of an employee.
    pub fn shift_of(&self, employee_id: &str) -> Option<Shift> {
        self.tails.get(employee_id).map(|t| t.shift)
    }

    /// Full tail record of an employee.
    pub fn tail_of(&self, employee_id: &str) -> Option<TailShift> {
        self.tails.get(employee_id).copied()
    }

    /// Whether no employee has history.
    pub fn is_empty(&self) -> bool {
        self.tails.is_empty()
    }

    /// Number of employees with history.
    pub fn len(&self) -> usize {
        self.tails.len()
    }
}

impl FromIterator<(String, Shift)> for PreviousMonthState {
    fn from_iter<I: IntoIterator<Item = (String, Shift)>>(iter: I) -> Self {
        Self {
            tails: iter
                .into_iter()
                .map(|(id, shift)| (id, TailShift { shift, week: None }))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftSymbol;
    use chrono::NaiveDate;

    fn row(id: &str, day: u32, symbol: ShiftSymbol) -> DailyAssignmentRow {
        DailyAssignmentRow::new(id, NaiveDate::from_ymd_opt(2024, 5, day).unwrap(), symbol)
    }

    #[test]
    fn test_latest_working_shift_wins() {
        let rows = vec![
            row("E1", 29, ShiftSymbol::MorningFullTime),
            row("E1", 31, ShiftSymbol::Off),
            row("E1", 30, ShiftSymbol::Vacation),
            row("E2", 30, ShiftSymbol::MorningPartTime),
            row("E2", 31, ShiftSymbol::EveningPartTime),
        ];
        let p = WeekPartitioner::default();
        let state = PreviousMonthState::from_rows(&rows, &p);
        assert_eq!(state.shift_of("E1"), Some(Shift::Morning));
        assert_eq!(state.shift_of("E2"), Some(Shift::Evening));
        assert_eq!(state.len(), 2);

        let tail = state.tail_of("E1").unwrap();
        let may_29 = NaiveDate::from_ymd_opt(2024, 5, 29).unwrap();
        assert_eq!(tail.week, Some(p.week_index(may_29)));
    }

    #[test]
    fn test_rest_only_history_is_absent() {
        let rows = vec![
            row("E1", 30, ShiftSymbol::Off),
            row("E1", 31, ShiftSymbol::Relief),
        ];
        let state = PreviousMonthState::from_rows(&rows, &WeekPartitioner::default());
        assert_eq!(state.shift_of("E1"), None);
        assert!(state.is_empty());
    }

    #[test]
    fn test_shift_in_follows_week_parity() {
        let tail = TailShift {
            shift: Shift::Morning,
            week: Some(WeekIndex(10)),
        };
        // The calendar flag is ignored once the tail week is known.
        assert_eq!(tail.shift_in(WeekIndex(10), false), Shift::Morning);
        assert_eq!(tail.shift_in(WeekIndex(11), true), Shift::Evening);
        assert_eq!(tail.shift_in(WeekIndex(12), false), Shift::Morning);
    }

    #[test]
    fn test_shift_in_without_week_uses_calendar_flag() {
        let tail = TailShift {
            shift: Shift::Evening,
            week: None,
        };
        assert_eq!(tail.shift_in(WeekIndex(5), true), Shift::Evening);
        assert_eq!(tail.shift_in(WeekIndex(5), false), Shift::Morning);
    }
}
