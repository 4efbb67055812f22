//! Month schedule (solution) model.
//!
//! A month schedule is exactly one [`DailyAssignmentRow`] per
//! (employee, date) in the target month. It is the unit persisted by the
//! writer and rendered by the export layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Shift, ShiftSymbol};

/// One employee's symbol on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAssignmentRow {
    pub employee_id: String,
    pub date: NaiveDate,
    pub symbol: ShiftSymbol,
}

impl DailyAssignmentRow {
    pub fn new(employee_id: impl Into<String>, date: NaiveDate, symbol: ShiftSymbol) -> Self {
        Self {
            employee_id: employee_id.into(),
            date,
            symbol,
        }
    }
}

/// All assignment rows for one month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthSchedule {
    pub year: i32,
    pub month: u32,
    /// Rows ordered by date, then roster order.
    pub rows: Vec<DailyAssignmentRow>,
}

impl MonthSchedule {
    /// Creates an empty schedule for `year`-`month`.
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            rows: Vec::new(),
        }
    }

    /// Appends a row.
    pub fn add_row(&mut self, row: DailyAssignmentRow) {
        self.rows.push(row);
    }

    /// Symbol for an employee on a date.
    pub fn symbol_for(&self, employee_id: &str, date: NaiveDate) -> Option<ShiftSymbol> {
        self.rows
            .iter()
            .find(|r| r.date == date && r.employee_id == employee_id)
            .map(|r| r.symbol)
    }

    /// All rows for an employee, chronological.
    pub fn rows_for_employee(&self, employee_id: &str) -> Vec<&DailyAssignmentRow> {
        self.rows
            .iter()
            .filter(|r| r.employee_id == employee_id)
            .collect()
    }

    /// All rows on a date, in roster order.
    pub fn rows_on(&self, date: NaiveDate) -> Vec<&DailyAssignmentRow> {
        self.rows.iter().filter(|r| r.date == date).collect()
    }

    /// How many times an employee has `symbol` this month.
    pub fn count_symbol(&self, employee_id: &str, symbol: ShiftSymbol) -> usize {
        self.rows
            .iter()
            .filter(|r| r.employee_id == employee_id && r.symbol == symbol)
            .count()
    }

    /// How many working days an employee spends on `shift` this month.
    pub fn count_shift(&self, employee_id: &str, shift: Shift) -> usize {
        self.rows
            .iter()
            .filter(|r| r.employee_id == employee_id && r.symbol.shift() == Some(shift))
            .count()
    }

    /// Headcount working `shift` on `date`.
    pub fn headcount(&self, date: NaiveDate, shift: Shift) -> usize {
        self.rows
            .iter()
            .filter(|r| r.date == date && r.symbol.shift() == Some(shift))
            .count()
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
