//! Presentation grid for spreadsheet export.
//!
//! One row per employee, one cell per day of the month. The relief
//! employee's working cells are rendered as `B` here and only here; the
//! persisted schedule keeps the real shift symbols.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Employee, MonthSchedule, ShiftSymbol};

/// One employee's row in the export grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridRow {
    pub employee_id: String,
    pub name: String,
    pub short_code: Option<String>,
    /// One symbol per day; empty string where the schedule has no row.
    pub cells: Vec<String>,
}

/// Month export grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Column headers, chronological.
    pub dates: Vec<NaiveDate>,
    pub rows: Vec<GridRow>,
}

impl MonthGrid {
    /// Builds the grid in roster order.
    pub fn from_schedule(
        schedule: &MonthSchedule,
        employees: &[Employee],
        relief_employee: Option<&str>,
    ) -> Self {
        let mut dates: Vec<NaiveDate> = schedule.rows.iter().map(|r| r.date).collect();
        dates.sort();
        dates.dedup();

        let rows = employees
            .iter()
            .map(|e| {
                let relief = relief_employee == Some(e.id.as_str());
                let cells = dates
                    .iter()
                    .map(|&d| match schedule.symbol_for(&e.id, d) {
                        Some(symbol) if relief && symbol.shift().is_some() => {
                            ShiftSymbol::Relief.to_string()
                        }
                        Some(symbol) => symbol.to_string(),
                        None => String::new(),
                    })
                    .collect();
                GridRow {
                    employee_id: e.id.clone(),
                    name: e.name.clone(),
                    short_code: e.short_code.clone(),
                    cells,
                }
            })
            .collect();

        Self {
            year: schedule.year,
            month: schedule.month,
            dates,
            rows,
        }
    }

    /// Row of an employee.
    pub fn row(&self, employee_id: &str) -> Option<&GridRow> {
        self.rows.iter().find(|r| r.employee_id == employee_id)
    }
}
