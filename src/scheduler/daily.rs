//! Daily assignment building.
//!
//! Symbol resolution per (employee, date), first match wins:
//!
//! 1. Friday → `O` for everyone.
//! 2. Vacation on that date → `V`.
//! 3. The week's designated off-day → `O`.
//! 4. Weekly shift → category symbol (`MA1`/`EA1`, `PT4`/`PT5`).

use chrono::{Datelike, NaiveDate, Weekday};

use super::{EmployeeWeeklyShift, WeeklyOffAssignment};
use crate::models::{
    DailyAssignmentRow, Employee, MonthCalendar, MonthSchedule, ShiftSymbol, VacationSet,
    WeekIndex,
};

/// Resolves one employee's symbol on one date.
///
/// Falls back to `O` if the employee has no weekly shift for `week`,
/// which only happens when the caller passes an inconsistent shift map.
pub fn resolve_symbol(
    employee: &Employee,
    date: NaiveDate,
    week: WeekIndex,
    vacations: &VacationSet,
    offs: &WeeklyOffAssignment,
    shifts: &EmployeeWeeklyShift,
) -> ShiftSymbol {
    if date.weekday() == Weekday::Fri {
        return ShiftSymbol::Off;
    }
    if vacations.contains(&employee.id, date) {
        return ShiftSymbol::Vacation;
    }
    if offs.get(week, &employee.id) == Some(date) {
        return ShiftSymbol::Off;
    }
    shifts
        .get(&employee.id, week)
        .map(|shift| ShiftSymbol::for_shift(employee.employment_type, shift))
        .unwrap_or(ShiftSymbol::Off)
}

/// Builds one row per (employee, date), ordered by date then roster order.
pub fn build_daily_rows(
    employees: &[Employee],
    calendar: &MonthCalendar,
    vacations: &VacationSet,
    offs: &WeeklyOffAssignment,
    shifts: &EmployeeWeeklyShift,
) -> MonthSchedule {
    let mut schedule = MonthSchedule::new(calendar.year, calendar.month);
    for (date, week) in calendar.iter() {
        for employee in employees {
            let symbol = resolve_symbol(employee, date, week, vacations, offs, shifts);
            schedule.add_row(DailyAssignmentRow::new(&employee.id, date, symbol));
        }
    }
    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmploymentType, Shift, WeekPartitioner};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    struct Fixture {
        calendar: MonthCalendar,
        week: WeekIndex,
        shifts: EmployeeWeeklyShift,
        offs: WeeklyOffAssignment,
    }

    fn fixture() -> Fixture {
        let calendar = MonthCalendar::new(2024, 6, &WeekPartitioner::default()).unwrap();
        let week = calendar.weeks[0];
        let mut shifts = EmployeeWeeklyShift::new();
        let mut offs = WeeklyOffAssignment::new();
        for &w in &calendar.weeks {
            shifts.insert("FT", w, Shift::Morning);
            shifts.insert("PT", w, Shift::Evening);
        }
        offs.insert(week, "FT", date(3));
        offs.insert(week, "PT", date(4));
        Fixture {
            calendar,
            week,
            shifts,
            offs,
        }
    }

    #[test]
    fn test_priority_order() {
        let f = fixture();
        let ft = Employee::new("FT", "Full");
        let mut vacations = VacationSet::new();
        vacations.insert("FT", date(7)); // Friday
        vacations.insert("FT", date(3)); // Also the off-day
        vacations.insert("FT", date(4));

        let resolve = |d| resolve_symbol(&ft, d, f.week, &vacations, &f.offs, &f.shifts);
        assert_eq!(resolve(date(7)), ShiftSymbol::Off); // Friday beats vacation
        assert_eq!(resolve(date(3)), ShiftSymbol::Vacation); // vacation beats off-day
        assert_eq!(resolve(date(4)), ShiftSymbol::Vacation);
        assert_eq!(resolve(date(5)), ShiftSymbol::MorningFullTime);
    }

    #[test]
    fn test_category_symbols() {
        let f = fixture();
        let pt = Employee::new("PT", "Part").with_employment_type(EmploymentType::PartTime);
        let none = VacationSet::new();
        assert_eq!(
            resolve_symbol(&pt, date(5), f.week, &none, &f.offs, &f.shifts),
            ShiftSymbol::EveningPartTime
        );
        assert_eq!(
            resolve_symbol(&pt, date(4), f.week, &none, &f.offs, &f.shifts),
            ShiftSymbol::Off
        );
    }

    #[test]
    fn test_rows_ordered_by_date_then_roster() {
        let f = fixture();
        let employees = vec![Employee::new("PT", "Part"), Employee::new("FT", "Full")];
        let schedule = build_daily_rows(
            &employees,
            &f.calendar,
            &VacationSet::new(),
            &f.offs,
            &f.shifts,
        );
        assert_eq!(schedule.row_count(), 30 * 2);
        assert_eq!(schedule.rows[0].employee_id, "PT");
        assert_eq!(schedule.rows[1].employee_id, "FT");
        assert_eq!(schedule.rows[2].date, date(2));
        assert!(schedule
            .rows
            .iter()
            .filter(|r| r.date.weekday() == Weekday::Fri)
            .all(|r| r.symbol == ShiftSymbol::Off));
    }

    #[test]
    fn test_vacation_for_unknown_employee_is_inert() {
        let f = fixture();
        let employees = vec![Employee::new("FT", "Full")];
        let mut vacations = VacationSet::new();
        vacations.insert("GHOST", date(5));
        let schedule = build_daily_rows(&employees, &f.calendar, &vacations, &f.offs, &f.shifts);
        assert_eq!(schedule.count_symbol("FT", ShiftSymbol::Vacation), 0);
        assert!(schedule.rows_for_employee("GHOST").is_empty());
    }
}
