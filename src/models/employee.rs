//! Employee model.
//!
//! Employees are read-only to the generator. Roster order (the order of
//! the slice handed to the generator) drives every deterministic
//! tie-break, so callers must supply a stable, total order.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::{EmploymentType, Shift};

/// A call-center employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Opaque identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional short code shown in exports.
    pub short_code: Option<String>,
    /// Employment category (selects the symbol pair).
    pub employment_type: EmploymentType,
    /// Shifts this employee may work. `None` = unrestricted.
    pub allowed_shifts: Option<Vec<Shift>>,
    /// Weekdays the employee prefers to rest on.
    pub preferred_days_off: Vec<Weekday>,
}

impl Employee {
    /// Creates a full-time employee.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            short_code: None,
            employment_type: EmploymentType::FullTime,
            allowed_shifts: None,
            preferred_days_off: Vec::new(),
        }
    }

    /// Creates a part-time employee.
    pub fn part_time(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name).with_employment_type(EmploymentType::PartTime)
    }

    /// Sets the short code.
    pub fn with_short_code(mut self, code: impl Into<String>) -> Self {
        self.short_code = Some(code.into());
        self
    }

    /// Sets the employment category.
    pub fn with_employment_type(mut self, employment_type: EmploymentType) -> Self {
        self.employment_type = employment_type;
        self
    }

    /// Restricts the shifts this employee may work.
    pub fn with_allowed_shifts(mut self, shifts: Vec<Shift>) -> Self {
        self.allowed_shifts = Some(shifts);
        self
    }

    /// Adds a preferred rest day.
    pub fn with_preferred_day_off(mut self, day: Weekday) -> Self {
        if !self.preferred_days_off.contains(&day) {
            self.preferred_days_off.push(day);
        }
        self
    }

    /// Whether the employee may work `shift`.
    pub fn allows(&self, shift: Shift) -> bool {
        match &self.allowed_shifts {
            None => true,
            Some(shifts) => shifts.contains(&shift),
        }
    }

    /// Whether `day` is one of the employee's preferred rest days.
    pub fn prefers_off(&self, day: Weekday) -> bool {
        self.preferred_days_off.contains(&day)
    }
}

/// Sorts a roster by display name, then id, producing the stable total
/// order the generator expects.
pub fn sort_roster(employees: &mut [Employee]) {
    employees.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_builder() {
        let e = Employee::new("E1", "Amal")
            .with_short_code("AM")
            .with_allowed_shifts(vec![Shift::Morning])
            .with_preferred_day_off(Weekday::Sat)
            .with_preferred_day_off(Weekday::Sat);

        assert_eq!(e.id, "E1");
        assert_eq!(e.short_code.as_deref(), Some("AM"));
        assert_eq!(e.employment_type, EmploymentType::FullTime);
        assert!(e.allows(Shift::Morning));
        assert!(!e.allows(Shift::Evening));
        assert_eq!(e.preferred_days_off, vec![Weekday::Sat]);
        assert!(e.prefers_off(Weekday::Sat));
    }

    #[test]
    fn test_unrestricted_by_default() {
        let e = Employee::part_time("E2", "Badr");
        assert_eq!(e.employment_type, EmploymentType::PartTime);
        assert!(e.allows(Shift::Morning));
        assert!(e.allows(Shift::Evening));
    }

    #[test]
    fn test_sort_roster() {
        let mut roster = vec![
            Employee::new("3", "Zaid"),
            Employee::new("2", "Amal"),
            Employee::new("1", "Amal"),
        ];
        sort_roster(&mut roster);
        let ids: Vec<&str> = roster.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }
}
