//! Employee requests and the vacation lookup built from them.
//!
//! Requests arrive as inclusive date ranges. Range expansion happens here,
//! at the boundary; the generator only ever sees exact
//! `(employee_id, date)` pairs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Request category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestKind {
    /// Employee must not work the requested dates.
    Vacation,
    /// Soft wish for a day off. Not consumed by the generator.
    DayOff,
    Other,
}

/// An employee request over an inclusive date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub employee_id: String,
    pub kind: RequestKind,
    /// First requested date (inclusive).
    pub start: NaiveDate,
    /// Last requested date (inclusive).
    pub end: NaiveDate,
}

impl Request {
    /// Creates a vacation request for a single day.
    pub fn vacation(employee_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            employee_id: employee_id.into(),
            kind: RequestKind::Vacation,
            start: date,
            end: date,
        }
    }

    /// Creates a request of `kind` spanning `start..=end`.
    pub fn range(
        employee_id: impl Into<String>,
        kind: RequestKind,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            kind,
            start,
            end,
        }
    }

    /// Expands the range into individual dates. Empty if `end < start`.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |d| *d <= self.end)
    }
}

/// A single `(employee, date)` vacation day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VacationRequest {
    pub employee_id: String,
    pub date: NaiveDate,
}

impl VacationRequest {
    pub fn new(employee_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            employee_id: employee_id.into(),
            date,
        }
    }
}

/// Set of vacation days, looked up by employee id and date.
///
/// Entries for employees absent from the roster are inert.
#[derive(Debug, Clone, Default)]
pub struct VacationSet {
    days: HashMap<String, BTreeSet<NaiveDate>>,
}

impl VacationSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects the vacation-kind requests, expanding ranges.
    pub fn from_requests<'a>(requests: impl IntoIterator<Item = &'a Request>) -> Self {
        let mut set = Self::new();
        for req in requests {
            if req.kind != RequestKind::Vacation {
                continue;
            }
            for date in req.dates() {
                set.insert(&req.employee_id, date);
            }
        }
        set
    }

    /// Adds a single vacation day.
    pub fn insert(&mut self, employee_id: &str, date: NaiveDate) -> bool {
        self.days
            .entry(employee_id.to_string())
            .or_default()
            .insert(date)
    }

    /// Whether the employee is on vacation on `date`.
    pub fn contains(&self, employee_id: &str, date: NaiveDate) -> bool {
        self.days
            .get(employee_id)
            .is_some_and(|dates| dates.contains(&date))
    }

    /// Keeps only dates matching `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(NaiveDate) -> bool) {
        for dates in self.days.values_mut() {
            dates.retain(|d| keep(*d));
        }
        self.days.retain(|_, dates| !dates.is_empty());
    }

    /// Number of vacation days loaded.
    pub fn len(&self) -> usize {
        self.days.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All entries, sorted by employee then date.
    pub fn to_sorted_vec(&self) -> Vec<VacationRequest> {
        let mut out: Vec<VacationRequest> = self
            .days
            .iter()
            .flat_map(|(id, dates)| dates.iter().map(|d| VacationRequest::new(id.clone(), *d)))
            .collect();
        out.sort();
        out
    }
}

impl FromIterator<VacationRequest> for VacationSet {
    fn from_iter<I: IntoIterator<Item = VacationRequest>>(iter: I) -> Self {
        let mut set = Self::new();
        for v in iter {
            set.days.entry(v.employee_id).or_default().insert(v.date);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_range_expansion() {
        let r = Request::range("E1", RequestKind::Vacation, date(2024, 5, 30), date(2024, 6, 2));
        let days: Vec<NaiveDate> = r.dates().collect();
        assert_eq!(days.len(), 4);
        assert_eq!(days[0], date(2024, 5, 30));
        assert_eq!(days[3], date(2024, 6, 2));

        let inverted = Request::range("E1", RequestKind::Vacation, date(2024, 6, 2), date(2024, 6, 1));
        assert_eq!(inverted.dates().count(), 0);
    }

    #[test]
    fn test_only_vacations_collected() {
        let requests = vec![
            Request::vacation("E1", date(2024, 6, 3)),
            Request::range("E2", RequestKind::DayOff, date(2024, 6, 3), date(2024, 6, 4)),
            Request::range("E3", RequestKind::Vacation, date(2024, 6, 3), date(2024, 6, 4)),
        ];
        let set = VacationSet::from_requests(&requests);
        assert_eq!(set.len(), 3);
        assert!(set.contains("E1", date(2024, 6, 3)));
        assert!(!set.contains("E2", date(2024, 6, 3)));
        assert!(set.contains("E3", date(2024, 6, 4)));
    }

    #[test]
    fn test_retain_to_month() {
        let mut set: VacationSet = vec![
            VacationRequest::new("E1", date(2024, 5, 31)),
            VacationRequest::new("E1", date(2024, 6, 1)),
        ]
        .into_iter()
        .collect();
        set.retain(|d| d >= date(2024, 6, 1));
        assert_eq!(
            set.to_sorted_vec(),
            vec![VacationRequest::new("E1", date(2024, 6, 1))]
        );
    }
}
