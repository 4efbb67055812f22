//! In-memory store.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

use chrono::{Datelike, NaiveDate};

use super::{AssignmentSink, RosterSource};
use crate::error::{RosterError, RosterResult};
use crate::models::{sort_roster, DailyAssignmentRow, Employee, Request};

/// Thread-safe in-memory implementation of both store traits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    employees: RwLock<Vec<Employee>>,
    settings: RwLock<HashMap<String, String>>,
    requests: RwLock<Vec<Request>>,
    /// (year, month) → rows.
    assignments: RwLock<BTreeMap<(i32, u32), Vec<DailyAssignmentRow>>>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee.
    pub fn add_employee(&self, employee: Employee) {
        write(&self.employees).push(employee);
    }

    /// Sets a raw setting.
    pub fn set_setting(&self, key: impl Into<String>, value: impl Into<String>) {
        write(&self.settings).insert(key.into(), value.into());
    }

    /// Adds a request.
    pub fn add_request(&self, request: Request) {
        write(&self.requests).push(request);
    }

    /// Seeds rows for a month directly, bypassing replacement.
    pub fn insert_rows(&self, year: i32, month: u32, rows: Vec<DailyAssignmentRow>) {
        write(&self.assignments)
            .entry((year, month))
            .or_default()
            .extend(rows);
    }

    /// Simulates an unreachable backend: every call fails while set.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn ensure_available(&self) -> RosterResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(RosterError::store("backend unavailable"))
        } else {
            Ok(())
        }
    }
}

fn read<T>(lock: &RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

fn month_bounds(year: i32, month: u32) -> RosterResult<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(RosterError::InvalidMonth { year, month })?;
    let last = first
        .iter_days()
        .take_while(|d| d.month() == month)
        .last()
        .unwrap_or(first);
    Ok((first, last))
}

impl RosterSource for MemoryStore {
    fn employees(&self) -> RosterResult<Vec<Employee>> {
        self.ensure_available()?;
        let mut employees = read(&self.employees).clone();
        sort_roster(&mut employees);
        Ok(employees)
    }

    fn settings(&self) -> RosterResult<HashMap<String, String>> {
        self.ensure_available()?;
        Ok(read(&self.settings).clone())
    }

    fn requests(&self, year: i32, month: u32) -> RosterResult<Vec<Request>> {
        self.ensure_available()?;
        let (first, last) = month_bounds(year, month)?;
        Ok(read(&self.requests)
            .iter()
            .filter(|r| r.start <= last && r.end >= first)
            .cloned()
            .collect())
    }

    fn assignments(&self, year: i32, month: u32) -> RosterResult<Vec<DailyAssignmentRow>> {
        self.ensure_available()?;
        Ok(read(&self.assignments)
            .get(&(year, month))
            .cloned()
            .unwrap_or_default())
    }
}

impl AssignmentSink for MemoryStore {
    fn replace_month(
        &self,
        year: i32,
        month: u32,
        rows: &[DailyAssignmentRow],
    ) -> RosterResult<usize> {
        self.ensure_available()?;
        write(&self.assignments).insert((year, month), rows.to_vec());
        Ok(rows.len())
    }
}
