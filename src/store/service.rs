//! Load → generate → save orchestration.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{info, instrument};

use super::{AssignmentSink, RosterSource};
use crate::error::{RosterError, RosterResult};
use crate::export::MonthGrid;
use crate::models::{
    previous_month, sort_roster, CoverageSettings, MonthSchedule, PreviousMonthState, VacationSet,
};
use crate::scheduler::{GenerationInput, GenerationOutput, RosterGenerator};
use crate::validation::validate_roster;

/// Generates and persists monthly rosters against a store.
///
/// Runs for the same month are serialized; runs for different months
/// proceed independently.
pub struct RosterService<S> {
    store: S,
    generator: RosterGenerator,
    month_locks: Mutex<HashMap<(i32, u32), Arc<Mutex<()>>>>,
}

impl<S> RosterService<S>
where
    S: RosterSource + AssignmentSink,
{
    pub fn new(store: S, generator: RosterGenerator) -> Self {
        Self {
            store,
            generator,
            month_locks: Mutex::new(HashMap::new()),
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Loads everything the generator needs for `year`-`month`.
    ///
    /// # Errors
    /// [`RosterError::Validation`] if the stored roster has duplicate or
    /// blank identities; any store failure as-is.
    pub fn load_input(&self, year: i32, month: u32) -> RosterResult<GenerationInput> {
        // Sources promise name order; re-sort so generation never depends on it.
        let mut employees = self.store.employees()?;
        sort_roster(&mut employees);
        validate_roster(&employees).map_err(RosterError::Validation)?;

        let coverage = CoverageSettings::from_raw(&self.store.settings()?);
        let vacations = VacationSet::from_requests(&self.store.requests(year, month)?);

        let (prev_year, prev_month) = previous_month(year, month);
        let previous = PreviousMonthState::from_rows(
            &self.store.assignments(prev_year, prev_month)?,
            self.generator.partitioner(),
        );

        Ok(GenerationInput::new(year, month)
            .with_employees(employees)
            .with_coverage(coverage)
            .with_vacations(vacations)
            .with_previous(previous))
    }

    /// Generates `year`-`month` and replaces its stored rows.
    #[instrument(skip(self))]
    pub fn generate_month(&self, year: i32, month: u32) -> RosterResult<GenerationOutput> {
        let lock = self.month_lock(year, month);
        let result = {
            let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
            self.generate_locked(year, month)
        };
        self.release_month_lock(year, month, lock);
        result
    }

    fn generate_locked(&self, year: i32, month: u32) -> RosterResult<GenerationOutput> {
        let input = self.load_input(year, month)?;
        let output = self.generator.generate(&input)?;
        let written = self
            .store
            .replace_month(year, month, &output.schedule.rows)?;

        info!(rows = written, "roster saved");
        Ok(output)
    }

    /// Renders the stored rows of `year`-`month` as an export grid.
    pub fn export_month(&self, year: i32, month: u32) -> RosterResult<MonthGrid> {
        let mut employees = self.store.employees()?;
        sort_roster(&mut employees);

        let mut schedule = MonthSchedule::new(year, month);
        schedule.rows = self.store.assignments(year, month)?;

        Ok(MonthGrid::from_schedule(
            &schedule,
            &employees,
            self.generator.config().relief_employee.as_deref(),
        ))
    }

    fn month_lock(&self, year: i32, month: u32) -> Arc<Mutex<()>> {
        let mut locks = self
            .month_locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(locks.entry((year, month)).or_default())
    }

    /// Drops the map entry once no other run holds or awaits the lock.
    fn release_month_lock(&self, year: i32, month: u32, lock: Arc<Mutex<()>>) {
        let mut locks = self
            .month_locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        drop(lock);
        let idle = locks
            .get(&(year, month))
            .is_some_and(|held| Arc::strong_count(held) == 1);
        if idle {
            locks.remove(&(year, month));
        }
    }
}
