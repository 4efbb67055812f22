//! Monthly roster generator.
//!
//! Runs the pipeline stages in order:
//!
//! 1. Partition the month into global weeks.
//! 2. Assign weekly shifts (alternating, seeded from tail state).
//! 3. Distribute one off-day per employee per week.
//! 4. Resolve daily symbols.
//!
//! Pure and deterministic: identical inputs (including roster order)
//! produce identical rows in identical order.

use serde::Serialize;
use tracing::{debug, info};

use super::{
    assign_weekly_shifts, build_daily_rows, distribute_off_days, EmployeeWeeklyShift,
    MissingOffDay, ShiftCounts, WeeklyOffAssignment,
};
use crate::error::RosterResult;
use crate::models::{
    CoverageSettings, Employee, GeneratorConfig, MonthCalendar, MonthSchedule,
    PreviousMonthState, VacationSet, WeekPartitioner,
};

/// Input container for one generation run.
#[derive(Debug, Clone)]
pub struct GenerationInput {
    /// Roster in its stable total order.
    pub employees: Vec<Employee>,
    /// Coverage targets. `None` = generator default.
    pub coverage: Option<CoverageSettings>,
    /// Exact vacation days.
    pub vacations: VacationSet,
    /// Tail shifts of the previous month.
    pub previous: PreviousMonthState,
    pub year: i32,
    /// 1-12.
    pub month: u32,
}

impl GenerationInput {
    /// Creates an input for `year`-`month` with an empty roster.
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            employees: Vec::new(),
            coverage: None,
            vacations: VacationSet::new(),
            previous: PreviousMonthState::new(),
            year,
            month,
        }
    }

    /// Sets the roster.
    pub fn with_employees(mut self, employees: Vec<Employee>) -> Self {
        self.employees = employees;
        self
    }

    /// Sets coverage targets.
    pub fn with_coverage(mut self, coverage: CoverageSettings) -> Self {
        self.coverage = Some(coverage);
        self
    }

    /// Sets vacation days.
    pub fn with_vacations(mut self, vacations: VacationSet) -> Self {
        self.vacations = vacations;
        self
    }

    /// Sets previous-month tail state.
    pub fn with_previous(mut self, previous: PreviousMonthState) -> Self {
        self.previous = previous;
        self
    }
}

/// Observability summary of one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugInfo {
    pub total_employees: usize,
    pub coverage_morning: usize,
    pub coverage_evening: usize,
    pub weeks_in_month: usize,
    /// Vacation days falling inside the target month.
    pub vacation_days_loaded: usize,
    pub same_week_as_prev: bool,
    pub weekly_counts: Vec<ShiftCounts>,
    pub missing_off_days: Vec<MissingOffDay>,
}

/// Result of one run.
#[derive(Debug, Clone)]
pub struct GenerationOutput {
    pub schedule: MonthSchedule,
    pub weekly_shifts: EmployeeWeeklyShift,
    pub weekly_offs: WeeklyOffAssignment,
    pub debug_info: DebugInfo,
}

/// Deterministic monthly roster generator.
///
/// # Example
///
/// ```
/// use shift_roster::models::{Employee, GeneratorConfig};
/// use shift_roster::scheduler::{GenerationInput, RosterGenerator};
///
/// let employees = vec![Employee::new("E1", "Amal"), Employee::new("E2", "Badr")];
/// let input = GenerationInput::new(2024, 6).with_employees(employees);
///
/// let generator = RosterGenerator::new(GeneratorConfig::default());
/// let output = generator.generate(&input).unwrap();
/// assert_eq!(output.schedule.row_count(), 2 * 30);
/// ```
#[derive(Debug, Clone)]
pub struct RosterGenerator {
    config: GeneratorConfig,
    partitioner: WeekPartitioner,
}

impl RosterGenerator {
    /// Creates a generator.
    pub fn new(config: GeneratorConfig) -> Self {
        let partitioner = WeekPartitioner::new(config.epoch);
        Self {
            config,
            partitioner,
        }
    }

    /// The generator's configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The generator's week partitioner.
    pub fn partitioner(&self) -> &WeekPartitioner {
        &self.partitioner
    }

    /// Generates the month.
    ///
    /// # Errors
    /// [`crate::RosterError::InvalidMonth`] for a month outside 1..=12.
    pub fn generate(&self, input: &GenerationInput) -> RosterResult<GenerationOutput> {
        let calendar = MonthCalendar::new(input.year, input.month, &self.partitioner)?;
        let coverage = input.coverage.unwrap_or(self.config.default_coverage);
        let same_week_as_prev = calendar.same_week_as_previous_month();

        info!(
            year = input.year,
            month = input.month,
            employees = input.employees.len(),
            with_history = input.previous.len(),
            "generating roster"
        );

        let plan = assign_weekly_shifts(
            &input.employees,
            &input.previous,
            coverage,
            &calendar.weeks,
            same_week_as_prev,
        );

        let off_plan = distribute_off_days(
            &input.employees,
            &plan.shifts,
            &calendar,
            self.config.pinned_saturday_employee.as_deref(),
        );

        let mut vacations = input.vacations.clone();
        vacations.retain(|d| calendar.contains(d));

        let schedule = build_daily_rows(
            &input.employees,
            &calendar,
            &vacations,
            &off_plan.offs,
            &plan.shifts,
        );

        let debug_info = DebugInfo {
            total_employees: input.employees.len(),
            coverage_morning: coverage.coverage_morning,
            coverage_evening: coverage.coverage_evening,
            weeks_in_month: calendar.weeks.len(),
            vacation_days_loaded: vacations.len(),
            same_week_as_prev,
            weekly_counts: plan.counts,
            missing_off_days: off_plan.missing,
        };
        debug!(?debug_info, "roster generated");

        Ok(GenerationOutput {
            schedule,
            weekly_shifts: plan.shifts,
            weekly_offs: off_plan.offs,
            debug_info,
        })
    }
}

impl Default for RosterGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}
