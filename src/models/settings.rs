//! Typed generator settings.
//!
//! Stored settings arrive as a loose string map. They are coerced exactly
//! once, here, into [`CoverageSettings`]; the generator only ever sees
//! typed integers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

use super::calendar::DEFAULT_EPOCH;

/// Default weekly Morning headcount target.
pub const DEFAULT_COVERAGE_MORNING: usize = 5;
/// Default weekly Evening headcount target.
pub const DEFAULT_COVERAGE_EVENING: usize = 6;

/// Settings-map key for the Morning target.
pub const COVERAGE_MORNING_KEY: &str = "coverageMorning";
/// Settings-map key for the Evening target.
pub const COVERAGE_EVENING_KEY: &str = "coverageEvening";

/// Target headcount per shift.
///
/// Only seeds the first week's split when no history exists; later weeks
/// follow structural alternation, not a quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageSettings {
    pub coverage_morning: usize,
    pub coverage_evening: usize,
}

impl Default for CoverageSettings {
    fn default() -> Self {
        Self {
            coverage_morning: DEFAULT_COVERAGE_MORNING,
            coverage_evening: DEFAULT_COVERAGE_EVENING,
        }
    }
}

impl CoverageSettings {
    pub fn new(coverage_morning: usize, coverage_evening: usize) -> Self {
        Self {
            coverage_morning,
            coverage_evening,
        }
    }

    /// Coerces a raw settings map. Absent or malformed keys fall back to
    /// the defaults individually; this never fails.
    pub fn from_raw(raw: &HashMap<String, String>) -> Self {
        let defaults = Self::default();
        Self {
            coverage_morning: coerce(raw, COVERAGE_MORNING_KEY, defaults.coverage_morning),
            coverage_evening: coerce(raw, COVERAGE_EVENING_KEY, defaults.coverage_evening),
        }
    }
}

fn coerce(raw: &HashMap<String, String>, key: &str, default: usize) -> usize {
    match raw.get(key) {
        None => default,
        Some(value) => match value.trim().parse::<usize>() {
            Ok(n) => n,
            Err(err) => {
                warn!(key, value = %value, %err, default, "malformed coverage setting, using default");
                default
            }
        },
    }
}

/// Construction-time configuration for the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Any date; weeks are anchored on the Saturday on-or-before it.
    pub epoch: NaiveDate,
    /// Coverage used when the caller supplies none.
    pub default_coverage: CoverageSettings,
    /// Employee who always rests on Saturday when Saturday is available.
    pub pinned_saturday_employee: Option<String>,
    /// Employee whose working symbols export as relief (`B`).
    pub relief_employee: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            epoch: DEFAULT_EPOCH,
            default_coverage: CoverageSettings::default(),
            pinned_saturday_employee: None,
            relief_employee: None,
        }
    }
}

impl GeneratorConfig {
    /// Sets the week epoch.
    pub fn with_epoch(mut self, epoch: NaiveDate) -> Self {
        self.epoch = epoch;
        self
    }

    /// Sets the Saturday-pinned employee.
    pub fn with_pinned_saturday(mut self, employee_id: impl Into<String>) -> Self {
        self.pinned_saturday_employee = Some(employee_id.into());
        self
    }

    /// Sets the relief employee.
    pub fn with_relief_employee(mut self, employee_id: impl Into<String>) -> Self {
        self.relief_employee = Some(employee_id.into());
        self
    }

    /// Sets the fallback coverage.
    pub fn with_default_coverage(mut self, coverage: CoverageSettings) -> Self {
        self.default_coverage = coverage;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let c = CoverageSettings::from_raw(&HashMap::new());
        assert_eq!(c, CoverageSettings::new(5, 6));
    }

    #[test]
    fn test_coercion() {
        let c = CoverageSettings::from_raw(&raw(&[
            ("coverageMorning", " 4 "),
            ("coverageEvening", "7"),
        ]));
        assert_eq!(c, CoverageSettings::new(4, 7));
    }

    #[test]
    fn test_malformed_values_fall_back_per_key() {
        let c = CoverageSettings::from_raw(&raw(&[
            ("coverageMorning", "five"),
            ("coverageEvening", "-2"),
        ]));
        assert_eq!(c, CoverageSettings::default());

        let c = CoverageSettings::from_raw(&raw(&[("coverageMorning", "3")]));
        assert_eq!(c, CoverageSettings::new(3, 6));
    }

    #[test]
    fn test_config_deserialize_partial() {
        let cfg: GeneratorConfig =
            serde_json::from_str(r#"{"pinnedSaturdayEmployee": "E7"}"#).unwrap();
        assert_eq!(cfg.pinned_saturday_employee.as_deref(), Some("E7"));
        assert_eq!(cfg.epoch, DEFAULT_EPOCH);
        assert_eq!(cfg.default_coverage, CoverageSettings::default());
        assert!(cfg.relief_employee.is_none());
    }
}
