//! Input validation for roster generation.
//!
//! The generator accepts any roster; these checks are for callers that
//! want to reject bad data before a run. Detects:
//! - Duplicate employee IDs
//! - Blank IDs or names
//! - Allowed-shift sets that permit nothing

use crate::models::Employee;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two employees share the same ID.
    DuplicateId,
    /// An employee has an empty or whitespace ID.
    BlankId,
    /// An employee has an empty or whitespace name.
    BlankName,
    /// An employee's allowed-shift set is present but empty.
    NoAllowedShift,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a roster.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_roster(employees: &[Employee]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for (position, e) in employees.iter().enumerate() {
        if e.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankId,
                format!("Employee at position {position} has a blank ID"),
            ));
        } else if !ids.insert(e.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate employee ID: {}", e.id),
            ));
        }

        if e.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankName,
                format!("Employee '{}' has a blank name", e.id),
            ));
        }

        if e.allowed_shifts.as_ref().is_some_and(|s| s.is_empty()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoAllowedShift,
                format!("Employee '{}' is allowed no shift", e.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Shift;

    #[test]
    fn test_valid_roster() {
        let roster = vec![
            Employee::new("E1", "Amal"),
            Employee::new("E2", "Badr").with_allowed_shifts(vec![Shift::Morning]),
        ];
        assert!(validate_roster(&roster).is_ok());
        assert!(validate_roster(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let roster = vec![Employee::new("E1", "Amal"), Employee::new("E1", "Badr")];
        let errors = validate_roster(&roster).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("E1")));
    }

    #[test]
    fn test_blank_fields() {
        let roster = vec![Employee::new(" ", "Amal"), Employee::new("E2", "")];
        let errors = validate_roster(&roster).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::BlankId));
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::BlankName));
    }

    #[test]
    fn test_multiple_errors() {
        let roster = vec![
            Employee::new("E1", "").with_allowed_shifts(vec![]),
            Employee::new("E1", "Badr"),
        ];
        let errors = validate_roster(&roster).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NoAllowedShift));
    }
}
