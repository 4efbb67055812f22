//! Error types.
//!
//! Generation itself only fails on an impossible calendar target; every
//! other degenerate input (empty roster, missing settings, no history)
//! falls back to documented defaults. Store failures are surfaced to the
//! caller unchanged.

use thiserror::Error;

use crate::validation::ValidationError;

/// Result alias used throughout the crate.
pub type RosterResult<T> = Result<T, RosterError>;

/// Errors raised by generation and its storage boundary.
#[derive(Debug, Error)]
pub enum RosterError {
    /// Target month is outside 1..=12 or the year is not representable.
    #[error("invalid target month: {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },

    /// Roster failed input validation.
    #[error("roster validation failed ({} problem(s))", .0.len())]
    Validation(Vec<ValidationError>),

    /// Loader or writer could not complete.
    #[error("store error: {message}")]
    Store { message: String },
}

impl RosterError {
    /// Creates a store error.
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }
}
