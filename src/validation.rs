//! Input validation for simulation runs.
//!
//! Checks structural integrity of the process set (and, for round robin,
//! the quantum) before any simulation work happens. Detects:
//! - Empty process lists
//! - Duplicate process IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Negative priorities
//! - Missing or non-positive quanta
//!
//! All problems are collected and reported together; a run that fails
//! validation performs no partial work.

use crate::models::Process;
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
    /// The process list is empty.
    EmptyProcessList,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process needs less than one tick of CPU time.
    NonPositiveBurst,
    /// A process has a negative priority.
    NegativePriority,
    /// Round robin was requested without a positive quantum.
    InvalidQuantum,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set.
///
/// Checks:
/// 1. The list is non-empty
/// 2. No duplicate process IDs
/// 3. `arrival_time >= 0` for every process
/// 4. `burst_time >= 1` for every process
/// 5. `priority >= 0` for every process
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessList,
            "No processes to run",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' has negative arrival time {}", p.id, p.arrival_time),
            ));
        }

        if p.burst_time < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has non-positive burst time {}", p.id, p.burst_time),
            ));
        }

        if p.priority < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativePriority,
                format!("Process '{}' has negative priority {}", p.id, p.priority),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a round robin quantum: it must be present and positive.
/// Returns the quantum itself so callers can use the checked value directly.
pub fn validate_quantum(quantum: Option<i64>) -> Result<i64, Vec<ValidationError>> {
    match quantum {
        Some(q) if q >= 1 => Ok(q),
        Some(q) => Err(vec![ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!("Quantum must be a positive number of ticks, got {q}"),
        )]),
        None => Err(vec![ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            "Round robin requires a quantum",
        )]),
    }
}
