//! Input validation for scheduling runs.
//!
//! Checks a process set and its run parameters before any simulation starts.
//! Detects:
//! - Empty process sets
//! - Duplicate IDs
//! - Negative arrival times and non-positive burst times
//! - Missing priorities for priority algorithms
//! - Missing or non-positive Round Robin time quantum
//! - Time horizons that do not fit the `i64` clock
//!
//! All problems are collected and reported together; the scheduler never
//! produces a partial schedule for rejected input.

use std::collections::HashSet;
use std::fmt;

use crate::models::{total_burst, Algorithm, Process};
use crate::scheduler::SchedulingParams;

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
    /// No processes were supplied.
    EmptyInput,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process has a burst time below 1.
    NonPositiveBurst,
    /// A priority algorithm was requested but a process has no priority.
    MissingPriority,
    /// Round Robin quantum is missing or below 1.
    InvalidTimeQuantum,
    /// Parallel input columns have different lengths.
    LengthMismatch,
    /// A text field contains a token that is not an integer.
    InvalidNumber,
    /// Latest arrival plus total burst exceeds the `i64` clock range.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Error returned by the scheduler entry points.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// The request failed validation; no schedule was computed.
    InvalidInput(Vec<ValidationError>),
}

impl ScheduleError {
    /// The individual validation errors.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            ScheduleError::InvalidInput(errors) => errors,
        }
    }

    /// Whether any error has the given kind.
    pub fn has_kind(&self, kind: ValidationErrorKind) -> bool {
        self.errors().iter().any(|e| e.kind == kind)
    }
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::InvalidInput(errors) => {
                f.write_str("invalid input: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    f.write_str(&e.message)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ScheduleError {}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        ScheduleError::InvalidInput(errors)
    }
}

impl From<ValidationError> for ScheduleError {
    fn from(error: ValidationError) -> Self {
        ScheduleError::InvalidInput(vec![error])
    }
}

/// Validates a process set and run parameters for `algorithm`.
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate process IDs
/// 3. `arrival_time >= 0` and `burst_time >= 1`
/// 4. Every process has a priority (priority algorithms only)
/// 5. `time_quantum` present and `>= 1` (Round Robin only)
/// 6. Latest arrival plus total burst fits in `i64`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    processes: &[Process],
    algorithm: Algorithm,
    params: &SchedulingParams,
) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "No processes to schedule",
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
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }

        if p.burst_time < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process '{}' has non-positive burst time {}",
                    p.id, p.burst_time
                ),
            ));
        }

        if algorithm.requires_priority() && p.priority.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingPriority,
                format!("Process '{}' has no priority value", p.id),
            ));
        }
    }

    // Every clock value is bounded by latest arrival + total burst.
    if errors.is_empty() {
        let latest_arrival = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
        let horizon = total_burst(processes).and_then(|b| b.checked_add(latest_arrival));
        if horizon.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::TimeOverflow,
                "Latest arrival plus total burst time overflows the simulation clock",
            ));
        }
    }

    if algorithm.requires_time_quantum() {
        match params.time_quantum {
            Some(q) if q >= 1 => {}
            Some(q) => errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTimeQuantum,
                format!("Time quantum must be a positive integer, got {q}"),
            )),
            None => errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTimeQuantum,
                "Round Robin requires a time quantum",
            )),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
