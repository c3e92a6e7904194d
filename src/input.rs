//! Process-set construction from columnar input.
//!
//! Callers typically collect arrival, burst, and priority values as parallel
//! columns (or whitespace-separated text fields). These helpers turn them
//! into labelled [`Process`] records (`P1`, `P2`, ...) in input order.

use crate::models::Process;
use crate::validation::{ValidationError, ValidationErrorKind};

/// Parses whitespace-separated integers from a text field.
///
/// `field` names the field in error messages. Empty text yields an empty list.
pub fn parse_values(field: &str, text: &str) -> Result<Vec<i64>, ValidationError> {
    text.split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|_| {
                ValidationError::new(
                    ValidationErrorKind::InvalidNumber,
                    format!("{field}: '{token}' is not an integer"),
                )
            })
        })
        .collect()
}

/// Builds processes from parallel columns.
///
/// `priorities` is only needed for priority algorithms; when given, it must
/// have the same length as the other columns.
pub fn processes_from_columns(
    arrivals: &[i64],
    bursts: &[i64],
    priorities: Option<&[i64]>,
) -> Result<Vec<Process>, ValidationError> {
    if arrivals.len() != bursts.len() {
        return Err(ValidationError::new(
            ValidationErrorKind::LengthMismatch,
            format!(
                "Number of arrival times ({}) must match number of burst times ({})",
                arrivals.len(),
                bursts.len()
            ),
        ));
    }
    if let Some(prios) = priorities {
        if prios.len() != arrivals.len() {
            return Err(ValidationError::new(
                ValidationErrorKind::LengthMismatch,
                format!(
                    "Number of priority values ({}) must match number of processes ({})",
                    prios.len(),
                    arrivals.len()
                ),
            ));
        }
    }

    let processes = arrivals
        .iter()
        .zip(bursts)
        .enumerate()
        .map(|(i, (&arrival, &burst))| {
            let p = Process::new(Process::default_id(i), arrival, burst);
            match priorities {
                Some(prios) => p.with_priority(prios[i]),
                None => p,
            }
        })
        .collect();

    Ok(processes)
}

/// Builds processes from whitespace-separated text fields.
pub fn processes_from_text(
    arrivals: &str,
    bursts: &str,
    priorities: Option<&str>,
) -> Result<Vec<Process>, ValidationError> {
    let arrivals = parse_values("arrival times", arrivals)?;
    let bursts = parse_values("burst times", bursts)?;
    let priorities = priorities
        .map(|text| parse_values("priorities", text))
        .transpose()?;
    processes_from_columns(&arrivals, &bursts, priorities.as_deref())
}
