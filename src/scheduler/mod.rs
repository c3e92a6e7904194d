//! Single-CPU schedulers and KPI evaluation.
//!
//! # Algorithms
//!
//! | Algorithm | Selection | Decision point |
//! |-----------|-----------|----------------|
//! | FCFS | earliest arrival | completion |
//! | SJF | shortest burst | completion |
//! | SRTF | shortest remaining | completion or next arrival |
//! | Round Robin | FIFO queue | `min(quantum, remaining)` |
//! | Priority (NP) | lowest priority value | completion |
//! | Priority (P) | lowest priority value | completion or next arrival |
//!
//! Ties break by earlier arrival, then input order.
//!
//! # KPI
//!
//! [`ScheduleKpi`] computes turnaround, waiting, and response averages plus
//! CPU utilization and throughput.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod kpi;
mod nonpreemptive;
mod preemptive;
mod request;
mod round_robin;
mod simulation;

pub use kpi::{completion_metrics, round2, ScheduleKpi};
pub use request::{ScheduleRequest, SchedulingParams};

use log::{debug, warn};

use crate::models::{Algorithm, Process, SchedulingResult};
use crate::validation::{validate_input, ScheduleError};

/// Schedules `processes` under `algorithm`.
///
/// Input is validated first; on failure nothing is simulated and every
/// detected problem is returned in [`ScheduleError::InvalidInput`].
///
/// # Example
///
/// ```
/// use u_cpu_sched::models::{Algorithm, Process};
/// use u_cpu_sched::scheduler::{schedule, SchedulingParams};
///
/// let processes = vec![
///     Process::new("P1", 0, 8),
///     Process::new("P2", 1, 4),
///     Process::new("P3", 2, 9),
/// ];
/// let result = schedule(&processes, Algorithm::Srtf, &SchedulingParams::default()).unwrap();
/// assert_eq!(result.timeline.to_string(), "[P1:0-1, P2:1-5, P1:5-12, P3:12-21]");
/// assert_eq!(result.result_for("P2").unwrap().waiting_time, 0);
/// ```
pub fn schedule(
    processes: &[Process],
    algorithm: Algorithm,
    params: &SchedulingParams,
) -> Result<SchedulingResult, ScheduleError> {
    if let Err(errors) = validate_input(processes, algorithm, params) {
        warn!(
            "{}: rejected input with {} problem(s)",
            algorithm.name(),
            errors.len()
        );
        return Err(ScheduleError::InvalidInput(errors));
    }

    debug!(
        "{}: scheduling {} process(es)",
        algorithm.name(),
        processes.len()
    );

    let result = match algorithm {
        Algorithm::Fcfs | Algorithm::Sjf | Algorithm::PriorityNonPreemptive => {
            nonpreemptive::schedule(processes, algorithm)
        }
        Algorithm::Srtf | Algorithm::PriorityPreemptive => {
            preemptive::schedule(processes, algorithm)
        }
        // Quantum presence and range were checked by `validate_input`.
        Algorithm::RoundRobin => round_robin::schedule(processes, params.time_quantum.unwrap_or(1)),
    };

    debug!(
        "{}: makespan {} over {} block(s)",
        algorithm.name(),
        result.makespan(),
        result.timeline.len()
    );

    Ok(result)
}
