//! Scheduling request and run parameters.
//!
//! A [`ScheduleRequest`] bundles a process set with the algorithm and its
//! parameters, so a whole run can be built fluently or deserialized from a
//! configuration document.

use serde::{Deserialize, Serialize};

use super::schedule;
use crate::models::{Algorithm, Process, SchedulingResult};
use crate::validation::ScheduleError;

/// Algorithm parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulingParams {
    /// Round Robin time slice. Required (and `>= 1`) for Round Robin only.
    #[serde(default)]
    pub time_quantum: Option<i64>,
}

impl SchedulingParams {
    /// Creates empty parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Round Robin time quantum.
    pub fn with_time_quantum(mut self, time_quantum: i64) -> Self {
        self.time_quantum = Some(time_quantum);
        self
    }
}

/// Input container for a scheduling run.
///
/// # Example
///
/// ```
/// use u_cpu_sched::models::{Algorithm, Process};
/// use u_cpu_sched::scheduler::ScheduleRequest;
///
/// let request = ScheduleRequest::new(
///     vec![Process::new("P1", 0, 4), Process::new("P2", 0, 4)],
///     Algorithm::RoundRobin,
/// )
/// .with_time_quantum(2);
///
/// let result = request.run().unwrap();
/// assert_eq!(result.timeline.to_string(), "[P1:0-2, P2:2-4, P1:4-6, P2:6-8]");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Processes to schedule.
    pub processes: Vec<Process>,
    /// Scheduling discipline.
    pub algorithm: Algorithm,
    /// Algorithm parameters.
    #[serde(default)]
    pub params: SchedulingParams,
}

impl ScheduleRequest {
    /// Creates a new request.
    pub fn new(processes: Vec<Process>, algorithm: Algorithm) -> Self {
        Self {
            processes,
            algorithm,
            params: SchedulingParams::default(),
        }
    }

    /// Sets the Round Robin time quantum.
    pub fn with_time_quantum(mut self, time_quantum: i64) -> Self {
        self.params.time_quantum = Some(time_quantum);
        self
    }

    /// Replaces the run parameters.
    pub fn with_params(mut self, params: SchedulingParams) -> Self {
        self.params = params;
        self
    }

    /// Adds a process.
    pub fn with_process(mut self, process: Process) -> Self {
        self.processes.push(process);
        self
    }

    /// Validates and runs the request.
    pub fn run(&self) -> Result<SchedulingResult, ScheduleError> {
        schedule(&self.processes, self.algorithm, &self.params)
    }
}
