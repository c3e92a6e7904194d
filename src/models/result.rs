//! Scheduling result model.
//!
//! A result pairs the per-process completion records with the Gantt
//! timeline that produced them.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use super::{Algorithm, Process, Timeline};
use crate::scheduler::{completion_metrics, ScheduleKpi};

/// Completion record for one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Process identifier.
    pub id: String,
    /// Arrival time.
    pub arrival_time: i64,
    /// Total CPU time.
    pub burst_time: i64,
    /// Priority as supplied in the input.
    pub priority: Option<i64>,
    /// First time the process was dispatched.
    pub start_time: i64,
    /// Completion time.
    pub end_time: i64,
    /// `end_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
    /// `start_time - arrival_time`.
    pub response_time: i64,
}

impl ProcessResult {
    /// Builds the record for `process` dispatched first at `start_time` and
    /// completed at `end_time`.
    pub fn from_completion(process: &Process, start_time: i64, end_time: i64) -> Self {
        let (turnaround_time, waiting_time) =
            completion_metrics(process.arrival_time, process.burst_time, end_time);
        Self {
            id: process.id.clone(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            priority: process.priority,
            start_time,
            end_time,
            turnaround_time,
            waiting_time,
            response_time: start_time - process.arrival_time,
        }
    }

    /// Whether the process ran in one uninterrupted slice.
    #[inline]
    pub fn ran_uninterrupted(&self) -> bool {
        self.end_time - self.start_time == self.burst_time
    }
}

/// Output of a scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulingResult {
    /// Algorithm that produced this result.
    pub algorithm: Algorithm,
    /// Completion records, in completion order.
    pub process_results: Vec<ProcessResult>,
    /// CPU occupancy over `[0, makespan]`.
    pub timeline: Timeline,
}

impl SchedulingResult {
    /// Creates an empty result for `algorithm`.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            process_results: Vec::new(),
            timeline: Timeline::new(),
        }
    }

    /// Latest completion time.
    pub fn makespan(&self) -> i64 {
        self.timeline.makespan()
    }

    /// Finds the record for a given process.
    pub fn result_for(&self, process_id: &str) -> Option<&ProcessResult> {
        self.process_results.iter().find(|r| r.id == process_id)
    }

    /// Process IDs in completion order.
    pub fn completion_order(&self) -> Vec<&str> {
        self.process_results.iter().map(|r| r.id.as_str()).collect()
    }

    /// Number of completed processes.
    pub fn process_count(&self) -> usize {
        self.process_results.len()
    }

    /// Computes aggregate metrics for this result.
    pub fn kpi(&self) -> ScheduleKpi {
        ScheduleKpi::calculate(self)
    }
}
