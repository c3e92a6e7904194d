//! Process model.
//!
//! A process is a single CPU burst to be scheduled: it becomes ready at its
//! arrival time and needs `burst_time` units of CPU to complete.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process submitted to the scheduler.
///
/// Immutable input record. Every scheduling run works on its own copy, so the
/// same slice of processes can be scheduled under several algorithms.
///
/// # Time Representation
/// All times are integer time units relative to the simulation epoch (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier (e.g. `"P1"`).
    pub id: String,
    /// Time at which the process becomes ready.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// Scheduling priority (lower = more urgent). Only read by priority policies.
    pub priority: Option<i64>,
}

impl Process {
    /// Creates a process with the given ID, arrival and burst times.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: None,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Default label for the process at `index` in input order (`P1`, `P2`, ...).
    pub fn default_id(index: usize) -> String {
        format!("P{}", index + 1)
    }

    /// Whether a priority value has been supplied.
    pub fn has_priority(&self) -> bool {
        self.priority.is_some()
    }
}

/// Working copy of a process during one scheduling run.
///
/// Tracks remaining CPU demand and first dispatch time. Invariant:
/// `0 <= remaining <= process.burst_time`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessState {
    /// Position of the process in the caller's input (final tie-breaker).
    pub index: usize,
    /// The input record.
    pub process: Process,
    /// CPU time still required.
    pub remaining: i64,
    /// Time of the first dispatch, once dispatched.
    pub first_dispatch: Option<i64>,
}

impl ProcessState {
    /// Creates a fresh working copy for the process at input position `index`.
    pub fn new(index: usize, process: &Process) -> Self {
        Self {
            index,
            process: process.clone(),
            remaining: process.burst_time,
            first_dispatch: None,
        }
    }

    /// Process ID.
    #[inline]
    pub fn id(&self) -> &str {
        &self.process.id
    }

    /// Arrival time.
    #[inline]
    pub fn arrival_time(&self) -> i64 {
        self.process.arrival_time
    }

    /// Total burst time.
    #[inline]
    pub fn burst_time(&self) -> i64 {
        self.process.burst_time
    }

    /// Whether all CPU demand has been served.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    /// Runs the process for `amount` units starting at `now`.
    ///
    /// Records the first dispatch time and never drives `remaining` below 0.
    pub fn run(&mut self, now: i64, amount: i64) {
        if self.first_dispatch.is_none() {
            self.first_dispatch = Some(now);
        }
        self.remaining = (self.remaining - amount).max(0);
    }
}

/// Total CPU demand of a process set, or `None` if it overflows `i64`.
pub fn total_burst(processes: &[Process]) -> Option<i64> {
    processes
        .iter()
        .try_fold(0i64, |acc, p| acc.checked_add(p.burst_time))
}
