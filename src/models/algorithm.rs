//! Scheduling algorithm selector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Single-CPU scheduling discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// First Come First Served.
    Fcfs,
    /// Shortest Job First (non-preemptive).
    Sjf,
    /// Shortest Remaining Time First (preemptive SJF).
    Srtf,
    /// Round Robin with a fixed time quantum.
    #[serde(rename = "rr")]
    RoundRobin,
    /// Priority scheduling, run to completion.
    #[serde(rename = "priority-np")]
    PriorityNonPreemptive,
    /// Priority scheduling, preempted on arrival of a more urgent process.
    #[serde(rename = "priority-p")]
    PriorityPreemptive,
}

impl Algorithm {
    /// Every supported algorithm, in menu order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Srtf,
        Algorithm::RoundRobin,
        Algorithm::PriorityNonPreemptive,
        Algorithm::PriorityPreemptive,
    ];

    /// Short tag (`"fcfs"`, `"rr"`, `"priority-np"`, ...).
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "fcfs",
            Algorithm::Sjf => "sjf",
            Algorithm::Srtf => "srtf",
            Algorithm::RoundRobin => "rr",
            Algorithm::PriorityNonPreemptive => "priority-np",
            Algorithm::PriorityPreemptive => "priority-p",
        }
    }

    /// Human-readable name.
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First Come First Served (FCFS)",
            Algorithm::Sjf => "Shortest Job First (Non-preemptive)",
            Algorithm::Srtf => "Shortest Remaining Time First (Preemptive)",
            Algorithm::RoundRobin => "Round Robin",
            Algorithm::PriorityNonPreemptive => "Priority (Non-preemptive)",
            Algorithm::PriorityPreemptive => "Priority (Preemptive)",
        }
    }

    /// Whether a running process can lose the CPU before it completes.
    pub fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Algorithm::Srtf | Algorithm::RoundRobin | Algorithm::PriorityPreemptive
        )
    }

    /// Whether every process must carry a priority value.
    pub fn requires_priority(&self) -> bool {
        matches!(
            self,
            Algorithm::PriorityNonPreemptive | Algorithm::PriorityPreemptive
        )
    }

    /// Whether a time quantum must be supplied.
    pub fn requires_time_quantum(&self) -> bool {
        matches!(self, Algorithm::RoundRobin)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Error returned when parsing an unknown algorithm tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown scheduling algorithm: '{}'", self.0)
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == tag)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}
