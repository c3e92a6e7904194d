//! Built-in dispatching rules.
//!
//! | Rule | Score | Used by |
//! |------|-------|---------|
//! | `EarliestArrival` | arrival time | FCFS, tie-breaks |
//! | `ShortestBurst` | burst time | SJF |
//! | `ShortestRemaining` | remaining time | SRTF |
//! | `LowestPriorityValue` | priority value | Priority (both modes) |
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{DispatchingRule, RuleScore};
use crate::models::ProcessState;

/// First Come First Served.
///
/// Prioritizes processes that arrived earlier.
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl DispatchingRule for EarliestArrival {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, state: &ProcessState) -> RuleScore {
        state.arrival_time()
    }

    fn description(&self) -> &'static str {
        "First Come First Served"
    }
}

/// Shortest Job First.
///
/// Prioritizes processes with the shorter total burst. Minimizes mean
/// waiting time among non-preemptive policies.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, state: &ProcessState) -> RuleScore {
        state.burst_time()
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Shortest Remaining Time First.
///
/// Prioritizes processes closest to completion.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl DispatchingRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn evaluate(&self, state: &ProcessState) -> RuleScore {
        state.remaining
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}

/// Priority rule (lower value = more urgent).
///
/// Processes without a priority rank last.
#[derive(Debug, Clone, Copy)]
pub struct LowestPriorityValue;

impl DispatchingRule for LowestPriorityValue {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, state: &ProcessState) -> RuleScore {
        state.process.priority.unwrap_or(RuleScore::MAX)
    }

    fn description(&self) -> &'static str {
        "Process Priority"
    }
}
