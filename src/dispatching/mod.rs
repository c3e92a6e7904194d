//! Dispatching rules and rule engine for ready-queue selection.
//!
//! Each non-FIFO policy picks the next process from the ready set by a
//! primary rule (arrival, burst, remaining time, priority), falling back to
//! tie-breaking rules and finally to input order.
//!
//! # Usage
//!
//! ```
//! use u_cpu_sched::dispatching::{rules, RuleEngine};
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::ShortestBurst)
//!     .with_tie_breaker(rules::EarliestArrival);
//! assert_eq!(engine.rule_names(), vec!["SJF", "FCFS"]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod engine;
pub mod rules;

pub use engine::RuleEngine;

use crate::models::ProcessState;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = i64;

/// A dispatching rule that ranks ready processes.
///
/// # Score Convention
/// **Lower score = dispatched first.** Rules return smaller values for
/// processes that should get the CPU sooner.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "SRTF").
    fn name(&self) -> &'static str;

    /// Evaluates a ready process. Lower = dispatched first.
    fn evaluate(&self, state: &ProcessState) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
