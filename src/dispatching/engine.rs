//! Rule engine for ready-queue selection.
//!
//! Composes dispatching rules sequentially: the next rule is consulted only
//! when all earlier rules tie. Input order breaks any remaining tie, so the
//! resulting order is total and deterministic.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, DispatchingRule, RuleScore};
use crate::models::{Algorithm, ProcessState};

/// A composable rule engine for process selection.
///
/// # Example
/// ```
/// use u_cpu_sched::dispatching::{rules, RuleEngine};
/// use u_cpu_sched::models::{Process, ProcessState};
///
/// let ready = vec![
///     ProcessState::new(0, &Process::new("P1", 0, 8)),
///     ProcessState::new(1, &Process::new("P2", 1, 4)),
/// ];
/// let engine = RuleEngine::new()
///     .with_rule(rules::ShortestRemaining)
///     .with_tie_breaker(rules::EarliestArrival);
/// assert_eq!(engine.select_best(&ready), Some(1));
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine (pure input order).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Selection rules for `algorithm`, or `None` for Round Robin, which
    /// dispatches from a FIFO queue instead.
    ///
    /// Every engine breaks ties by earlier arrival, then input order.
    pub fn for_algorithm(algorithm: Algorithm) -> Option<Self> {
        let engine = match algorithm {
            Algorithm::Fcfs => Self::new().with_rule(rules::EarliestArrival),
            Algorithm::Sjf => Self::new()
                .with_rule(rules::ShortestBurst)
                .with_tie_breaker(rules::EarliestArrival),
            Algorithm::Srtf => Self::new()
                .with_rule(rules::ShortestRemaining)
                .with_tie_breaker(rules::EarliestArrival),
            Algorithm::PriorityNonPreemptive | Algorithm::PriorityPreemptive => Self::new()
                .with_rule(rules::LowestPriorityValue)
                .with_tie_breaker(rules::EarliestArrival),
            Algorithm::RoundRobin => return None,
        };
        Some(engine)
    }

    /// Adds a primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted only when earlier rules tie.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts ready processes (first to run first).
    ///
    /// Returns indices into `ready`.
    pub fn sort_indices(&self, ready: &[ProcessState]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..ready.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&ready[a], &ready[b]));
        indices
    }

    /// Returns the index of the process to dispatch next.
    pub fn select_best(&self, ready: &[ProcessState]) -> Option<usize> {
        (0..ready.len()).min_by(|&a, &b| self.compare(&ready[a], &ready[b]))
    }

    /// Scores from each rule for one process.
    pub fn evaluate(&self, state: &ProcessState) -> Vec<RuleScore> {
        self.rules.iter().map(|r| r.evaluate(state)).collect()
    }

    /// Total order: rules in sequence, then input order.
    pub fn compare(&self, a: &ProcessState, b: &ProcessState) -> Ordering {
        for rule in &self.rules {
            match rule.evaluate(a).cmp(&rule.evaluate(b)) {
                Ordering::Equal => continue,
                other => return other,
            }
        }
        a.index.cmp(&b.index)
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}
