//! Run-to-completion policies: FCFS, SJF, and non-preemptive Priority.
//!
//! # Algorithm
//! At each decision point the rule engine picks one ready process, which then
//! holds the CPU until it completes. Processes arriving meanwhile wait for
//! the next decision point.
//!
//! # Complexity
//! O(n²) in the worst case (linear selection over the ready set per dispatch).

use crate::dispatching::RuleEngine;
use crate::models::{Algorithm, Process, ProcessState, SchedulingResult};

use super::simulation::Simulation;

/// Schedules `processes` without preemption, selecting by `algorithm`'s rules.
pub(crate) fn schedule(processes: &[Process], algorithm: Algorithm) -> SchedulingResult {
    let engine = RuleEngine::for_algorithm(algorithm).unwrap_or_default();
    let mut sim = Simulation::new(processes, algorithm);
    let mut ready: Vec<ProcessState> = Vec::with_capacity(processes.len());

    loop {
        sim.admit_arrivals(&mut ready);

        let Some(idx) = engine.select_best(&ready) else {
            if sim.idle_until_next_arrival() {
                continue;
            }
            break;
        };

        let mut state = ready.swap_remove(idx);
        let burst = state.remaining;
        sim.run(&mut state, burst);
        sim.complete(state);
    }

    sim.finish()
}
