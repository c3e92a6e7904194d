//! Shared event-driven simulation state.
//!
//! Every policy drives the same clock, arrival pool, and result builder:
//!
//! 1. Move every pending process with `arrival_time <= clock` into the
//!    policy's ready structure.
//! 2. Nothing ready but processes pending → idle until the next arrival.
//! 3. Nothing ready and nothing pending → done.
//! 4. Otherwise the policy selects a process and runs it to its next
//!    decision point.

use std::collections::VecDeque;

use log::trace;

use crate::models::{Algorithm, Process, ProcessResult, ProcessState, SchedulingResult};

/// Clock, not-yet-arrived pool, and the result under construction.
#[derive(Debug)]
pub(crate) struct Simulation {
    clock: i64,
    /// Sorted by arrival time, then input order.
    pending: VecDeque<ProcessState>,
    result: SchedulingResult,
}

impl Simulation {
    /// Starts a run at t=0 with fresh working copies of `processes`.
    pub(crate) fn new(processes: &[Process], algorithm: Algorithm) -> Self {
        let mut pending: Vec<ProcessState> = processes
            .iter()
            .enumerate()
            .map(|(i, p)| ProcessState::new(i, p))
            .collect();
        // Stable: equal arrivals keep input order.
        pending.sort_by_key(|s| s.arrival_time());

        Self {
            clock: 0,
            pending: pending.into(),
            result: SchedulingResult::new(algorithm),
        }
    }

    /// Current simulation time.
    #[inline]
    pub(crate) fn clock(&self) -> i64 {
        self.clock
    }

    /// Earliest arrival among processes not yet admitted.
    #[inline]
    pub(crate) fn next_arrival(&self) -> Option<i64> {
        self.pending.front().map(ProcessState::arrival_time)
    }

    /// Moves every pending process with `arrival_time <= clock` into `ready`,
    /// in arrival order.
    pub(crate) fn admit_arrivals<E: Extend<ProcessState>>(&mut self, ready: &mut E) {
        let clock = self.clock;
        let arrived = self
            .pending
            .iter()
            .take_while(|s| s.arrival_time() <= clock)
            .count();
        ready.extend(self.pending.drain(..arrived));
    }

    /// Records an idle gap up to the next arrival and advances the clock.
    ///
    /// Returns `false` when nothing is pending, i.e. the run is over.
    pub(crate) fn idle_until_next_arrival(&mut self) -> bool {
        match self.next_arrival() {
            Some(at) => {
                trace!("t={} idle until {}", self.clock, at);
                self.result.timeline.push_idle(self.clock, at);
                self.clock = self.clock.max(at);
                true
            }
            None => false,
        }
    }

    /// Runs `state` for `amount` time units from the current clock.
    pub(crate) fn run(&mut self, state: &mut ProcessState, amount: i64) {
        let start = self.clock;
        let end = start + amount;
        trace!(
            "t={} dispatch {} for {} (remaining {})",
            start,
            state.id(),
            amount,
            state.remaining
        );
        self.result.timeline.push_process(state.id(), start, end);
        state.run(start, amount);
        self.clock = end;
    }

    /// Finalizes a process that completed at the current clock.
    pub(crate) fn complete(&mut self, state: ProcessState) {
        let start = state
            .first_dispatch
            .unwrap_or(self.clock - state.burst_time());
        trace!("t={} complete {}", self.clock, state.id());
        self.result
            .process_results
            .push(ProcessResult::from_completion(&state.process, start, self.clock));
    }

    /// Consumes the simulation, returning the finished result.
    pub(crate) fn finish(self) -> SchedulingResult {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("P1", 4, 2),
            Process::new("P2", 0, 1),
            Process::new("P3", 4, 3),
        ]
    }

    #[test]
    fn test_pending_sorted_by_arrival_then_input() {
        let mut sim = Simulation::new(&sample_processes(), Algorithm::Fcfs);
        assert_eq!(sim.next_arrival(), Some(0));

        let mut ready: Vec<ProcessState> = Vec::new();
        sim.admit_arrivals(&mut ready);
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].id(), "P2");
        assert_eq!(ready[0].index, 1);

        assert!(sim.idle_until_next_arrival());
        assert_eq!(sim.clock(), 4);
        sim.admit_arrivals(&mut ready);
        let ids: Vec<&str> = ready.iter().map(ProcessState::id).collect();
        assert_eq!(ids, vec!["P2", "P1", "P3"]);
        assert_eq!(sim.next_arrival(), None);
    }

    #[test]
    fn test_idle_without_pending_ends_run() {
        let mut sim = Simulation::new(&[], Algorithm::Fcfs);
        assert!(!sim.idle_until_next_arrival());
        assert!(sim.finish().timeline.is_empty());
    }

    #[test]
    fn test_run_and_complete() {
        let ps = vec![Process::new("P1", 2, 3)];
        let mut sim = Simulation::new(&ps, Algorithm::Fcfs);
        let mut ready: Vec<ProcessState> = Vec::new();

        sim.admit_arrivals(&mut ready);
        assert!(ready.is_empty());
        assert!(sim.idle_until_next_arrival());
        sim.admit_arrivals(&mut ready);

        let mut state = ready.remove(0);
        sim.run(&mut state, 1);
        sim.run(&mut state, 2);
        assert!(state.is_complete());
        sim.complete(state);

        let result = sim.finish();
        assert_eq!(result.timeline.to_string(), "[Idle:0-2, P1:2-5]");
        let r = &result.process_results[0];
        assert_eq!((r.start_time, r.end_time), (2, 5));
        assert_eq!(r.waiting_time, 0);
    }
}
