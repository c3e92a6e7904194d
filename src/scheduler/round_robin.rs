//! Round Robin policy.
//!
//! # Algorithm
//! Strict FIFO ready queue. The head process runs for
//! `min(quantum, remaining)`. Processes that arrived up to and including the
//! end of the slice join the queue before the preempted process is
//! re-enqueued at the tail.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use std::collections::VecDeque;

use crate::models::{Algorithm, Process, ProcessState, SchedulingResult};

use super::simulation::Simulation;

/// Schedules `processes` round-robin with the given time quantum (`>= 1`).
pub(crate) fn schedule(processes: &[Process], quantum: i64) -> SchedulingResult {
    let mut sim = Simulation::new(processes, Algorithm::RoundRobin);
    let mut queue: VecDeque<ProcessState> = VecDeque::with_capacity(processes.len());

    loop {
        sim.admit_arrivals(&mut queue);

        let Some(mut state) = queue.pop_front() else {
            if sim.idle_until_next_arrival() {
                continue;
            }
            break;
        };

        let slice = quantum.min(state.remaining);
        sim.run(&mut state, slice);

        // Arrivals during (and exactly at the end of) the slice go first.
        sim.admit_arrivals(&mut queue);

        if state.is_complete() {
            sim.complete(state);
        } else {
            queue.push_back(state);
        }
    }

    sim.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_robin_cycles_in_fifo_order() {
        let ps = vec![
            Process::new("P1", 0, 4),
            Process::new("P2", 0, 4),
            Process::new("P3", 0, 4),
        ];
        let r = schedule(&ps, 2);
        assert_eq!(
            r.timeline.to_string(),
            "[P1:0-2, P2:2-4, P3:4-6, P1:6-8, P2:8-10, P3:10-12]"
        );
        assert_eq!(r.completion_order(), vec!["P1", "P2", "P3"]);

        let p1 = r.result_for("P1").unwrap();
        assert_eq!(p1.start_time, 0);
        assert_eq!(p1.end_time, 8);
        assert_eq!(p1.waiting_time, 4);
        assert_eq!(r.result_for("P3").unwrap().response_time, 4);
    }

    #[test]
    fn test_arrival_at_slice_end_precedes_requeue() {
        // P2 arrives exactly when P1's first slice ends, so it runs next.
        let ps = vec![Process::new("P1", 0, 4), Process::new("P2", 2, 2)];
        let r = schedule(&ps, 2);
        assert_eq!(r.timeline.to_string(), "[P1:0-2, P2:2-4, P1:4-6]");
    }

    #[test]
    fn test_arrival_mid_slice_precedes_requeue() {
        let ps = vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 1),
        ];
        let r = schedule(&ps, 3);
        // t=3: queue = [P2, P3, P1]
        assert_eq!(
            r.timeline.to_string(),
            "[P1:0-3, P2:3-6, P3:6-7, P1:7-9]"
        );
    }

    #[test]
    fn test_same_slice_arrivals_enqueue_by_arrival_time() {
        // P3 is listed after P2 but arrives earlier within P1's first slice.
        let ps = vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 2, 1),
            Process::new("P3", 1, 1),
        ];
        let r = schedule(&ps, 3);
        // t=3: queue = [P3, P2, P1]
        assert_eq!(
            r.timeline.to_string(),
            "[P1:0-3, P3:3-4, P2:4-5, P1:5-7]"
        );
        assert_eq!(r.completion_order(), vec!["P3", "P2", "P1"]);
    }

    #[test]
    fn test_single_process_slices_merge() {
        let ps = vec![Process::new("P1", 0, 5)];
        let r = schedule(&ps, 2);
        assert_eq!(r.timeline.to_string(), "[P1:0-5]");
    }

    #[test]
    fn test_large_quantum_is_fcfs() {
        let ps = vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 2),
        ];
        let r = schedule(&ps, 100);
        assert_eq!(r.timeline.to_string(), "[P1:0-5, P2:5-8, P3:8-10]");
    }

    #[test]
    fn test_idle_between_arrivals() {
        let ps = vec![Process::new("P1", 1, 1), Process::new("P2", 4, 3)];
        let r = schedule(&ps, 2);
        assert_eq!(r.timeline.to_string(), "[Idle:0-1, P1:1-2, Idle:2-4, P2:4-7]");
    }
}
