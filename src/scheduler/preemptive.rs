//! Preemptive selection policies: SRTF and preemptive Priority.
//!
//! # Algorithm
//! The running process is re-selected at every event. Each step runs the
//! best ready process until `min(clock + remaining, next_arrival)`; an
//! unfinished process simply stays in the ready set and competes again.
//! Consecutive slices of the same process coalesce into one timeline block.

use crate::dispatching::RuleEngine;
use crate::models::{Algorithm, Process, ProcessState, SchedulingResult};

use super::simulation::Simulation;

/// Schedules `processes` with preemption on arrival, selecting by
/// `algorithm`'s rules.
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

        let finish_at = sim.clock() + ready[idx].remaining;
        let next_event = match sim.next_arrival() {
            Some(arrival) => finish_at.min(arrival),
            None => finish_at,
        };

        let slice = next_event - sim.clock();
        sim.run(&mut ready[idx], slice);

        if ready[idx].is_complete() {
            let done = ready.swap_remove(idx);
            sim.complete(done);
        }
    }

    sim.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srtf_preempts_on_shorter_arrival() {
        let ps = vec![
            Process::new("P1", 0, 8),
            Process::new("P2", 1, 4),
            Process::new("P3", 2, 9),
        ];
        let r = schedule(&ps, Algorithm::Srtf);
        assert_eq!(r.timeline.to_string(), "[P1:0-1, P2:1-5, P1:5-12, P3:12-21]");

        let p1 = r.result_for("P1").unwrap();
        assert_eq!(p1.start_time, 0);
        assert_eq!(p1.end_time, 12);
        assert_eq!(p1.waiting_time, 4);
        assert_eq!(r.completion_order(), vec!["P2", "P1", "P3"]);
    }

    #[test]
    fn test_srtf_classic_example() {
        let ps = vec![
            Process::new("P1", 0, 8),
            Process::new("P2", 1, 4),
            Process::new("P3", 2, 9),
            Process::new("P4", 3, 5),
        ];
        let r = schedule(&ps, Algorithm::Srtf);
        assert_eq!(
            r.timeline.to_string(),
            "[P1:0-1, P2:1-5, P4:5-10, P1:10-17, P3:17-26]"
        );
        let total_wait: i64 = r.process_results.iter().map(|p| p.waiting_time).sum();
        assert_eq!(total_wait, 26); // 9 + 0 + 15 + 2
    }

    #[test]
    fn test_srtf_no_preemption_on_equal_remaining() {
        // At t=2 P1 has 2 left and P2 needs 2: earlier arrival keeps the CPU.
        let ps = vec![Process::new("P1", 0, 4), Process::new("P2", 2, 2)];
        let r = schedule(&ps, Algorithm::Srtf);
        assert_eq!(r.timeline.to_string(), "[P1:0-4, P2:4-6]");
    }

    #[test]
    fn test_srtf_merges_uninterrupted_slices() {
        // Arrivals split P1's run into 0-1, 1-2, 2-6 internally; none preempt it.
        let ps = vec![
            Process::new("P1", 0, 6),
            Process::new("P2", 1, 9),
            Process::new("P3", 2, 9),
        ];
        let r = schedule(&ps, Algorithm::Srtf);
        assert_eq!(r.timeline.to_string(), "[P1:0-6, P2:6-15, P3:15-24]");
    }

    #[test]
    fn test_priority_preemptive() {
        let ps = vec![
            Process::new("P1", 0, 5).with_priority(3),
            Process::new("P2", 2, 2).with_priority(1),
            Process::new("P3", 3, 1).with_priority(2),
        ];
        let r = schedule(&ps, Algorithm::PriorityPreemptive);
        assert_eq!(r.timeline.to_string(), "[P1:0-2, P2:2-4, P3:4-5, P1:5-8]");

        let p1 = r.result_for("P1").unwrap();
        assert_eq!(p1.start_time, 0);
        assert_eq!(p1.response_time, 0);
        assert_eq!(p1.waiting_time, 3);
    }

    #[test]
    fn test_priority_preemptive_ignores_less_urgent_arrival() {
        let ps = vec![
            Process::new("P1", 0, 3).with_priority(1),
            Process::new("P2", 1, 3).with_priority(9),
        ];
        let r = schedule(&ps, Algorithm::PriorityPreemptive);
        assert_eq!(r.timeline.to_string(), "[P1:0-3, P2:3-6]");
    }

    #[test]
    fn test_preemptive_idle_gap() {
        let ps = vec![Process::new("P1", 0, 2), Process::new("P2", 5, 1)];
        let r = schedule(&ps, Algorithm::Srtf);
        assert_eq!(r.timeline.to_string(), "[P1:0-2, Idle:2-5, P2:5-6]");
    }
}
