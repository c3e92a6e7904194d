//! Schedule quality metrics (KPIs).
//!
//! Computes standard CPU-scheduling performance indicators from a
//! completed scheduling result.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first dispatch - arrival |
//! | Makespan | Latest completion time |
//! | CPU Utilization | busy time / makespan |
//! | Throughput | processes / makespan |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{ProcessResult, SchedulingResult, Timeline};

/// Turnaround and waiting time for a process completed at `end_time`.
///
/// Returns `(turnaround, waiting)` where `turnaround = end - arrival` and
/// `waiting = turnaround - burst`.
#[inline]
pub fn completion_metrics(arrival_time: i64, burst_time: i64, end_time: i64) -> (i64, i64) {
    let turnaround = end_time - arrival_time;
    (turnaround, turnaround - burst_time)
}

/// Rounds to two decimal places, the precision used for averages on display.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Schedule performance indicators.
///
/// All time values are in simulation time units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Number of completed processes.
    pub process_count: usize,
    /// Makespan: latest completion time.
    pub makespan: i64,
    /// Time the CPU spent running processes.
    pub busy_time: i64,
    /// Time the CPU sat idle within `[0, makespan]`.
    pub idle_time: i64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean response time.
    pub avg_response_time: f64,
    /// Longest waiting time of any single process.
    pub max_waiting_time: i64,
    /// Fraction of the makespan spent busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a scheduling result.
    pub fn calculate(result: &SchedulingResult) -> Self {
        Self::from_parts(&result.process_results, &result.timeline)
    }

    /// Computes KPIs from completion records and the timeline they ran on.
    pub fn from_parts(results: &[ProcessResult], timeline: &Timeline) -> Self {
        let count = results.len();
        let makespan = timeline.makespan();
        let busy_time = timeline.busy_time();

        // Per-process values fit i64; their sums may not.
        let mut total_turnaround: i128 = 0;
        let mut total_waiting: i128 = 0;
        let mut total_response: i128 = 0;
        let mut max_waiting: i64 = 0;

        for r in results {
            total_turnaround += i128::from(r.turnaround_time);
            total_waiting += i128::from(r.waiting_time);
            total_response += i128::from(r.response_time);
            max_waiting = max_waiting.max(r.waiting_time);
        }

        let mean = |total: i128| {
            if count == 0 {
                0.0
            } else {
                total as f64 / count as f64
            }
        };

        let (cpu_utilization, throughput) = if makespan > 0 {
            (
                busy_time as f64 / makespan as f64,
                count as f64 / makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            process_count: count,
            makespan,
            busy_time,
            idle_time: timeline.idle_time(),
            avg_turnaround_time: mean(total_turnaround),
            avg_waiting_time: mean(total_waiting),
            avg_response_time: mean(total_response),
            max_waiting_time: max_waiting,
            cpu_utilization,
            throughput,
        }
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_avg_waiting: f64, min_utilization: f64) -> bool {
        self.avg_waiting_time <= max_avg_waiting && self.cpu_utilization >= min_utilization
    }
}

impl fmt::Display for ScheduleKpi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "avg turnaround {:.2}, avg waiting {:.2}, avg response {:.2}, utilization {:.2}%",
            round2(self.avg_turnaround_time),
            round2(self.avg_waiting_time),
            round2(self.avg_response_time),
            round2(self.cpu_utilization * 100.0)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Algorithm, Process};

    fn make_result(specs: &[(&str, i64, i64, i64, i64)]) -> SchedulingResult {
        // (id, arrival, burst, start, end), run back to back with idle gaps.
        let mut r = SchedulingResult::new(Algorithm::Fcfs);
        for &(id, arrival, burst, start, end) in specs {
            let p = Process::new(id, arrival, burst);
            r.timeline.push_idle(r.timeline.makespan(), start);
            r.timeline.push_process(id, start, end);
            r.process_results
                .push(ProcessResult::from_completion(&p, start, end));
        }
        r
    }

    #[test]
    fn test_completion_metrics() {
        assert_eq!(completion_metrics(1, 3, 8), (7, 4));
        assert_eq!(completion_metrics(0, 5, 5), (5, 0));
    }

    #[test]
    fn test_round2() {
        assert!((round2(3.333_333) - 3.33).abs() < 1e-12);
        assert!((round2(2.675_1) - 2.68).abs() < 1e-12);
        assert!((round2(4.0) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_kpi_basic() {
        // FCFS [0,1,2] / [5,3,2]
        let r = make_result(&[
            ("P1", 0, 5, 0, 5),
            ("P2", 1, 3, 5, 8),
            ("P3", 2, 2, 8, 10),
        ]);
        let kpi = ScheduleKpi::calculate(&r);

        assert_eq!(kpi.process_count, 3);
        assert_eq!(kpi.makespan, 10);
        assert_eq!(kpi.busy_time, 10);
        assert_eq!(kpi.idle_time, 0);
        // turnaround: 5, 7, 8 → 20/3
        assert!((kpi.avg_turnaround_time - 20.0 / 3.0).abs() < 1e-10);
        // waiting: 0, 4, 6 → 10/3
        assert!((kpi.avg_waiting_time - 10.0 / 3.0).abs() < 1e-10);
        assert_eq!(kpi.max_waiting_time, 6);
        assert!((kpi.cpu_utilization - 1.0).abs() < 1e-10);
        assert!((kpi.throughput - 0.3).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_idle_time() {
        let r = make_result(&[("P1", 5, 2, 5, 7)]);
        let kpi = ScheduleKpi::calculate(&r);
        assert_eq!(kpi.makespan, 7);
        assert_eq!(kpi.idle_time, 5);
        assert_eq!(kpi.busy_time, 2);
        assert!((kpi.cpu_utilization - 2.0 / 7.0).abs() < 1e-10);
        assert!((kpi.avg_waiting_time - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = ScheduleKpi::calculate(&SchedulingResult::new(Algorithm::Sjf));
        assert_eq!(kpi.process_count, 0);
        assert_eq!(kpi.makespan, 0);
        assert!((kpi.avg_turnaround_time - 0.0).abs() < 1e-10);
        assert!((kpi.cpu_utilization - 0.0).abs() < 1e-10);
        assert!((kpi.throughput - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_meets_thresholds() {
        let r = make_result(&[("P1", 0, 2, 0, 2), ("P2", 0, 2, 2, 4)]);
        let kpi = ScheduleKpi::calculate(&r);
        // waiting: 0, 2 → avg 1.0
        assert!(kpi.meets_thresholds(1.0, 1.0));
        assert!(!kpi.meets_thresholds(0.5, 0.0));
        assert!(!kpi.meets_thresholds(10.0, 1.5));
    }

    #[test]
    fn test_display_rounds() {
        let r = make_result(&[
            ("P1", 0, 5, 0, 5),
            ("P2", 1, 3, 5, 8),
            ("P3", 2, 2, 8, 10),
        ]);
        let text = ScheduleKpi::calculate(&r).to_string();
        assert!(text.contains("avg turnaround 6.67"));
        assert!(text.contains("avg waiting 3.33"));
        assert!(text.contains("utilization 100.00%"));
    }
}
