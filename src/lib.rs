//! Single-CPU process scheduling simulator for the U-Engine ecosystem.
//!
//! Given processes with arrival time, burst time, and optional priority,
//! computes the execution timeline (Gantt chart) and per-process metrics
//! under a classical scheduling discipline, and replays the timeline.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ProcessState`, `Timeline`,
//!   `Block`, `ProcessResult`, `SchedulingResult`, `Algorithm`
//! - **`input`**: Process sets from parallel columns or whitespace text
//! - **`validation`**: Input checks (empty sets, duplicate IDs, burst/arrival
//!   ranges, missing priorities, time quantum)
//! - **`dispatching`**: Ready-queue selection rules and the rule engine
//! - **`scheduler`**: FCFS, SJF, SRTF, Round Robin, Priority (both modes),
//!   and `ScheduleKpi`
//! - **`playback`**: Tick-driven replay state (start/pause/resume/reset)
//!
//! # Quick Start
//!
//! ```
//! use u_cpu_sched::input::processes_from_text;
//! use u_cpu_sched::models::Algorithm;
//! use u_cpu_sched::scheduler::{schedule, SchedulingParams};
//!
//! let processes = processes_from_text("0 1 2", "5 3 2", None).unwrap();
//! let result = schedule(&processes, Algorithm::Fcfs, &SchedulingParams::default()).unwrap();
//!
//! assert_eq!(result.timeline.to_string(), "[P1:0-5, P2:5-8, P3:8-10]");
//! let kpi = result.kpi();
//! assert_eq!(kpi.makespan, 10);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod input;
pub mod models;
pub mod playback;
pub mod scheduler;
pub mod validation;

pub use scheduler::schedule;
pub use validation::ScheduleError;
