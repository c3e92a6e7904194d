//! Scheduling domain models.
//!
//! Provides the data types shared by the scheduler, the metrics calculator,
//! and playback: input processes, completion records, and the Gantt timeline.
//!
//! # Terminology
//!
//! | u-cpu-sched | OS textbook | Gantt chart |
//! |-------------|-------------|-------------|
//! | Process | Job / CPU burst | Row label |
//! | Block | Dispatch slice | Bar |
//! | Timeline | Execution trace | Chart |
//! | ProcessResult | Completion record | Table row |

mod algorithm;
mod process;
mod result;
mod timeline;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use process::{total_burst, Process, ProcessState};
pub use result::{ProcessResult, SchedulingResult};
pub use timeline::{Block, Occupant, Timeline};
