//! Timeline playback.
//!
//! Replays a precomputed timeline one time unit per [`PlaybackState::tick`].
//! The state machine owns no timer: the caller invokes `tick()` every
//! [`PlaybackConfig::time_per_unit`] and renders the returned [`Frame`].
//!
//! ```text
//!  Ready ──start──▶ Running ──pause──▶ Paused
//!    ▲                 │    ◀──resume──   │
//!    │               tick (t = makespan)  │
//!    │                 ▼                  │
//!    └────reset──── Finished ◀────────────┘ (reset from any state)
//! ```

use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::{Block, SchedulingResult, Timeline};

/// Playback timing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Wall-clock duration of one simulation time unit.
    pub time_per_unit: Duration,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            time_per_unit: Duration::from_secs(1),
        }
    }
}

impl PlaybackConfig {
    /// Creates the default configuration (one second per time unit).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the duration of one time unit.
    pub fn with_time_per_unit(mut self, time_per_unit: Duration) -> Self {
        self.time_per_unit = time_per_unit;
        self
    }
}

/// Playback lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackStatus {
    /// Cursor at t=0, not started.
    Ready,
    /// Advancing on every tick.
    Running,
    /// Ticks are ignored until resumed.
    Paused,
    /// Cursor reached the makespan.
    Finished,
}

/// What to render after a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Cursor position after the tick.
    pub time: i64,
    /// Block covering `time`, if any.
    pub active: Option<Block>,
    /// Whether this tick reached the end of the timeline.
    pub finished: bool,
}

/// Cursor over a timeline with start/pause/resume/reset transitions.
#[derive(Debug, Clone)]
pub struct PlaybackState {
    timeline: Timeline,
    config: PlaybackConfig,
    time: i64,
    status: PlaybackStatus,
}

impl PlaybackState {
    /// Creates a playback over `timeline` with the default configuration.
    pub fn new(timeline: Timeline) -> Self {
        Self::with_config(timeline, PlaybackConfig::default())
    }

    /// Creates a playback with an explicit configuration.
    pub fn with_config(timeline: Timeline, config: PlaybackConfig) -> Self {
        Self {
            timeline,
            config,
            time: 0,
            status: PlaybackStatus::Ready,
        }
    }

    /// Creates a playback over the timeline of `result`.
    pub fn from_result(result: &SchedulingResult, config: PlaybackConfig) -> Self {
        Self::with_config(result.timeline.clone(), config)
    }

    /// Starts (or restarts) playback from t=0.
    pub fn start(&mut self) {
        self.time = 0;
        self.status = if self.timeline.makespan() > 0 {
            PlaybackStatus::Running
        } else {
            PlaybackStatus::Finished
        };
        debug!("playback start: makespan {}", self.timeline.makespan());
    }

    /// Advances the cursor by one time unit.
    ///
    /// Returns `None` without moving when not running.
    pub fn tick(&mut self) -> Option<Frame> {
        if self.status != PlaybackStatus::Running {
            return None;
        }

        self.time += 1;
        let finished = self.time >= self.timeline.makespan();
        if finished {
            self.status = PlaybackStatus::Finished;
            debug!("playback finished at t={}", self.time);
        }

        Some(Frame {
            time: self.time,
            active: self.active_block().cloned(),
            finished,
        })
    }

    /// Pauses a running playback.
    pub fn pause(&mut self) {
        if self.status == PlaybackStatus::Running {
            self.status = PlaybackStatus::Paused;
        }
    }

    /// Resumes a paused playback.
    pub fn resume(&mut self) {
        if self.status == PlaybackStatus::Paused {
            self.status = PlaybackStatus::Running;
        }
    }

    /// Pauses if running, resumes if paused; otherwise does nothing.
    pub fn toggle_pause(&mut self) {
        match self.status {
            PlaybackStatus::Running => self.pause(),
            PlaybackStatus::Paused => self.resume(),
            PlaybackStatus::Ready | PlaybackStatus::Finished => {}
        }
    }

    /// Stops playback and rewinds to t=0.
    pub fn reset(&mut self) {
        self.time = 0;
        self.status = PlaybackStatus::Ready;
    }

    /// Cursor position.
    pub fn current_time(&self) -> i64 {
        self.time
    }

    /// Lifecycle state.
    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    /// Whether playback is paused.
    pub fn is_paused(&self) -> bool {
        self.status == PlaybackStatus::Paused
    }

    /// Whether the cursor reached the end.
    pub fn is_finished(&self) -> bool {
        self.status == PlaybackStatus::Finished
    }

    /// Fraction of the timeline played (0.0..=1.0).
    pub fn progress(&self) -> f64 {
        let makespan = self.timeline.makespan();
        if makespan == 0 {
            return if self.is_finished() { 1.0 } else { 0.0 };
        }
        self.time as f64 / makespan as f64
    }

    /// Block covering the cursor.
    pub fn active_block(&self) -> Option<&Block> {
        self.timeline.block_at(self.time)
    }

    /// Wall-clock time left at the configured rate.
    pub fn remaining_duration(&self) -> Duration {
        let units = (self.timeline.makespan() - self.time).max(0);
        self.config
            .time_per_unit
            .saturating_mul(u32::try_from(units).unwrap_or(u32::MAX))
    }

    /// Interval at which the caller should call [`tick`](Self::tick).
    pub fn tick_interval(&self) -> Duration {
        self.config.time_per_unit
    }

    /// The timeline being replayed.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }
}
