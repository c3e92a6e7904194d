//! Gantt timeline model.
//!
//! A timeline is the ordered sequence of CPU occupancy blocks produced by a
//! scheduling run. Blocks are contiguous and non-overlapping and cover
//! `[0, makespan]`; idle gaps are explicit `Idle` blocks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What occupies the CPU during a block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupant {
    /// No process was ready.
    Idle,
    /// The process with this ID was running.
    Process(String),
}

impl Occupant {
    /// Whether this is an idle slot.
    pub fn is_idle(&self) -> bool {
        matches!(self, Occupant::Idle)
    }

    /// Process ID, or `None` for idle.
    pub fn process_id(&self) -> Option<&str> {
        match self {
            Occupant::Idle => None,
            Occupant::Process(id) => Some(id),
        }
    }
}

impl fmt::Display for Occupant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Occupant::Idle => f.write_str("Idle"),
            Occupant::Process(id) => f.write_str(id),
        }
    }
}

/// A half-open interval `[start_time, end_time)` of CPU occupancy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Running process or idle marker.
    pub occupant: Occupant,
    /// Start time (inclusive).
    pub start_time: i64,
    /// End time (exclusive).
    pub end_time: i64,
}

impl Block {
    /// Creates a block for a running process.
    pub fn process(id: impl Into<String>, start_time: i64, end_time: i64) -> Self {
        Self {
            occupant: Occupant::Process(id.into()),
            start_time,
            end_time,
        }
    }

    /// Creates an idle block.
    pub fn idle(start_time: i64, end_time: i64) -> Self {
        Self {
            occupant: Occupant::Idle,
            start_time,
            end_time,
        }
    }

    /// Length of the block.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }

    /// Whether `time` falls inside `[start_time, end_time)`.
    #[inline]
    pub fn contains(&self, time: i64) -> bool {
        self.start_time <= time && time < self.end_time
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.occupant, self.start_time, self.end_time)
    }
}

/// Ordered, coalesced sequence of blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    blocks: Vec<Block>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `[start, end)` for `occupant`.
    ///
    /// Empty intervals are dropped. If the last block has the same occupant and
    /// ends exactly at `start`, it is extended instead of adding a new block.
    pub fn push(&mut self, occupant: Occupant, start: i64, end: i64) {
        if end <= start {
            return;
        }
        if let Some(last) = self.blocks.last_mut() {
            if last.occupant == occupant && last.end_time == start {
                last.end_time = end;
                return;
            }
        }
        self.blocks.push(Block {
            occupant,
            start_time: start,
            end_time: end,
        });
    }

    /// Appends a running slice for process `id`.
    pub fn push_process(&mut self, id: &str, start: i64, end: i64) {
        self.push(Occupant::Process(id.to_string()), start, end);
    }

    /// Appends an idle gap.
    pub fn push_idle(&mut self, start: i64, end: i64) {
        self.push(Occupant::Idle, start, end);
    }

    /// All blocks in time order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Iterates over blocks in time order.
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the timeline has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Makespan: end of the last block (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.blocks.last().map(|b| b.end_time).unwrap_or(0)
    }

    /// Total time spent running processes.
    pub fn busy_time(&self) -> i64 {
        self.blocks
            .iter()
            .filter(|b| !b.occupant.is_idle())
            .map(Block::duration)
            .sum()
    }

    /// Total time the CPU sat idle.
    pub fn idle_time(&self) -> i64 {
        self.blocks
            .iter()
            .filter(|b| b.occupant.is_idle())
            .map(Block::duration)
            .sum()
    }

    /// Block covering `time`, if any.
    pub fn block_at(&self, time: i64) -> Option<&Block> {
        let idx = self.blocks.partition_point(|b| b.end_time <= time);
        self.blocks.get(idx).filter(|b| b.contains(time))
    }

    /// All blocks in which process `id` ran.
    pub fn blocks_for(&self, id: &str) -> Vec<&Block> {
        self.blocks
            .iter()
            .filter(|b| b.occupant.process_id() == Some(id))
            .collect()
    }

    /// Whether blocks tile `[0, makespan]` with no gaps, overlaps, empty
    /// blocks, or adjacent blocks sharing an occupant.
    pub fn is_well_formed(&self) -> bool {
        let mut expected_start = 0;
        let mut prev: Option<&Occupant> = None;
        for b in &self.blocks {
            if b.start_time != expected_start || b.end_time <= b.start_time {
                return false;
            }
            if prev == Some(&b.occupant) {
                return false;
            }
            expected_start = b.end_time;
            prev = Some(&b.occupant);
        }
        true
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, b) in self.blocks.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{b}")?;
        }
        f.write_str("]")
    }
}
