//! Execution timeline (Gantt) model.
//!
//! A timeline is an ordered sequence of contiguous intervals recording what
//! the CPU was doing: running a particular process, or sitting idle.
//! Preemptive disciplines emit one block per time unit; `compact` merges
//! those into the minimal equivalent sequence.

use serde::{Deserialize, Serialize};

/// What occupies the CPU during a timeline block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    /// No eligible process; the CPU is idle.
    Idle,
    /// The named process is executing.
    Process(String),
}

impl Slot {
    /// Whether this slot is an executing process.
    pub fn is_process(&self) -> bool {
        matches!(self, Slot::Process(_))
    }
}

/// One contiguous interval of the timeline. `end > start` always.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineBlock {
    /// Occupant of the interval.
    pub slot: Slot,
    /// Interval start (ticks, inclusive).
    pub start: i64,
    /// Interval end (ticks, exclusive).
    pub end: i64,
}

impl TimelineBlock {
    /// Creates a new block.
    pub fn new(slot: Slot, start: i64, end: i64) -> Self {
        Self { slot, start, end }
    }

    /// Block length in ticks (end − start).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// An ordered sequence of execution/idle blocks.
///
/// Blocks are appended raw by the engine; `compact` produces the canonical
/// form in which no two adjacent blocks share a slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    blocks: Vec<TimelineBlock>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a block covering `[start, end)`.
    pub fn push(&mut self, slot: Slot, start: i64, end: i64) {
        self.blocks.push(TimelineBlock::new(slot, start, end));
    }

    /// Merges adjacent blocks sharing the same slot, in one left-to-right
    /// pass. Idempotent: compacting a compacted timeline changes nothing.
    pub fn compact(&mut self) {
        let mut merged: Vec<TimelineBlock> = Vec::with_capacity(self.blocks.len());
        for block in self.blocks.drain(..) {
            match merged.last_mut() {
                Some(prev) if prev.slot == block.slot => prev.end = block.end,
                _ => merged.push(block),
            }
        }
        self.blocks = merged;
    }

    /// The blocks in order.
    pub fn blocks(&self) -> &[TimelineBlock] {
        &self.blocks
    }

    /// End of the last block: the total elapsed simulation time.
    /// Zero for an empty timeline.
    pub fn makespan(&self) -> i64 {
        self.blocks.last().map(|b| b.end).unwrap_or(0)
    }

    /// Total ticks spent idle.
    pub fn idle_ticks(&self) -> i64 {
        self.blocks
            .iter()
            .filter(|b| b.slot == Slot::Idle)
            .map(|b| b.duration())
            .sum()
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the timeline has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proc_slot(id: &str) -> Slot {
        Slot::Process(id.to_string())
    }

    #[test]
    fn test_block_duration() {
        let b = TimelineBlock::new(proc_slot("P1"), 3, 8);
        assert_eq!(b.duration(), 5);
    }

    #[test]
    fn test_compact_merges_unit_blocks() {
        let mut t = Timeline::new();
        t.push(proc_slot("P1"), 0, 1);
        t.push(proc_slot("P1"), 1, 2);
        t.push(proc_slot("P2"), 2, 3);
        t.push(proc_slot("P2"), 3, 4);
        t.push(proc_slot("P1"), 4, 5);
        t.compact();

        let blocks = t.blocks();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0], TimelineBlock::new(proc_slot("P1"), 0, 2));
        assert_eq!(blocks[1], TimelineBlock::new(proc_slot("P2"), 2, 4));
        assert_eq!(blocks[2], TimelineBlock::new(proc_slot("P1"), 4, 5));
    }

    #[test]
    fn test_compact_is_idempotent() {
        let mut t = Timeline::new();
        t.push(Slot::Idle, 0, 1);
        t.push(Slot::Idle, 1, 2);
        t.push(proc_slot("P1"), 2, 3);
        t.compact();
        let once = t.clone();
        t.compact();
        assert_eq!(t, once);
    }

    #[test]
    fn test_compact_no_adjacent_duplicates() {
        let mut t = Timeline::new();
        for i in 0..4 {
            t.push(proc_slot("P1"), i, i + 1);
        }
        t.push(Slot::Idle, 4, 5);
        t.push(Slot::Idle, 5, 6);
        t.push(proc_slot("P1"), 6, 7);
        t.compact();

        for pair in t.blocks().windows(2) {
            assert_ne!(pair[0].slot, pair[1].slot);
        }
    }

    #[test]
    fn test_makespan_and_idle_ticks() {
        let mut t = Timeline::new();
        t.push(proc_slot("P1"), 0, 4);
        t.push(Slot::Idle, 4, 7);
        t.push(proc_slot("P2"), 7, 9);
        assert_eq!(t.makespan(), 9);
        assert_eq!(t.idle_ticks(), 3);
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::new();
        assert!(t.is_empty());
        assert_eq!(t.makespan(), 0);
        assert_eq!(t.idle_ticks(), 0);
    }
}
