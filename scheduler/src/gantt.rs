//! Building and merging CPU timelines.

use crate::{GanttBlock, Occupant, Pid};

/// Collects the blocks of a simulation in chronological order.
#[derive(Debug, Default)]
pub(crate) struct Timeline {
    blocks: Vec<GanttBlock>,
}

impl Timeline {
    pub fn new() -> Self {
        Timeline::default()
    }

    /// Appends a block. Empty intervals are dropped.
    pub fn push(&mut self, occupant: Occupant, start: usize, end: usize) {
        if start < end {
            self.blocks.push(GanttBlock::new(occupant, start, end));
        }
    }

    /// Marks `[start, end)` as idle.
    pub fn idle(&mut self, start: usize, end: usize) {
        self.push(Occupant::Idle, start, end);
    }

    /// Grows the open block if `pid` already holds it, otherwise opens a new one.
    pub fn extend_or_push(&mut self, pid: &Pid, start: usize, end: usize) {
        if let Some(last) = self.blocks.last_mut() {
            if last.end == start && last.occupant.pid() == Some(pid) {
                last.end = end;
                return;
            }
        }
        self.push(Occupant::from(pid), start, end);
    }

    pub fn into_merged(self) -> Vec<GanttBlock> {
        merge(self.blocks)
    }
}

/// Coalesces every run of adjacent blocks held by the same occupant.
///
/// Merging an already merged chart returns it unchanged.
pub fn merge(blocks: Vec<GanttBlock>) -> Vec<GanttBlock> {
    let mut merged: Vec<GanttBlock> = Vec::with_capacity(blocks.len());
    for block in blocks {
        match merged.last_mut() {
            Some(last) if last.occupant == block.occupant && last.end == block.start => {
                last.end = block.end;
            }
            _ => merged.push(block),
        }
    }
    merged
}
