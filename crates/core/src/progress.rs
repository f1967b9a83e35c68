//! Progress tracker - fact unlocks derived from the highest tile
//!
//! Unlocked thresholds are permanent: a new session never revokes them.
//! Newly crossed thresholds are queued for presentation and shown one at a
//! time; dismissing the current fact presents the next one (FIFO).

use std::collections::VecDeque;

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::types::FACT_THRESHOLDS;

/// Upper bound on thresholds crossed by a single evaluation
pub const MAX_UNLOCKS: usize = FACT_THRESHOLDS.len();

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Progress {
    /// Ascending, deduplicated subset of `FACT_THRESHOLDS`
    unlocked: Vec<u32>,
    queue: VecDeque<u32>,
    /// Threshold currently being presented
    showing: Option<u32>,
}

impl Progress {
    /// Restore from persisted thresholds. Unknown values are dropped.
    pub fn new(unlocked: impl IntoIterator<Item = u32>) -> Self {
        let mut unlocked: Vec<u32> = unlocked
            .into_iter()
            .filter(|t| FACT_THRESHOLDS.contains(t))
            .collect();
        unlocked.sort_unstable();
        unlocked.dedup();
        Self {
            unlocked,
            queue: VecDeque::new(),
            showing: None,
        }
    }

    /// Unlock every threshold the grid's highest tile meets for the first time.
    ///
    /// Returns the newly unlocked thresholds in ascending order; each is also
    /// enqueued for presentation.
    pub fn evaluate(&mut self, grid: &Grid) -> ArrayVec<u32, MAX_UNLOCKS> {
        let high = grid.highest_tile();
        let mut newly = ArrayVec::new();
        for t in FACT_THRESHOLDS {
            if high >= t && !self.is_unlocked(t) {
                self.unlocked.push(t);
                self.queue.push_back(t);
                newly.push(t);
            }
        }
        if !newly.is_empty() {
            self.unlocked.sort_unstable();
        }
        newly
    }

    pub fn is_unlocked(&self, threshold: u32) -> bool {
        self.unlocked.contains(&threshold)
    }

    pub fn unlocked(&self) -> &[u32] {
        &self.unlocked
    }

    /// Start presenting the next queued fact, unless one is already showing.
    pub fn present_next(&mut self) -> Option<u32> {
        if self.showing.is_some() {
            return None;
        }
        self.showing = self.queue.pop_front();
        self.showing
    }

    /// Dismiss the current fact and present the next queued one, if any.
    pub fn dismiss(&mut self) -> Option<u32> {
        self.showing = None;
        self.present_next()
    }

    pub fn is_presenting(&self) -> bool {
        self.showing.is_some()
    }

    pub fn showing(&self) -> Option<u32> {
        self.showing
    }

    /// Number of facts waiting behind the current one
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}
