//! Bounded Score History
//!
//! Fixed-capacity FIFO over anomaly scores, feeding the time-series chart.
//! Push is O(1) amortized; the oldest score is evicted once the buffer is
//! full.

use std::collections::VecDeque;

use crate::constants::HISTORY_CAPACITY;

/// Rolling window of the most recent anomaly scores, in arrival order
#[derive(Debug, Clone)]
pub struct ScoreHistory {
    scores: VecDeque<f32>,
    capacity: usize,
}

impl ScoreHistory {
    /// History with the default charting capacity
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            scores: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a score, evicting the oldest when full
    pub fn push(&mut self, score: f32) {
        if self.scores.len() == self.capacity {
            self.scores.pop_front();
        }
        self.scores.push_back(score);
    }

    /// Current contents in arrival order
    pub fn snapshot(&self) -> Vec<f32> {
        self.scores.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.scores.clear();
    }
}

impl Default for ScoreHistory {
    fn default() -> Self {
        Self::new()
    }
}
