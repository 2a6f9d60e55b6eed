// src/core/context.rs
use std::collections::VecDeque;

/// Bounded FIFO buffer of recent user turns, most-recent-last.
///
/// Every turn is stored lowercase-normalized. The classifier accepts this
/// history but no rule consults it yet; the buffer exists so context-aware
/// rules can be added without changing the storage contract.
#[derive(Debug, Clone)]
pub struct ConversationContext {
    capacity: usize,
    turns: VecDeque<String>,
}

impl ConversationContext {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            turns: VecDeque::with_capacity(capacity),
        }
    }

    /// Appends a turn, evicting the oldest once the buffer is full.
    /// O(1) amortized.
    pub fn push(&mut self, turn: String) {
        if self.turns.len() == self.capacity {
            self.turns.pop_front();
        }
        self.turns.push_back(turn);
    }

    /// The retained turns in arrival order (oldest first).
    pub fn snapshot(&self) -> Vec<String> {
        self.turns.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
