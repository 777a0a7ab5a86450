//! One-way reveal bookkeeping for scroll-triggered animations.
//!
//! Elements are keyed by their position in the observed list. Once revealed an
//! element stays revealed, even after it scrolls out of view.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::HashSet;

#[derive(Clone, Debug, Default)]
pub struct RevealState {
    revealed: HashSet<usize>,
}

impl RevealState {
    /// Record an intersection change for element `key`.
    ///
    /// Returns `true` only on the first intersecting report, which is when the
    /// caller should add the visible marker.
    pub fn observe(&mut self, key: usize, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        self.revealed.insert(key)
    }

    pub fn is_revealed(&self, key: usize) -> bool {
        self.revealed.contains(&key)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}
