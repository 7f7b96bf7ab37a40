//! Bounded most-recently-used emoji list.
//!
//! Committed unicode selections land here; the list feeds the `Recent` row of
//! the emoji tab. Serializable so the host can persist it with account data.

use emoji_board_model::EmojiData;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Default capacity of the recents row.
pub const DEFAULT_RECENT_CAPACITY: usize = 21;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentEmojis {
    capacity: usize,
    entries: VecDeque<EmojiData>,
}

impl Default for RecentEmojis {
    fn default() -> Self {
        Self::new(DEFAULT_RECENT_CAPACITY)
    }
}

impl RecentEmojis {
    pub fn new(capacity: usize) -> Self {
        Self { capacity: capacity.max(1), entries: VecDeque::new() }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &EmojiData> {
        self.entries.iter()
    }

    pub fn to_vec(&self) -> Vec<EmojiData> {
        self.entries.iter().cloned().collect()
    }

    /// Record a use. An emoji already present moves to the front; the oldest
    /// entry is evicted once the capacity is exceeded.
    pub fn record(&mut self, emoji: EmojiData) {
        if let Some(index) = self.entries.iter().position(|e| e.unicode == emoji.unicode) {
            self.entries.remove(index);
        }
        self.entries.push_front(emoji);
        self.entries.truncate(self.capacity);
    }
}
