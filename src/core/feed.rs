//! Recent-drops feed: a capped, newest-first ring of reward events.
//!
//! Decorative, non-authoritative state for marquee/leaderboard style
//! displays. Entries may come from the local session or from a simulated
//! population of other players; nothing reads this back into the economy.

use crate::catalog::types::Rarity;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// One reward event in the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub player_name: String,
    pub item_name: String,
    pub rarity: Rarity,
    pub value: u64,
    /// Unix timestamp of the drop.
    pub dropped_at: i64,
}

/// Ring buffer of the last `capacity` reward events, newest first.
#[derive(Debug, Clone)]
pub struct DropFeed {
    entries: VecDeque<FeedEntry>,
    capacity: usize,
}

impl DropFeed {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a reward event, evicting the oldest entry at capacity.
    pub fn push(&mut self, entry: FeedEntry) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front(entry);
    }

    /// Entries newest first.
    pub fn entries(&self) -> impl Iterator<Item = &FeedEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
