//! Session state: balance, inventory, and cumulative statistics.
//!
//! Single-owner mutable state. The [`crate::CaseOpeningEngine`] is the only
//! mutator; everything here is plain data plus constructors, so the
//! accounting rules live in one place (the engine) instead of being spread
//! across methods.

use crate::catalog::types::Item;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A won item instance in the inventory. The same catalog item can be won
/// many times; each win gets its own instance id and acquisition timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedItem {
    pub instance_id: String,
    pub item: Item,
    /// Unix timestamp of reveal completion.
    pub acquired_at: i64,
}

impl OwnedItem {
    pub fn new(item: Item, acquired_at: i64) -> Self {
        Self {
            instance_id: Uuid::new_v4().to_string(),
            item,
            acquired_at,
        }
    }
}

/// Cumulative session statistics. All four fields are monotonically
/// non-decreasing: wins add, sells do not subtract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub total_spent: u64,
    pub total_won: u64,
    pub cases_opened: u64,
    pub best_drop: u64,
}

/// All mutable state of one single-user session. Created at session start,
/// lives in memory until the session ends; nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub balance: u64,
    /// Append-only except for explicit sells, in acquisition order.
    pub inventory: Vec<OwnedItem>,
    pub stats: SessionStats,
}

impl SessionState {
    pub fn new(starting_balance: u64) -> Self {
        Self {
            balance: starting_balance,
            inventory: Vec::new(),
            stats: SessionStats::default(),
        }
    }

    /// Net result of the session so far (winnings minus spend). Negative
    /// when the house is ahead.
    pub fn net(&self) -> i64 {
        self.stats.total_won as i64 - self.stats.total_spent as i64
    }
}
