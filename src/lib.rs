//! Unbox - Loot-Box Economy Engine
//!
//! Simulates a case-opening economy: a session spends virtual currency to
//! open a case, receives a weighted-random reward item through a timed
//! reveal, and tracks balance, inventory, and cumulative statistics.
//!
//! The engine is presentation-free: callers drive it with
//! [`CaseOpeningEngine::open_case`] and one [`CaseOpeningEngine::tick`] per
//! 100ms (or per virtual tick), and render the [`EngineEvent`]s it returns.
//! All randomness flows through an injected `rand::Rng`, so tests and the
//! simulator run fully deterministic with a seeded generator.
//!
//! Nothing here touches real money: deposits are simulated instant credits.

pub mod catalog;
pub mod core;
pub mod simulator;

pub use crate::catalog::{Case, Catalog, Item, Rarity, RarityWeights, RouletteStrip};
pub use crate::core::{
    CaseOpeningEngine, EngineConfig, EngineError, EngineEvent, OwnedItem, SessionState,
    SessionStats, TICK_INTERVAL_MS,
};
