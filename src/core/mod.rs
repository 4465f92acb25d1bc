//! Core engine: session state, configuration, events, and the timed
//! case-opening state machine.

pub mod config;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod events;
pub mod feed;
pub mod session;

pub use config::EngineConfig;
pub use constants::{TICKS_PER_SECOND, TICK_INTERVAL_MS};
pub use engine::CaseOpeningEngine;
pub use errors::EngineError;
pub use events::EngineEvent;
pub use feed::{DropFeed, FeedEntry};
pub use session::{OwnedItem, SessionState, SessionStats};
