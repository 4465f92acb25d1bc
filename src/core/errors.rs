//! Engine error taxonomy.
//!
//! `Configuration` is fatal at startup and never produced after a successful
//! engine construction. Everything else is recoverable input validation:
//! the rejected call leaves balance, inventory, and stats untouched.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Malformed weights, catalog, or timing configuration. Raised only by
    /// engine construction.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The requested case id is not in the catalog.
    #[error("unknown case id: {0}")]
    UnknownCase(String),

    /// The session cannot afford the case price.
    #[error("insufficient balance: case costs {price}, balance is {balance}")]
    InsufficientBalance { price: u64, balance: u64 },

    /// A reveal is already in flight for this session. Opens are rejected,
    /// not queued.
    #[error("a case is already being opened")]
    AlreadyOpening,

    /// Deposit amounts must be positive.
    #[error("deposit amount must be a positive integer")]
    InvalidAmount,

    /// Sell index outside the inventory. The inventory is left unchanged.
    #[error("no inventory entry at index {index} (inventory size {size})")]
    IndexOutOfRange { index: usize, size: usize },
}
