//! Engine events consumed by the presentation layer.
//!
//! The engine never touches presentation types; it reports state-machine
//! transitions as [`EngineEvent`]s returned from `open_case` and `tick`, and
//! the caller maps them to whatever rendering it owns.

use crate::catalog::types::Item;
use crate::core::session::OwnedItem;

/// One observable transition of the case-opening state machine.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// The case price was debited and the reveal is pending. Emitted
    /// immediately by a successful `open_case`, before any timer runs.
    CaseDebited {
        case_id: String,
        price: u64,
        balance: u64,
    },

    /// The decoy strip starts its deterministic scroll. The presentation
    /// layer must align its terminal scroll offset to `landing_index`, which
    /// holds the true result. Not emitted when the roulette animation is
    /// disabled.
    StripRevealStarted {
        case_id: String,
        strip: Vec<Item>,
        landing_index: usize,
    },

    /// The true item was revealed and committed: value credited, inventory
    /// appended, stats updated. `balance` is the post-credit balance.
    ItemRevealed { item: OwnedItem, balance: u64 },

    /// The showcase delay elapsed; the engine is idle and accepts the next
    /// open.
    RevealDismissed,
}
