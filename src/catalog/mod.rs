//! Reward catalog: item/case types, rarity weights, and the random-roll
//! primitives that resolve a case opening to a concrete item.

pub mod data;
pub mod selection;
pub mod types;
pub mod weights;

pub use data::{builtin_cases, builtin_items, Catalog};
pub use selection::{build_strip, select_item, RouletteStrip};
pub use types::{Case, Item, Rarity};
pub use weights::{sample_rarity, RarityWeights};
