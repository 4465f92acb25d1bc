use serde::{Deserialize, Serialize};

/// Reward quality tier. The variant order is the declared sampling order:
/// the rarity sampler walks `Rarity::ALL` front to back, so reordering the
/// variants changes which tier wins a cumulative-threshold tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common = 0,
    Rare = 1,
    Epic = 2,
    Legendary = 3,
}

impl Rarity {
    /// All tiers in declared (sampling) order.
    pub const ALL: [Rarity; 4] = [Rarity::Common, Rarity::Rare, Rarity::Epic, Rarity::Legendary];

    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

/// An immutable catalog entry. `value` is the amount credited to the session
/// balance when the item is won (and again when sold from the inventory).
/// `icon` is a display token for the presentation layer; core logic never
/// reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub rarity: Rarity,
    pub value: u64,
    pub icon: String,
}

impl Item {
    pub fn new(id: &str, name: &str, rarity: Rarity, value: u64, icon: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            rarity,
            value,
            icon: icon.to_string(),
        }
    }
}

/// A purchasable bundle: a price and the pool of items it can yield.
///
/// Pools are built by filtering the item catalog, so the same `Item` data may
/// appear in several cases. A pool that lacks a sampled rarity entirely is
/// legal; selection degrades to a uniform pick over the whole pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub id: String,
    pub name: String,
    pub price: u64,
    /// Display token for the case tier (badge/medal), presentation only.
    pub tier_icon: String,
    pub item_pool: Vec<Item>,
}
