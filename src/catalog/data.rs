//! Static reward catalog: the built-in item set and case lineup.
//!
//! Loaded once at engine construction and never mutated afterwards. The
//! built-in data mirrors the reference economy: eight items valued 10-750
//! and four cases whose pools are rarity filters over the item set.

use crate::catalog::types::{Case, Item, Rarity};
use crate::core::errors::EngineError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The full static registry a [`crate::CaseOpeningEngine`] serves from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub items: Vec<Item>,
    pub cases: Vec<Case>,
}

impl Catalog {
    /// The reference catalog: bronze/silver/gold/platinum cases over the
    /// built-in item set.
    pub fn builtin() -> Self {
        let items = builtin_items();
        let cases = builtin_cases(&items);
        Self { items, cases }
    }

    pub fn case(&self, id: &str) -> Option<&Case> {
        self.cases.iter().find(|c| c.id == id)
    }

    /// Startup validation. Any failure here is a fatal configuration error;
    /// a catalog that passes cannot fail at open time.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.cases.is_empty() {
            return Err(EngineError::Configuration(
                "catalog has no cases".to_string(),
            ));
        }

        let mut case_ids = HashSet::new();
        for case in &self.cases {
            if !case_ids.insert(case.id.as_str()) {
                return Err(EngineError::Configuration(format!(
                    "duplicate case id: {}",
                    case.id
                )));
            }
            if case.price == 0 {
                return Err(EngineError::Configuration(format!(
                    "case {} has zero price",
                    case.id
                )));
            }
            if case.item_pool.is_empty() {
                return Err(EngineError::Configuration(format!(
                    "case {} has an empty item pool",
                    case.id
                )));
            }
            for item in &case.item_pool {
                if item.value == 0 {
                    return Err(EngineError::Configuration(format!(
                        "item {} in case {} has zero value",
                        item.id, case.id
                    )));
                }
            }
        }
        Ok(())
    }
}

/// The eight built-in reward items.
pub fn builtin_items() -> Vec<Item> {
    vec![
        Item::new("1", "Standard Skin", Rarity::Common, 10, "\u{1f535}"),
        Item::new("2", "Plain Knife", Rarity::Common, 15, "\u{1f52a}"),
        Item::new("3", "Rare Rifle", Rarity::Rare, 50, "\u{1f52b}"),
        Item::new("4", "Golden Pistol", Rarity::Rare, 75, "\u{1f531}"),
        Item::new("5", "Epic AK-47", Rarity::Epic, 200, "\u{26a1}"),
        Item::new("6", "Dragon Bow", Rarity::Epic, 250, "\u{1f409}"),
        Item::new("7", "Legendary AWP", Rarity::Legendary, 500, "\u{1f48e}"),
        Item::new("8", "Flaming Sword", Rarity::Legendary, 750, "\u{1f525}"),
    ]
}

/// The four built-in cases. Pools are rarity filters over the item set.
pub fn builtin_cases(items: &[Item]) -> Vec<Case> {
    let pool_of = |rarities: &[Rarity]| -> Vec<Item> {
        items
            .iter()
            .filter(|i| rarities.contains(&i.rarity))
            .cloned()
            .collect()
    };

    vec![
        Case {
            id: "bronze".to_string(),
            name: "Bronze Case".to_string(),
            price: 50,
            tier_icon: "\u{1f949}".to_string(),
            item_pool: pool_of(&[Rarity::Common, Rarity::Rare]),
        },
        Case {
            id: "silver".to_string(),
            name: "Silver Case".to_string(),
            price: 150,
            tier_icon: "\u{1f948}".to_string(),
            item_pool: pool_of(&[Rarity::Rare, Rarity::Epic]),
        },
        Case {
            id: "gold".to_string(),
            name: "Gold Case".to_string(),
            price: 300,
            tier_icon: "\u{1f947}".to_string(),
            item_pool: pool_of(&[Rarity::Epic, Rarity::Legendary]),
        },
        Case {
            id: "platinum".to_string(),
            name: "Platinum Case".to_string(),
            price: 500,
            tier_icon: "\u{1f4a0}".to_string(),
            item_pool: items.to_vec(),
        },
    ]
}
