//! Rarity weights and the cumulative-weight rarity sampler.

use crate::catalog::types::Rarity;
use crate::core::errors::EngineError;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Relative drop weights per rarity tier. Weights need not sum to 100; they
/// are interpreted as proportions of their total. Fixed for the lifetime of
/// an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RarityWeights {
    pub common: u32,
    pub rare: u32,
    pub epic: u32,
    pub legendary: u32,
}

impl RarityWeights {
    pub fn get(&self, rarity: Rarity) -> u32 {
        match rarity {
            Rarity::Common => self.common,
            Rarity::Rare => self.rare,
            Rarity::Epic => self.epic,
            Rarity::Legendary => self.legendary,
        }
    }

    pub fn total(&self) -> u32 {
        Rarity::ALL.iter().map(|r| self.get(*r)).sum()
    }

    /// Rejects weights the sampler cannot draw from. Called once at engine
    /// construction; the sampler itself has no error path.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.total() == 0 {
            return Err(EngineError::Configuration(
                "rarity weights must have a positive total".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RarityWeights {
    /// The reference drop table: 60% common, 25% rare, 12% epic, 3% legendary.
    fn default() -> Self {
        Self {
            common: 60,
            rare: 25,
            epic: 12,
            legendary: 3,
        }
    }
}

/// Maps one uniform draw to a rarity tier.
///
/// Draws `r` uniformly from `[0, total)` and walks the tiers in declared
/// order, accumulating weights; the first tier whose cumulative total reaches
/// `r` wins. Iteration order must stay `Rarity::ALL` so boundary draws resolve
/// to the earlier tier.
///
/// Weights must already be validated (`total > 0`); see
/// [`RarityWeights::validate`].
pub fn sample_rarity(weights: &RarityWeights, rng: &mut impl Rng) -> Rarity {
    let draw = rng.gen::<f64>() * weights.total() as f64;

    let mut cumulative = 0.0;
    for rarity in Rarity::ALL {
        cumulative += weights.get(rarity) as f64;
        if draw <= cumulative {
            return rarity;
        }
    }
    // draw < total == final cumulative, so the loop always returns;
    // float rounding still needs a landing spot.
    Rarity::Legendary
}
