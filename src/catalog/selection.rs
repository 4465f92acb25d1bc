//! Item selection within a sampled rarity, and roulette strip construction.

use crate::catalog::types::{Item, Rarity};
use rand::Rng;

/// Picks one item of the sampled rarity from the pool, uniformly at random.
///
/// When the pool has no item of that rarity the pick falls back to a uniform
/// draw over the entire pool, so every purchase yields an item
/// (availability over precision). Returns `None` only for an empty pool,
/// which the engine rejects at construction.
pub fn select_item<'a>(rarity: Rarity, pool: &'a [Item], rng: &mut impl Rng) -> Option<&'a Item> {
    if pool.is_empty() {
        return None;
    }

    let matching: Vec<&Item> = pool.iter().filter(|item| item.rarity == rarity).collect();
    if matching.is_empty() {
        Some(&pool[rng.gen_range(0..pool.len())])
    } else {
        Some(matching[rng.gen_range(0..matching.len())])
    }
}

/// Decoy item sequence for the reveal scroll. Everything except the entry at
/// `landing_index` is random noise; the presentation layer aligns its terminal
/// scroll offset to `landing_index`, which holds the true result.
#[derive(Debug, Clone)]
pub struct RouletteStrip {
    pub items: Vec<Item>,
    pub landing_index: usize,
}

/// Builds a strip of `length` uniform draws from the pool with `winner`
/// written at `landing_index`. The decoys are independent of the resolved
/// reward; only the landing entry is authoritative.
pub fn build_strip(
    pool: &[Item],
    winner: &Item,
    length: usize,
    landing_index: usize,
    rng: &mut impl Rng,
) -> RouletteStrip {
    let mut items = Vec::with_capacity(length);
    for _ in 0..length {
        items.push(pool[rng.gen_range(0..pool.len())].clone());
    }
    items[landing_index] = winner.clone();

    RouletteStrip {
        items,
        landing_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::data::builtin_items;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_select_item_matches_sampled_rarity() {
        let pool = builtin_items();
        let mut rng = test_rng();

        for _ in 0..200 {
            let item = select_item(Rarity::Epic, &pool, &mut rng).unwrap();
            assert_eq!(item.rarity, Rarity::Epic);
        }
    }

    #[test]
    fn test_select_item_always_from_pool() {
        let pool = builtin_items();
        let mut rng = test_rng();

        for rarity in Rarity::ALL {
            for _ in 0..100 {
                let item = select_item(rarity, &pool, &mut rng).unwrap();
                assert!(pool.contains(item));
            }
        }
    }

    #[test]
    fn test_select_item_falls_back_to_whole_pool() {
        // A pool with no legendary entries must still produce an item.
        let pool: Vec<Item> = builtin_items()
            .into_iter()
            .filter(|i| i.rarity == Rarity::Common)
            .collect();
        let mut rng = test_rng();

        for _ in 0..100 {
            let item = select_item(Rarity::Legendary, &pool, &mut rng).unwrap();
            assert_eq!(item.rarity, Rarity::Common);
            assert!(pool.contains(item));
        }
    }

    #[test]
    fn test_select_item_empty_pool_returns_none() {
        let mut rng = test_rng();
        assert!(select_item(Rarity::Common, &[], &mut rng).is_none());
    }

    #[test]
    fn test_select_item_single_candidate_is_deterministic() {
        let pool = vec![Item::new("x", "Only One", Rarity::Rare, 50, "")];
        let mut rng = test_rng();
        let item = select_item(Rarity::Rare, &pool, &mut rng).unwrap();
        assert_eq!(item.id, "x");
    }

    #[test]
    fn test_strip_has_winner_at_landing_index() {
        let pool = builtin_items();
        let winner = pool[7].clone();
        let mut rng = test_rng();

        let strip = build_strip(&pool, &winner, 50, 45, &mut rng);
        assert_eq!(strip.items.len(), 50);
        assert_eq!(strip.landing_index, 45);
        assert_eq!(strip.items[45], winner);
    }

    #[test]
    fn test_strip_decoys_come_from_pool() {
        let pool = builtin_items();
        let winner = pool[0].clone();
        let mut rng = test_rng();

        let strip = build_strip(&pool, &winner, 50, 45, &mut rng);
        for item in &strip.items {
            assert!(pool.contains(item));
        }
    }

    #[test]
    fn test_strip_respects_custom_geometry() {
        let pool = builtin_items();
        let winner = pool[3].clone();
        let mut rng = test_rng();

        let strip = build_strip(&pool, &winner, 12, 9, &mut rng);
        assert_eq!(strip.items.len(), 12);
        assert_eq!(strip.items[9], winner);
    }
}
