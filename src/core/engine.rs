//! The case-opening engine: affordability checks, debit, reward resolution,
//! and the timed reveal state machine.
//!
//! One open runs `Idle -> Debited -> RevealScrolling -> Revealed -> Idle`.
//! The engine is driven by [`CaseOpeningEngine::tick`], one call per 100ms of
//! wall time (or per virtual tick in tests and the simulator), and reports
//! every transition as [`EngineEvent`]s. At most one reveal is in flight per
//! session; `active_reveal` is the busy guard, and concurrent opens are
//! rejected with [`EngineError::AlreadyOpening`] rather than queued.

use crate::catalog::data::Catalog;
use crate::catalog::selection::{build_strip, select_item, RouletteStrip};
use crate::catalog::types::{Case, Item};
use crate::catalog::weights::{sample_rarity, RarityWeights};
use crate::core::config::EngineConfig;
use crate::core::errors::EngineError;
use crate::core::events::EngineEvent;
use crate::core::feed::{DropFeed, FeedEntry};
use crate::core::session::{OwnedItem, SessionState};
use rand::Rng;
use tracing::debug;

/// Feed label for the local session's own wins.
pub const LOCAL_PLAYER_NAME: &str = "You";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RevealPhase {
    /// Waiting out the open delay; the outcome is resolved but hidden.
    Preparing,
    /// The decoy strip is scrolling toward the landing slot.
    Scrolling,
    /// The true item is on show; the commit already happened.
    Showcase,
}

/// One in-flight reveal. Outcome and strip are resolved up front at open
/// time; the phases only control when they become visible and when the
/// credit is committed.
#[derive(Debug, Clone)]
struct RevealState {
    case_id: String,
    price: u64,
    item: Item,
    strip: Option<RouletteStrip>,
    phase: RevealPhase,
    ticks_remaining: u32,
}

/// Orchestrates case openings against a static catalog and a single mutable
/// session. The engine is the only mutator of its [`SessionState`].
pub struct CaseOpeningEngine {
    config: EngineConfig,
    catalog: Catalog,
    weights: RarityWeights,
    session: SessionState,
    feed: DropFeed,
    active_reveal: Option<RevealState>,
}

impl CaseOpeningEngine {
    /// Builds an engine, validating catalog, weights, and config. Any
    /// [`EngineError::Configuration`] here is fatal; a constructed engine
    /// cannot hit a configuration error at runtime.
    pub fn new(
        catalog: Catalog,
        weights: RarityWeights,
        config: EngineConfig,
    ) -> Result<Self, EngineError> {
        catalog.validate()?;
        weights.validate()?;
        config.validate()?;

        let session = SessionState::new(config.starting_balance);
        let feed = DropFeed::new(config.feed_capacity);
        Ok(Self {
            config,
            catalog,
            weights,
            session,
            feed,
            active_reveal: None,
        })
    }

    /// The built-in catalog with reference weights and timeline.
    pub fn with_defaults() -> Result<Self, EngineError> {
        Self::new(
            Catalog::builtin(),
            RarityWeights::default(),
            EngineConfig::default(),
        )
    }

    /// The purchasable cases, in catalog order.
    pub fn cases(&self) -> &[Case] {
        &self.catalog.cases
    }

    /// Read-only snapshot of balance, inventory, and stats.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn feed(&self) -> &DropFeed {
        &self.feed
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// True while a reveal is in flight; opens are rejected until the
    /// showcase delay has elapsed.
    pub fn is_opening(&self) -> bool {
        self.active_reveal.is_some()
    }

    /// Starts one case opening.
    ///
    /// Debits the price and marks the engine busy before any randomness is
    /// drawn, so the spend is charged even though the outcome is pending.
    /// The resolved item stays hidden until the reveal timeline (driven by
    /// [`tick`](Self::tick)) commits it.
    ///
    /// Returns the `CaseDebited` event on success. Rejections
    /// (`UnknownCase`, `InsufficientBalance`, `AlreadyOpening`) leave
    /// balance, inventory, and stats untouched.
    pub fn open_case(
        &mut self,
        case_id: &str,
        rng: &mut impl Rng,
    ) -> Result<Vec<EngineEvent>, EngineError> {
        if self.active_reveal.is_some() {
            return Err(EngineError::AlreadyOpening);
        }
        let case = self
            .catalog
            .case(case_id)
            .ok_or_else(|| EngineError::UnknownCase(case_id.to_string()))?
            .clone();
        if self.session.balance < case.price {
            return Err(EngineError::InsufficientBalance {
                price: case.price,
                balance: self.session.balance,
            });
        }

        self.session.balance -= case.price;

        let rarity = sample_rarity(&self.weights, rng);
        let item = match select_item(rarity, &case.item_pool, rng) {
            Some(item) => item.clone(),
            None => {
                // Pools are validated non-empty at construction.
                self.session.balance += case.price;
                return Err(EngineError::Configuration(format!(
                    "case {} has an empty item pool",
                    case.id
                )));
            }
        };

        let strip = if self.config.enable_roulette_animation {
            Some(build_strip(
                &case.item_pool,
                &item,
                self.config.strip_length,
                self.config.landing_index(),
                rng,
            ))
        } else {
            None
        };

        debug!(
            case_id = %case.id,
            price = case.price,
            rarity = ?item.rarity,
            item = %item.name,
            "case debited, reveal pending"
        );

        self.active_reveal = Some(RevealState {
            case_id: case.id.clone(),
            price: case.price,
            item,
            strip,
            phase: RevealPhase::Preparing,
            ticks_remaining: self.config.open_delay_ticks,
        });

        Ok(vec![EngineEvent::CaseDebited {
            case_id: case.id,
            price: case.price,
            balance: self.session.balance,
        }])
    }

    /// Advances the reveal timeline by one tick. `now` is the timestamp
    /// stamped onto any item committed during this tick.
    ///
    /// The timed transitions are not cancellable and cannot be skipped; a
    /// phase whose counter reaches zero moves to the next phase on that
    /// tick, and the engine frees up only after the showcase delay.
    pub fn tick(&mut self, now: i64) -> Vec<EngineEvent> {
        let mut events = Vec::new();

        let phase = match self.active_reveal.as_mut() {
            Some(reveal) => {
                if reveal.ticks_remaining > 0 {
                    reveal.ticks_remaining -= 1;
                }
                if reveal.ticks_remaining > 0 {
                    return events;
                }
                reveal.phase
            }
            None => return events,
        };

        match phase {
            RevealPhase::Preparing => {
                let strip = self
                    .active_reveal
                    .as_ref()
                    .and_then(|reveal| reveal.strip.clone());
                match strip {
                    Some(strip) => {
                        if let Some(reveal) = self.active_reveal.as_mut() {
                            reveal.phase = RevealPhase::Scrolling;
                            reveal.ticks_remaining = self.config.scroll_ticks;
                            events.push(EngineEvent::StripRevealStarted {
                                case_id: reveal.case_id.clone(),
                                strip: strip.items,
                                landing_index: strip.landing_index,
                            });
                        }
                    }
                    // Minimal variant: no scroll, commit straight away.
                    None => self.commit_reveal(now, &mut events),
                }
            }
            RevealPhase::Scrolling => self.commit_reveal(now, &mut events),
            RevealPhase::Showcase => {
                self.active_reveal = None;
                events.push(EngineEvent::RevealDismissed);
            }
        }

        events
    }

    /// Reveal completion: credit the item's value, append it to the
    /// inventory, update all four statistics, and move to the showcase
    /// phase. Stats are touched here and nowhere else.
    fn commit_reveal(&mut self, now: i64, events: &mut Vec<EngineEvent>) {
        let (item, price) = match self.active_reveal.as_ref() {
            Some(reveal) => (reveal.item.clone(), reveal.price),
            None => return,
        };

        self.session.balance += item.value;
        self.session.stats.total_spent += price;
        self.session.stats.total_won += item.value;
        self.session.stats.cases_opened += 1;
        self.session.stats.best_drop = self.session.stats.best_drop.max(item.value);

        let owned = OwnedItem::new(item, now);
        self.feed.push(FeedEntry {
            player_name: LOCAL_PLAYER_NAME.to_string(),
            item_name: owned.item.name.clone(),
            rarity: owned.item.rarity,
            value: owned.item.value,
            dropped_at: now,
        });
        self.session.inventory.push(owned.clone());

        debug!(
            item = %owned.item.name,
            value = owned.item.value,
            balance = self.session.balance,
            "reveal committed"
        );

        events.push(EngineEvent::ItemRevealed {
            item: owned,
            balance: self.session.balance,
        });

        if let Some(reveal) = self.active_reveal.as_mut() {
            reveal.phase = RevealPhase::Showcase;
            reveal.ticks_remaining = self.config.showcase_ticks;
        }
    }

    /// Sells the inventory entry at `index`: removes exactly that entry and
    /// credits its value. Sell proceeds are not winnings, so stats are
    /// untouched. An invalid index is rejected with no state change.
    pub fn sell_item(&mut self, index: usize) -> Result<u64, EngineError> {
        if index >= self.session.inventory.len() {
            return Err(EngineError::IndexOutOfRange {
                index,
                size: self.session.inventory.len(),
            });
        }
        let sold = self.session.inventory.remove(index);
        self.session.balance += sold.item.value;
        debug!(item = %sold.item.name, value = sold.item.value, "inventory entry sold");
        Ok(sold.item.value)
    }

    /// Simulated instant top-up of a positive amount; returns the new
    /// balance.
    ///
    /// This is a stand-in for a real payment callback and must not be wired
    /// to real money as-is: there is no verification of any kind, the credit
    /// is unconditional.
    pub fn deposit(&mut self, amount: u64) -> Result<u64, EngineError> {
        if amount == 0 {
            return Err(EngineError::InvalidAmount);
        }
        self.session.balance += amount;
        debug!(amount, balance = self.session.balance, "deposit credited");
        Ok(self.session.balance)
    }

    /// Injects a reward event from the simulated player population into the
    /// recent-drops feed. Decorative only; no session state is touched.
    pub fn record_population_drop(&mut self, player_name: &str, item: &Item, now: i64) {
        self.feed.push(FeedEntry {
            player_name: player_name.to_string(),
            item_name: item.name.clone(),
            rarity: item.rarity,
            value: item.value,
            dropped_at: now,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::Rarity;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn instant_engine() -> CaseOpeningEngine {
        CaseOpeningEngine::new(
            Catalog::builtin(),
            RarityWeights::default(),
            EngineConfig::instant(),
        )
        .unwrap()
    }

    /// Ticks until the engine goes idle, collecting all events.
    fn run_to_idle(engine: &mut CaseOpeningEngine) -> Vec<EngineEvent> {
        let mut events = Vec::new();
        let mut guard = 0;
        while engine.is_opening() {
            events.extend(engine.tick(1_700_000_000));
            guard += 1;
            assert!(guard < 1000, "reveal never completed");
        }
        events
    }

    #[test]
    fn test_with_defaults_constructs() {
        let engine = CaseOpeningEngine::with_defaults().unwrap();
        assert_eq!(engine.session().balance, 1000);
        assert_eq!(engine.cases().len(), 4);
        assert!(!engine.is_opening());
    }

    #[test]
    fn test_invalid_weights_rejected_at_construction() {
        let weights = RarityWeights {
            common: 0,
            rare: 0,
            epic: 0,
            legendary: 0,
        };
        let result = CaseOpeningEngine::new(Catalog::builtin(), weights, EngineConfig::default());
        assert!(matches!(result, Err(EngineError::Configuration(_))));
    }

    #[test]
    fn test_open_debits_before_reveal() {
        let mut engine = instant_engine();
        let mut rng = test_rng();

        let events = engine.open_case("bronze", &mut rng).unwrap();
        assert!(matches!(
            events[0],
            EngineEvent::CaseDebited { price: 50, balance: 950, .. }
        ));
        assert_eq!(engine.session().balance, 950);
        assert!(engine.is_opening());
        // Nothing committed yet
        assert!(engine.session().inventory.is_empty());
        assert_eq!(engine.session().stats.cases_opened, 0);
    }

    #[test]
    fn test_full_open_commits_item_and_stats() {
        let mut engine = instant_engine();
        let mut rng = test_rng();

        engine.open_case("bronze", &mut rng).unwrap();
        let events = run_to_idle(&mut engine);

        let revealed = events.iter().find_map(|e| match e {
            EngineEvent::ItemRevealed { item, .. } => Some(item.clone()),
            _ => None,
        });
        let item = revealed.expect("reveal should complete").item;

        assert_eq!(engine.session().balance, 1000 - 50 + item.value);
        assert_eq!(engine.session().inventory.len(), 1);
        assert_eq!(engine.session().stats.total_spent, 50);
        assert_eq!(engine.session().stats.total_won, item.value);
        assert_eq!(engine.session().stats.cases_opened, 1);
        assert_eq!(engine.session().stats.best_drop, item.value);
        assert!(matches!(events.last(), Some(EngineEvent::RevealDismissed)));
        assert!(!engine.is_opening());
    }

    #[test]
    fn test_concurrent_open_rejected() {
        let mut engine = instant_engine();
        let mut rng = test_rng();

        engine.open_case("bronze", &mut rng).unwrap();
        let err = engine.open_case("bronze", &mut rng).unwrap_err();
        assert_eq!(err, EngineError::AlreadyOpening);
        // The rejection changed nothing: only the first debit applies.
        assert_eq!(engine.session().balance, 950);
    }

    #[test]
    fn test_insufficient_balance_rejected_without_state_change() {
        let mut engine = instant_engine();
        let mut rng = test_rng();

        // Drain the balance below the platinum price.
        engine.session.balance = 100;
        let err = engine.open_case("platinum", &mut rng).unwrap_err();
        assert_eq!(
            err,
            EngineError::InsufficientBalance {
                price: 500,
                balance: 100
            }
        );
        assert_eq!(engine.session().balance, 100);
        assert!(engine.session().inventory.is_empty());
        assert_eq!(engine.session().stats.cases_opened, 0);
        assert!(!engine.is_opening());
    }

    #[test]
    fn test_unknown_case_rejected() {
        let mut engine = instant_engine();
        let mut rng = test_rng();
        let err = engine.open_case("diamond", &mut rng).unwrap_err();
        assert_eq!(err, EngineError::UnknownCase("diamond".to_string()));
        assert_eq!(engine.session().balance, 1000);
    }

    #[test]
    fn test_roulette_variant_emits_strip_with_landing_item() {
        let config = EngineConfig {
            open_delay_ticks: 1,
            scroll_ticks: 1,
            showcase_ticks: 1,
            ..Default::default()
        };
        let mut engine =
            CaseOpeningEngine::new(Catalog::builtin(), RarityWeights::default(), config).unwrap();
        let mut rng = test_rng();

        engine.open_case("gold", &mut rng).unwrap();
        let events = run_to_idle(&mut engine);

        let (strip, landing_index) = events
            .iter()
            .find_map(|e| match e {
                EngineEvent::StripRevealStarted {
                    strip,
                    landing_index,
                    ..
                } => Some((strip.clone(), *landing_index)),
                _ => None,
            })
            .expect("scroll should start");
        let revealed = events
            .iter()
            .find_map(|e| match e {
                EngineEvent::ItemRevealed { item, .. } => Some(item.item.clone()),
                _ => None,
            })
            .expect("reveal should complete");

        assert_eq!(strip.len(), 50);
        assert_eq!(landing_index, 45);
        // The landing slot holds the true result.
        assert_eq!(strip[landing_index], revealed);
    }

    #[test]
    fn test_minimal_variant_never_emits_strip() {
        let mut engine = instant_engine();
        let mut rng = test_rng();

        engine.open_case("silver", &mut rng).unwrap();
        let events = run_to_idle(&mut engine);
        assert!(!events
            .iter()
            .any(|e| matches!(e, EngineEvent::StripRevealStarted { .. })));
    }

    #[test]
    fn test_open_after_dismissal_succeeds() {
        let mut engine = instant_engine();
        let mut rng = test_rng();

        engine.open_case("bronze", &mut rng).unwrap();
        run_to_idle(&mut engine);
        assert!(engine.open_case("bronze", &mut rng).is_ok());
        run_to_idle(&mut engine);
        assert_eq!(engine.session().stats.cases_opened, 2);
    }

    #[test]
    fn test_best_drop_is_monotonic() {
        let mut engine = instant_engine();
        let mut rng = test_rng();

        let mut best_seen = 0;
        for _ in 0..30 {
            engine.session.balance = engine.session.balance.max(500);
            engine.open_case("platinum", &mut rng).unwrap();
            run_to_idle(&mut engine);
            let best = engine.session().stats.best_drop;
            assert!(best >= best_seen);
            best_seen = best;
        }
        let max_won = engine
            .session()
            .inventory
            .iter()
            .map(|o| o.item.value)
            .max()
            .unwrap();
        assert_eq!(best_seen, max_won);
    }

    #[test]
    fn test_sell_credits_value_and_leaves_stats_alone() {
        let mut engine = instant_engine();
        let mut rng = test_rng();

        engine.open_case("bronze", &mut rng).unwrap();
        run_to_idle(&mut engine);

        let stats_before = engine.session().stats;
        let balance_before = engine.session().balance;
        let value = engine.session().inventory[0].item.value;

        let credited = engine.sell_item(0).unwrap();
        assert_eq!(credited, value);
        assert_eq!(engine.session().balance, balance_before + value);
        assert!(engine.session().inventory.is_empty());
        assert_eq!(engine.session().stats, stats_before);
    }

    #[test]
    fn test_sell_invalid_index_is_a_no_op() {
        let mut engine = instant_engine();
        let err = engine.sell_item(0).unwrap_err();
        assert_eq!(err, EngineError::IndexOutOfRange { index: 0, size: 0 });
        assert_eq!(engine.session().balance, 1000);
    }

    #[test]
    fn test_sell_removes_exactly_one_entry() {
        let mut engine = instant_engine();
        let mut rng = test_rng();

        for _ in 0..3 {
            engine.open_case("bronze", &mut rng).unwrap();
            run_to_idle(&mut engine);
        }
        let second_id = engine.session().inventory[1].instance_id.clone();
        engine.sell_item(1).unwrap();
        assert_eq!(engine.session().inventory.len(), 2);
        assert!(engine
            .session()
            .inventory
            .iter()
            .all(|o| o.instance_id != second_id));
    }

    #[test]
    fn test_deposit_credits_positive_amount() {
        let mut engine = instant_engine();
        assert_eq!(engine.deposit(250).unwrap(), 1250);
        assert_eq!(engine.session().balance, 1250);
    }

    #[test]
    fn test_deposit_zero_rejected() {
        let mut engine = instant_engine();
        assert_eq!(engine.deposit(0).unwrap_err(), EngineError::InvalidAmount);
        assert_eq!(engine.session().balance, 1000);
    }

    #[test]
    fn test_wins_land_in_feed_newest_first() {
        let mut engine = instant_engine();
        let mut rng = test_rng();

        engine.open_case("bronze", &mut rng).unwrap();
        run_to_idle(&mut engine);
        let won = engine.session().inventory[0].item.name.clone();

        assert_eq!(engine.feed().len(), 1);
        let front = engine.feed().entries().next().unwrap();
        assert_eq!(front.player_name, LOCAL_PLAYER_NAME);
        assert_eq!(front.item_name, won);
    }

    #[test]
    fn test_population_drops_do_not_touch_session() {
        let mut engine = instant_engine();
        let item = Item::new("x", "Dragon Bow", Rarity::Epic, 250, "");
        engine.record_population_drop("Rival", &item, 0);

        assert_eq!(engine.feed().len(), 1);
        assert_eq!(engine.session().balance, 1000);
        assert!(engine.session().inventory.is_empty());
    }

    #[test]
    fn test_tick_while_idle_is_silent() {
        let mut engine = instant_engine();
        assert!(engine.tick(0).is_empty());
    }
}
