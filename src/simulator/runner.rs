//! Headless simulation runner.
//!
//! Drives the real [`CaseOpeningEngine`] with a zero-delay timeline and a
//! seeded RNG, so the measured economy matches live behavior exactly.

use super::config::SimConfig;
use super::report::SimReport;
use crate::catalog::data::Catalog;
use crate::catalog::weights::RarityWeights;
use crate::core::config::EngineConfig;
use crate::core::engine::CaseOpeningEngine;
use crate::core::errors::EngineError;
use crate::core::events::EngineEvent;
use chrono::Utc;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Names for decorative population drops mixed into the feed.
const POPULATION_NAMES: [&str; 5] = ["Nord", "Vex", "Mira", "Kazim", "Tarn"];

/// How often (in opens) a simulated population drop is injected.
const POPULATION_DROP_INTERVAL: u32 = 7;

/// Runs the full simulation and returns a report.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport, EngineError> {
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let engine_config = EngineConfig {
        starting_balance: config.starting_balance,
        ..EngineConfig::instant()
    };
    let mut engine =
        CaseOpeningEngine::new(Catalog::builtin(), RarityWeights::default(), engine_config)?;

    let now = Utc::now().timestamp();
    let mut report = SimReport {
        opens_attempted: config.num_opens,
        ..Default::default()
    };

    for open_idx in 0..config.num_opens {
        let case_id = match pick_case(&engine, config) {
            Some(id) => id,
            None => match fund_or_stop(&mut engine, config, &mut report)? {
                Some(id) => id,
                None => break,
            },
        };

        match engine.open_case(&case_id, &mut rng) {
            Ok(_) => {}
            Err(EngineError::InsufficientBalance { .. }) => {
                match fund_or_stop(&mut engine, config, &mut report)? {
                    Some(id) => {
                        engine.open_case(&id, &mut rng)?;
                    }
                    None => break,
                }
            }
            Err(err) => return Err(err),
        }

        while engine.is_opening() {
            for event in engine.tick(now) {
                if let EngineEvent::ItemRevealed { item, .. } = event {
                    report.record_drop(item.item.rarity);
                    if config.verbosity >= 2 {
                        println!(
                            "Open {}/{} - {} [{}] +{}",
                            open_idx + 1,
                            config.num_opens,
                            item.item.name,
                            item.item.rarity.name(),
                            item.item.value
                        );
                    }
                }
            }
            report.ticks_simulated += 1;
        }
        report.opens_completed += 1;

        if (open_idx + 1) % POPULATION_DROP_INTERVAL == 0 {
            inject_population_drop(&mut engine, &mut rng, now);
        }
    }

    let session = engine.session();
    report.total_spent = session.stats.total_spent;
    report.total_won = session.stats.total_won;
    report.best_drop = session.stats.best_drop;
    report.final_balance = session.balance;
    report.inventory_value = session.inventory.iter().map(|o| o.item.value).sum();
    Ok(report)
}

/// The case to open next: the configured one, or the priciest affordable.
fn pick_case(engine: &CaseOpeningEngine, config: &SimConfig) -> Option<String> {
    if let Some(id) = &config.case_id {
        return Some(id.clone());
    }
    engine
        .cases()
        .iter()
        .filter(|c| c.price <= engine.session().balance)
        .max_by_key(|c| c.price)
        .map(|c| c.id.clone())
}

/// Applies the configured top-up (recording it) and re-picks a case, or
/// signals the run should stop.
fn fund_or_stop(
    engine: &mut CaseOpeningEngine,
    config: &SimConfig,
    report: &mut SimReport,
) -> Result<Option<String>, EngineError> {
    match config.topup_on_broke {
        Some(amount) => {
            engine.deposit(amount)?;
            report.topups += 1;
            report.topup_total += amount;
            Ok(pick_case(engine, config))
        }
        None => {
            report.went_broke = true;
            Ok(None)
        }
    }
}

/// Pushes a random item win under a fake player name into the feed.
fn inject_population_drop(engine: &mut CaseOpeningEngine, rng: &mut impl Rng, now: i64) {
    let items = crate::catalog::data::builtin_items();
    let item = items[rng.gen_range(0..items.len())].clone();
    let name = POPULATION_NAMES[rng.gen_range(0..POPULATION_NAMES.len())];
    engine.record_population_drop(name, &item, now);
}
