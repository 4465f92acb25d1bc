//! Simulation report generation.

use crate::catalog::types::Rarity;
use serde::Serialize;

/// Aggregated results from one simulation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SimReport {
    pub opens_attempted: u32,
    pub opens_completed: u32,

    // Per-rarity drop counts
    pub common_drops: u64,
    pub rare_drops: u64,
    pub epic_drops: u64,
    pub legendary_drops: u64,

    // Economy totals (from session stats)
    pub total_spent: u64,
    pub total_won: u64,
    pub best_drop: u64,
    pub final_balance: u64,
    pub inventory_value: u64,

    // Funding
    pub topups: u32,
    pub topup_total: u64,
    pub went_broke: bool,

    pub ticks_simulated: u64,
}

impl SimReport {
    pub fn record_drop(&mut self, rarity: Rarity) {
        match rarity {
            Rarity::Common => self.common_drops += 1,
            Rarity::Rare => self.rare_drops += 1,
            Rarity::Epic => self.epic_drops += 1,
            Rarity::Legendary => self.legendary_drops += 1,
        }
    }

    /// Return-to-player ratio: winnings over spend.
    pub fn rtp(&self) -> f64 {
        if self.total_spent == 0 {
            0.0
        } else {
            self.total_won as f64 / self.total_spent as f64
        }
    }

    fn drop_share(&self, count: u64) -> f64 {
        if self.opens_completed == 0 {
            0.0
        } else {
            count as f64 / self.opens_completed as f64 * 100.0
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("Results:");
        println!(
            "  Opens:          {} completed / {} attempted",
            self.opens_completed, self.opens_attempted
        );
        println!("  Ticks:          {}", self.ticks_simulated);
        println!();
        println!("Drops:");
        println!(
            "  Common:         {:>8}  ({:.1}%)",
            self.common_drops,
            self.drop_share(self.common_drops)
        );
        println!(
            "  Rare:           {:>8}  ({:.1}%)",
            self.rare_drops,
            self.drop_share(self.rare_drops)
        );
        println!(
            "  Epic:           {:>8}  ({:.1}%)",
            self.epic_drops,
            self.drop_share(self.epic_drops)
        );
        println!(
            "  Legendary:      {:>8}  ({:.1}%)",
            self.legendary_drops,
            self.drop_share(self.legendary_drops)
        );
        println!();
        println!("Economy:");
        println!("  Total spent:    {}", self.total_spent);
        println!("  Total won:      {}", self.total_won);
        println!("  RTP:            {:.3}", self.rtp());
        println!("  Best drop:      {}", self.best_drop);
        println!("  Final balance:  {}", self.final_balance);
        println!("  Inventory:      {} value unsold", self.inventory_value);
        if self.topups > 0 {
            println!("  Top-ups:        {} ({} credited)", self.topups, self.topup_total);
        }
        if self.went_broke {
            println!("  Session went broke before finishing the run");
        }
    }
}
