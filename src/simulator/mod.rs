//! Headless economy simulator.
//!
//! Runs thousands of case openings against the real engine on a zero-delay
//! timeline, then reports drop rates and return-to-player figures. Used for
//! tuning the rarity table and case pricing.

pub mod config;
pub mod report;
pub mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::run_simulation;
