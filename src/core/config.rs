//! Engine configuration.
//!
//! The reference behavior shipped as two near-duplicate apps: a minimal one
//! (delay, reveal, done) and an extended one with the roulette scroll and the
//! population drop feed. Both live behind one engine here; the variant is a
//! flag, not a code path fork.

use crate::core::constants::{
    seconds_to_ticks, MAX_FEED_ENTRIES, OPEN_DELAY_SECONDS, SCROLL_DURATION_SECONDS,
    SHOWCASE_DURATION_SECONDS, STARTING_BALANCE, STRIP_LANDING_OFFSET, STRIP_LENGTH,
};
use crate::core::errors::EngineError;

/// Tuning knobs for one engine instance. All timing is expressed in 100ms
/// engine ticks; the timeline and strip geometry are presentation tuning,
/// not correctness constraints, so they are configuration rather than
/// hard-coded constants.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// When false the reveal skips the scroll phase entirely (minimal
    /// variant): no strip is built and no scroll event is emitted.
    pub enable_roulette_animation: bool,

    /// Ticks between the debit and the start of the scroll (or the reveal,
    /// when animation is off).
    pub open_delay_ticks: u32,

    /// Ticks the decoy strip scrolls before the true item is committed.
    pub scroll_ticks: u32,

    /// Ticks the revealed item stays on show before the engine frees up.
    pub showcase_ticks: u32,

    /// Number of entries in the decoy strip.
    pub strip_length: usize,

    /// Distance of the landing slot from the end of the strip
    /// (reference: 5, i.e. index 45 of 50).
    pub landing_offset: usize,

    /// Balance a fresh session starts with.
    pub starting_balance: u64,

    /// Capacity of the recent-drops feed.
    pub feed_capacity: usize,
}

impl Default for EngineConfig {
    /// The extended reference variant: roulette scroll enabled, 2s open
    /// delay, 3s scroll, 3s showcase.
    fn default() -> Self {
        Self {
            enable_roulette_animation: true,
            open_delay_ticks: seconds_to_ticks(OPEN_DELAY_SECONDS),
            scroll_ticks: seconds_to_ticks(SCROLL_DURATION_SECONDS),
            showcase_ticks: seconds_to_ticks(SHOWCASE_DURATION_SECONDS),
            strip_length: STRIP_LENGTH,
            landing_offset: STRIP_LANDING_OFFSET,
            starting_balance: STARTING_BALANCE,
            feed_capacity: MAX_FEED_ENTRIES,
        }
    }
}

impl EngineConfig {
    /// The minimal reference variant: no roulette scroll.
    pub fn minimal() -> Self {
        Self {
            enable_roulette_animation: false,
            ..Default::default()
        }
    }

    /// Zero-delay config for headless runs: every phase completes on the
    /// next tick. Used by the simulator and tests.
    pub fn instant() -> Self {
        Self {
            enable_roulette_animation: false,
            open_delay_ticks: 0,
            scroll_ticks: 0,
            showcase_ticks: 0,
            ..Default::default()
        }
    }

    /// Index in the strip the presentation layer must land on.
    pub fn landing_index(&self) -> usize {
        self.strip_length - self.landing_offset
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.enable_roulette_animation {
            if self.strip_length == 0 {
                return Err(EngineError::Configuration(
                    "strip length must be positive".to_string(),
                ));
            }
            if self.landing_offset == 0 || self.landing_offset > self.strip_length {
                return Err(EngineError::Configuration(format!(
                    "landing offset {} must be in 1..={}",
                    self.landing_offset, self.strip_length
                )));
            }
        }
        if self.feed_capacity == 0 {
            return Err(EngineError::Configuration(
                "feed capacity must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_timeline() {
        let config = EngineConfig::default();
        assert!(config.enable_roulette_animation);
        assert_eq!(config.open_delay_ticks, 20);
        assert_eq!(config.scroll_ticks, 30);
        assert_eq!(config.showcase_ticks, 30);
        assert_eq!(config.landing_index(), 45);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_minimal_variant_disables_animation() {
        let config = EngineConfig::minimal();
        assert!(!config.enable_roulette_animation);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_landing_offset_out_of_range_rejected() {
        let config = EngineConfig {
            landing_offset: 60,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = EngineConfig {
            landing_offset: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_strip_geometry_ignored_when_animation_off() {
        let config = EngineConfig {
            strip_length: 0,
            landing_offset: 0,
            ..EngineConfig::minimal()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_feed_capacity_rejected() {
        let config = EngineConfig {
            feed_capacity: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
