// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 100;
pub const TICKS_PER_SECOND: u32 = 10;

// Reveal timeline defaults (reference behavior)
pub const OPEN_DELAY_SECONDS: f64 = 2.0;
pub const SCROLL_DURATION_SECONDS: f64 = 3.0;
pub const SHOWCASE_DURATION_SECONDS: f64 = 3.0;

// Roulette strip geometry: 50 entries, landing 5 from the end (index 45)
pub const STRIP_LENGTH: usize = 50;
pub const STRIP_LANDING_OFFSET: usize = 5;

// Session economy
pub const STARTING_BALANCE: u64 = 1000;

// Recent-drops feed
pub const MAX_FEED_ENTRIES: usize = 20;

/// Converts a duration in seconds to whole engine ticks.
pub fn seconds_to_ticks(seconds: f64) -> u32 {
    (seconds * TICKS_PER_SECOND as f64) as u32
}
