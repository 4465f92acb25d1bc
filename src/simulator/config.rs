//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of case openings to attempt
    pub num_opens: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Case to open every time (None = priciest affordable case)
    pub case_id: Option<String>,

    /// Balance the session starts with
    pub starting_balance: u64,

    /// Instant top-up credited whenever the session cannot afford a case
    /// (None = stop the run instead)
    pub topup_on_broke: Option<u64>,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-open detail)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_opens: 10_000,
            seed: None,
            case_id: None,
            starting_balance: 1000,
            topup_on_broke: None,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for measuring one case's return-to-player ratio.
    pub fn case_rtp(case_id: &str, num_opens: u32) -> Self {
        Self {
            num_opens,
            case_id: Some(case_id.to_string()),
            topup_on_broke: Some(10_000),
            ..Default::default()
        }
    }
}
