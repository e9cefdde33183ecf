//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of sessions to play
    pub num_runs: u32,

    /// Turns per session (each turn trades, then travels)
    pub turns: u32,

    /// Most units the trader buys in a single turn
    pub max_units_per_turn: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            turns: 30,
            max_units_per_turn: 100,
            seed: None,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small deterministic config for quick checks
    pub fn quick(seed: u64) -> Self {
        Self {
            num_runs: 20,
            turns: 10,
            seed: Some(seed),
            ..Default::default()
        }
    }
}
