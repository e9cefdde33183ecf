//! Headless trading simulator for Monte Carlo analysis.
//!
//! Plays many seeded sessions with a fixed buy-low/sell-high strategy using
//! the same market operations as the interactive game, then aggregates:
//! - Final and peak net worth
//! - Units bought and sold
//! - How often each location was visited

mod config;
mod report;
mod runner;
mod strategy;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
pub use strategy::{play_turn, TurnStats};
