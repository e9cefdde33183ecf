//! Runs seeded sessions of the scripted trader and collects per-run stats.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use super::strategy::play_turn;
use crate::core::game_state::GameState;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => StdRng::from_entropy(),
        };

        let run = simulate_single_run(config, &mut rng);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Net worth ${} (peak ${}), bought {}, sold {}",
                run_idx + 1,
                config.num_runs,
                run.final_net_worth,
                run.peak_net_worth,
                run.units_bought,
                run.units_sold
            );
        }

        all_runs.push(run);
    }

    tracing::info!(
        runs = config.num_runs,
        turns = config.turns,
        "simulation finished"
    );
    SimReport::from_runs(all_runs, config.turns)
}

/// Plays one session of `config.turns` turns from a fresh game state.
pub fn simulate_single_run<R: Rng>(config: &SimConfig, rng: &mut R) -> RunStats {
    let mut state = GameState::new(rng);
    let mut stats = RunStats {
        peak_net_worth: state.net_worth(),
        ..RunStats::default()
    };
    stats.location_visits[state.location.index()] += 1;

    for _ in 0..config.turns {
        let turn = play_turn(&mut state, rng, config.max_units_per_turn);
        stats.units_bought += turn.bought as u64;
        stats.units_sold += turn.sold as u64;
        stats.location_visits[turn.destination.index()] += 1;
        stats.peak_net_worth = stats.peak_net_worth.max(state.net_worth());
    }

    stats.final_cash = state.cash;
    stats.final_net_worth = state.net_worth();
    stats.final_location = state.location;
    stats
}
