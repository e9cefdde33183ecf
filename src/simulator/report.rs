//! Simulation report generation.

use crate::core::constants::{DEFAULT_LOCATION, STARTING_CASH};
use crate::market::Location;
use serde::Serialize;

/// Outcome of a single simulated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub final_cash: u64,
    pub final_net_worth: u64,
    pub peak_net_worth: u64,
    pub units_bought: u64,
    pub units_sold: u64,
    pub final_location: Location,
    /// Indexed by `Location::index()`, includes the starting location.
    pub location_visits: [u32; Location::COUNT],
}

impl Default for RunStats {
    fn default() -> Self {
        Self {
            final_cash: STARTING_CASH,
            final_net_worth: STARTING_CASH,
            peak_net_worth: STARTING_CASH,
            units_bought: 0,
            units_sold: 0,
            final_location: DEFAULT_LOCATION,
            location_visits: [0; Location::COUNT],
        }
    }
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub turns_per_run: u32,

    pub avg_final_net_worth: f64,
    pub min_final_net_worth: u64,
    pub max_final_net_worth: u64,
    pub avg_peak_net_worth: f64,
    /// Share of runs ending above the starting cash
    pub profitable_rate: f64,

    pub avg_units_bought: f64,
    pub avg_units_sold: f64,

    /// Total visits per location across all runs, in `Location::all()` order
    pub location_visits: [u64; Location::COUNT],

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Aggregate a set of runs.
    pub fn from_runs(runs: Vec<RunStats>, turns_per_run: u32) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = num_runs.max(1) as f64;

        let avg = |f: fn(&RunStats) -> u64| runs.iter().map(|r| f(r) as f64).sum::<f64>() / divisor;

        let mut location_visits = [0u64; Location::COUNT];
        for run in &runs {
            for (total, &visits) in location_visits.iter_mut().zip(run.location_visits.iter()) {
                *total += visits as u64;
            }
        }

        let profitable = runs
            .iter()
            .filter(|r| r.final_net_worth > STARTING_CASH)
            .count();

        Self {
            num_runs,
            turns_per_run,
            avg_final_net_worth: avg(|r| r.final_net_worth),
            min_final_net_worth: runs.iter().map(|r| r.final_net_worth).min().unwrap_or(0),
            max_final_net_worth: runs.iter().map(|r| r.final_net_worth).max().unwrap_or(0),
            avg_peak_net_worth: avg(|r| r.peak_net_worth),
            profitable_rate: profitable as f64 / divisor,
            avg_units_bought: avg(|r| r.units_bought),
            avg_units_sold: avg(|r| r.units_sold),
            location_visits,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                 TEXTWARS SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} x {} turns\n\n",
            self.num_runs, self.turns_per_run
        ));

        report.push_str("── NET WORTH ────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Final:           ${:.0}\n",
            self.avg_final_net_worth
        ));
        report.push_str(&format!(
            "  Min / Max Final:     ${} / ${}\n",
            self.min_final_net_worth, self.max_final_net_worth
        ));
        report.push_str(&format!(
            "  Avg Peak:            ${:.0}\n",
            self.avg_peak_net_worth
        ));
        report.push_str(&format!(
            "  Profitable Runs:     {:.1}%\n\n",
            self.profitable_rate * 100.0
        ));

        report.push_str("── TRADING ──────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Units Bought:    {:.1}\n",
            self.avg_units_bought
        ));
        report.push_str(&format!(
            "  Avg Units Sold:      {:.1}\n\n",
            self.avg_units_sold
        ));

        report.push_str("── LOCATIONS ────────────────────────────────────────────────────\n");
        let total_visits = self.location_visits.iter().sum::<u64>().max(1);
        for location in Location::all() {
            let visits = self.location_visits[location.index()];
            let pct = visits as f64 / total_visits as f64 * 100.0;
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!(
                "  {:<12} {:>5.1}% {}\n",
                location.name(),
                pct,
                bar
            ));
        }

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
