//! Trading strategy simulator CLI.
//!
//! Plays many headless sessions with a buy-low/sell-high trader and reports
//! how the market treats it.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                   # 1000 runs of 30 turns
//!   cargo run --bin simulate -- -n 100 -t 50   # 100 runs of 50 turns
//!   cargo run --bin simulate -- --seed 42      # Reproducible run

use std::env;
use std::process;
use textwars::simulator::{run_simulation, SimConfig};

fn main() {
    let args: Vec<String> = env::args().collect();
    let (config, json) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'simulate --help' for usage.");
            process::exit(1);
        }
    };

    if config.verbosity >= 1 {
        println!("Configuration:");
        println!("  Runs:           {}", config.num_runs);
        println!("  Turns per run:  {}", config.turns);
        println!("  Max units/turn: {}", config.max_units_per_turn);
        if let Some(seed) = config.seed {
            println!("  Seed:           {}", seed);
        }
        println!();
    }

    let report = run_simulation(&config);

    if json {
        println!("{}", report.to_json());
    } else {
        println!("{}", report.to_text());
    }
}

fn parse_args(args: &[String]) -> Result<(SimConfig, bool), String> {
    let mut config = SimConfig::default();
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                config.num_runs = parse_value(args, i)?;
                i += 1;
            }
            "-t" | "--turns" => {
                config.turns = parse_value(args, i)?;
                i += 1;
            }
            "-u" | "--max-units" => {
                config.max_units_per_turn = parse_value(args, i)?;
                i += 1;
            }
            "-s" | "--seed" => {
                config.seed = Some(parse_value(args, i)?);
                i += 1;
            }
            "-v" | "--verbose" => config.verbosity = 2,
            "-q" | "--quiet" => config.verbosity = 0,
            "--json" => {
                json = true;
                config.verbosity = 0;
            }
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    Ok((config, json))
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: usize) -> Result<T, String> {
    let flag = &args[i];
    let raw = args
        .get(i + 1)
        .ok_or_else(|| format!("{} requires a value", flag))?;
    raw.parse()
        .map_err(|_| format!("{} requires a number, got '{}'", flag, raw))
}

fn print_help() {
    println!("TextWars Trading Simulator\n");
    println!("Usage: simulate [OPTIONS]\n");
    println!("Options:");
    println!("  -n, --runs N        Number of sessions (default: 1000)");
    println!("  -t, --turns N       Turns per session (default: 30)");
    println!("  -u, --max-units N   Most units bought per turn (default: 100)");
    println!("  -s, --seed N        RNG seed for reproducible runs");
    println!("  -v, --verbose       Print a line per run");
    println!("  -q, --quiet         Only print the report");
    println!("      --json          Print the report as JSON");
    println!("  -h, --help          Show this help");
}
