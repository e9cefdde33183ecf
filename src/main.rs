use crossterm::event::{self, Event};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::backend::Backend;
use ratatui::Terminal;
use std::io;
use std::time::Duration;
use textwars::input::{handle_market_input, InputResult, MarketUiState};
use textwars::market::apply_action;
use textwars::ui::draw_ui;
use textwars::utils::{build_info, logging, terminal};
use textwars::{GameState, TICK_INTERVAL_MS};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let mut seed: Option<u64> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_string());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("TextWars - A Dopewars Clone\n");
                println!("Usage: textwars [options]\n");
                println!("Options:");
                println!("  --seed N   Use a fixed RNG seed for this session");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                println!();
                println!("Set TEXTWARS_LOG (e.g. 'debug') to control ~/.textwars/textwars.log");
                std::process::exit(0);
            }
            "--seed" => {
                let parsed = args.get(i + 1).and_then(|raw| raw.parse().ok());
                match parsed {
                    Some(value) => seed = Some(value),
                    None => {
                        eprintln!("--seed requires a number");
                        std::process::exit(1);
                    }
                }
                i += 1;
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'textwars --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    // Logging is best effort; the game runs without it
    let log_path = logging::init_file_logging().ok();

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut state = GameState::new(&mut rng);
    tracing::info!(
        ?seed,
        location = state.location.name(),
        cash = state.cash,
        "session started"
    );

    let result = terminal::setup_terminal()
        .and_then(|mut term| run_game(&mut term, &mut state, &mut rng));

    // Restore even if setup or the loop failed
    let restored = terminal::restore_terminal();

    tracing::info!(
        cash = state.cash,
        net_worth = state.net_worth(),
        location = state.location.name(),
        "session ended"
    );
    if let Err(e) = &result {
        tracing::error!(error = %e, "terminal loop failed");
    }
    if let Err(e) = &restored {
        tracing::error!(error = %e, "terminal restore failed");
    }

    println!(
        "You finished in {} with ${} cash (net worth ${}).",
        state.location.name(),
        state.cash,
        state.net_worth()
    );
    if let Some(path) = log_path {
        println!("Log written to {}", path.display());
    }

    result.and(restored)
}

/// Draw, read a key, apply the decoded action. Returns when the player quits.
fn run_game<B: Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    state: &mut GameState,
    rng: &mut R,
) -> io::Result<()> {
    let mut ui = MarketUiState::new();

    loop {
        terminal.draw(|f| draw_ui(f, state, &ui))?;

        if !event::poll(Duration::from_millis(TICK_INTERVAL_MS))? {
            continue;
        }
        if let Event::Key(key_event) = event::read()? {
            match handle_market_input(key_event, &mut ui) {
                InputResult::Continue => {}
                InputResult::Act(action) => {
                    let outcome = apply_action(state, action, rng);
                    ui.record(&outcome);
                }
                InputResult::Quit => return Ok(()),
            }
        }
    }
}
