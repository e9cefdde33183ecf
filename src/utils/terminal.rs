//! Raw-mode terminal setup and teardown for the game screen.

use crossterm::cursor::Show;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};

pub type GameTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Enters raw mode and the alternate screen.
/// On failure the caller still has to run [`restore_terminal`].
pub fn setup_terminal() -> io::Result<GameTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Leaves raw mode, the alternate screen and shows the cursor. Every step
/// runs even if an earlier one failed; the first error is returned.
pub fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = io::stdout().execute(LeaveAlternateScreen).map(|_| ());
    let cursor = io::stdout().execute(Show).map(|_| ());
    first_error([raw, screen, cursor])
}

/// Returns the first error of already-executed steps, or `Ok`.
pub fn first_error<const N: usize>(steps: [io::Result<()>; N]) -> io::Result<()> {
    steps.into_iter().collect()
}
