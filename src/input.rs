//! Input handling for the market screen.
//!
//! Key presses are decoded into typed [`Action`]s here, so nothing past this
//! point ever sees raw keys or strings.

use crate::core::constants::TRADE_LOG_CAPACITY;
use crate::market::{Action, ActionOutcome, Commodity};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::VecDeque;

/// A line in the trade log panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: String,
    pub message: String,
    /// False for trades that were refused (no cash, no stock).
    pub succeeded: bool,
}

/// Transient state of the market screen: highlighted row and recent messages.
pub struct MarketUiState {
    pub selected: Commodity,
    pub log: VecDeque<LogEntry>,
}

impl MarketUiState {
    pub fn new() -> Self {
        Self {
            selected: Commodity::Weed,
            log: VecDeque::with_capacity(TRADE_LOG_CAPACITY),
        }
    }

    pub fn select_next(&mut self) {
        self.selected = self.selected.next();
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.previous();
    }

    /// Records an outcome, dropping the oldest entry once the log is full.
    pub fn record(&mut self, outcome: &ActionOutcome) {
        if self.log.len() == TRADE_LOG_CAPACITY {
            self.log.pop_front();
        }
        self.log.push_back(LogEntry {
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
            message: outcome.message(),
            succeeded: outcome.changed_state(),
        });
    }
}

impl Default for MarketUiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of handling a market screen key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Nothing for the core to do (selection moved, key ignored).
    Continue,
    /// Apply this action to the game state.
    Act(Action),
    /// Leave the game.
    Quit,
}

/// Decodes one key press against the current selection.
pub fn handle_market_input(key: KeyEvent, ui: &mut MarketUiState) -> InputResult {
    // Windows terminals also report releases
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputResult::Quit;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            ui.select_previous();
            InputResult::Continue
        }
        KeyCode::Down | KeyCode::Char('j') => {
            ui.select_next();
            InputResult::Continue
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            if let Some(commodity) = Commodity::from_index(index) {
                ui.selected = commodity;
            }
            InputResult::Continue
        }
        KeyCode::Char('b') | KeyCode::Char('B') | KeyCode::Enter => {
            InputResult::Act(Action::Buy(ui.selected))
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            InputResult::Act(Action::Sell(ui.selected))
        }
        KeyCode::Char('t') | KeyCode::Char('T') => InputResult::Act(Action::Travel),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputResult::Quit,
        _ => InputResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::{Location, Trade};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_wraps() {
        let mut ui = MarketUiState::new();
        assert_eq!(ui.selected, Commodity::Weed);

        handle_market_input(press(KeyCode::Up), &mut ui);
        assert_eq!(ui.selected, Commodity::Meth);

        handle_market_input(press(KeyCode::Down), &mut ui);
        assert_eq!(ui.selected, Commodity::Weed);

        handle_market_input(press(KeyCode::Char('j')), &mut ui);
        assert_eq!(ui.selected, Commodity::Cocaine);
    }

    #[test]
    fn test_number_keys_select_rows() {
        let mut ui = MarketUiState::new();

        assert_eq!(
            handle_market_input(press(KeyCode::Char('4')), &mut ui),
            InputResult::Continue
        );
        assert_eq!(ui.selected, Commodity::Ecstasy);

        // Out of range keeps the selection
        handle_market_input(press(KeyCode::Char('9')), &mut ui);
        assert_eq!(ui.selected, Commodity::Ecstasy);
    }

    #[test]
    fn test_trade_keys_use_selection() {
        let mut ui = MarketUiState::new();
        ui.selected = Commodity::Heroin;

        assert_eq!(
            handle_market_input(press(KeyCode::Char('b')), &mut ui),
            InputResult::Act(Action::Buy(Commodity::Heroin))
        );
        assert_eq!(
            handle_market_input(press(KeyCode::Enter), &mut ui),
            InputResult::Act(Action::Buy(Commodity::Heroin))
        );
        assert_eq!(
            handle_market_input(press(KeyCode::Char('s')), &mut ui),
            InputResult::Act(Action::Sell(Commodity::Heroin))
        );
        assert_eq!(
            handle_market_input(press(KeyCode::Char('t')), &mut ui),
            InputResult::Act(Action::Travel)
        );
    }

    #[test]
    fn test_quit_keys() {
        let mut ui = MarketUiState::new();
        assert_eq!(
            handle_market_input(press(KeyCode::Char('q')), &mut ui),
            InputResult::Quit
        );
        assert_eq!(
            handle_market_input(press(KeyCode::Esc), &mut ui),
            InputResult::Quit
        );
        assert_eq!(
            handle_market_input(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &mut ui
            ),
            InputResult::Quit
        );
    }

    #[test]
    fn test_unknown_key_ignored() {
        let mut ui = MarketUiState::new();
        assert_eq!(
            handle_market_input(press(KeyCode::Char('x')), &mut ui),
            InputResult::Continue
        );
        assert_eq!(ui.selected, Commodity::Weed);
    }

    #[test]
    fn test_log_is_bounded() {
        let mut ui = MarketUiState::new();
        let outcome = ActionOutcome::Traveled {
            from: Location::NewYork,
            to: Location::Miami,
        };
        for _ in 0..TRADE_LOG_CAPACITY + 10 {
            ui.record(&outcome);
        }
        assert_eq!(ui.log.len(), TRADE_LOG_CAPACITY);
    }

    #[test]
    fn test_log_marks_refused_trades() {
        let mut ui = MarketUiState::new();
        ui.record(&ActionOutcome::Bought(Trade {
            commodity: Commodity::Weed,
            price: 100,
        }));
        ui.record(&ActionOutcome::NothingToSell(Commodity::Meth));

        assert!(ui.log[0].succeeded);
        assert!(!ui.log[1].succeeded);
        assert_eq!(ui.log[1].message, "You have no Meth to sell");
    }
}
