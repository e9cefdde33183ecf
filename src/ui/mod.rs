mod market_table;
mod status_panel;

use crate::core::game_state::GameState;
use crate::input::MarketUiState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

pub const TITLE: &str = "TextWars - A Dopewars Clone";

/// Draws the whole market screen.
pub fn draw_ui(frame: &mut Frame, game_state: &GameState, ui: &MarketUiState) {
    let size = frame.size();

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(0),    // Market + side panels
            Constraint::Length(3), // Footer
        ])
        .split(size);

    let title = Paragraph::new(TITLE)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(title, v_chunks[0]);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Market table
            Constraint::Percentage(45), // Status + trades
        ])
        .split(v_chunks[1]);

    market_table::draw_market_table(frame, chunks[0], game_state, ui.selected);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Status
            Constraint::Min(3),    // Trade log
        ])
        .split(chunks[1]);

    status_panel::draw_status(frame, right[0], game_state);
    status_panel::draw_trade_log(frame, right[1], ui);
    status_panel::draw_footer(frame, v_chunks[2]);
}
