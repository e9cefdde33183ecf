use crate::core::game_state::GameState;
use crate::input::MarketUiState;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws cash, location and net worth.
pub fn draw_status(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(" Status ");

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(vec![
            Span::styled("Cash: ", label),
            Span::styled(
                format!("${}", game_state.cash),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled("Location: ", label),
            Span::styled(
                game_state.location.name(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::styled("Net worth: ", label),
            Span::styled(
                format!("${}", game_state.net_worth()),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(vec![
            Span::styled("Units held: ", label),
            Span::raw(game_state.total_units().to_string()),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Draws the trade log, newest first.
pub fn draw_trade_log(frame: &mut Frame, area: Rect, ui: &MarketUiState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta))
        .title(" Trades ");

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let max_entries = inner.height as usize;
    let mut lines: Vec<Line> = Vec::new();

    if ui.log.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No trades yet",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for entry in ui.log.iter().rev().take(max_entries) {
        let color = if entry.succeeded {
            Color::White
        } else {
            Color::Red
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", entry.timestamp),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(entry.message.as_str(), Style::default().fg(color)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Draws the key bindings footer.
pub fn draw_footer(frame: &mut Frame, area: Rect) {
    let key = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let footer_text = vec![Line::from(vec![
        Span::styled("↑/↓", key),
        Span::raw(" Select | "),
        Span::styled("1-5", key),
        Span::raw(" Jump | "),
        Span::styled("B", key),
        Span::raw(" Buy | "),
        Span::styled("S", key),
        Span::raw(" Sell | "),
        Span::styled("T", key),
        Span::raw(" Travel | "),
        Span::styled(
            "Q",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Quit"),
    ])];

    let footer = Paragraph::new(footer_text)
        .block(Block::default().borders(Borders::ALL).title("Help"))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
