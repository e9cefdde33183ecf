use crate::core::game_state::GameState;
use crate::market::Commodity;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

/// Draws the Drug / Price / Owned table with the selected row highlighted.
pub fn draw_market_table(
    frame: &mut Frame,
    area: Rect,
    game_state: &GameState,
    selected: Commodity,
) {
    let header_cells = ["#", "Drug", "Price", "Owned"]
        .map(|h| Cell::from(h).style(Style::default().add_modifier(Modifier::BOLD)));
    let header = Row::new(header_cells)
        .style(Style::default().fg(Color::Yellow))
        .height(1);

    let rows = Commodity::all().into_iter().map(|commodity| {
        let price = game_state.price(commodity);
        let owned = game_state.owned(commodity);
        let affordable = game_state.cash >= price as u64;

        let price_style = if affordable {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let owned_style = if owned > 0 {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let row = Row::new(vec![
            Cell::from(format!("{}", commodity.index() + 1)),
            Cell::from(commodity.name()),
            Cell::from(format!("${:>5}", price)).style(price_style),
            Cell::from(format!("{:>5}", owned)).style(owned_style),
        ]);

        if commodity == selected {
            row.style(Style::default().add_modifier(Modifier::REVERSED))
        } else {
            row
        }
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(3), // Hotkey
            Constraint::Min(10),   // Drug name
            Constraint::Length(8), // Price
            Constraint::Length(7), // Owned
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Inventory & Market "),
    );

    frame.render_widget(table, area);
}
