//! End-of-round dialog.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};
use tictactoe_engine::GameStatus;

/// Dialog width, borders included.
pub const DIALOG_WIDTH: u16 = 24;
/// Dialog height, borders included.
pub const DIALOG_HEIGHT: u16 = 6;

/// Title and message shown for a finished round.
pub fn dialog_text(status: GameStatus) -> (&'static str, String) {
    match status {
        GameStatus::Won(player) => (" Winner!!! ", format!("Player {} wins!", player)),
        GameStatus::Draw => (" Draw!!! ", "It's a draw :(".to_string()),
        GameStatus::InProgress => (" TicTacToe ", "Round in progress".to_string()),
    }
}

/// Renders the rematch prompt centered in `area`.
pub fn render_dialog(frame: &mut Frame, area: Rect, status: GameStatus) {
    let popup = super::center_rect(area, DIALOG_WIDTH, DIALOG_HEIGHT);
    let (title, message) = dialog_text(status);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(title).centered())
        .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(Color::Blue).bg(Color::White));

    let text = vec![
        Line::from(message),
        Line::from(""),
        Line::from("continue? (y/n)"),
    ];
    let paragraph = Paragraph::new(text)
        .block(block)
        .style(Style::default().fg(Color::Black).bg(Color::White))
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}
