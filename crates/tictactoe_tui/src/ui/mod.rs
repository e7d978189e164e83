//! Stateless UI rendering for the game.

mod board;
mod dialog;

pub use board::{BOARD_HEIGHT, BOARD_WIDTH, glyph};
pub use dialog::dialog_text;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Paragraph, Wrap},
};

use crate::session::{Phase, Session};

/// Smallest terminal width the game can be drawn in.
pub const MIN_WIDTH: u16 = BOARD_WIDTH + 1;
/// Smallest terminal height the game can be drawn in.
pub const MIN_HEIGHT: u16 = BOARD_HEIGHT + 4;

const HELP: &str = "digits: place  arrows: move  esc: quit";

/// Renders the whole screen for the current session.
pub fn draw(frame: &mut Frame, session: &Session, show_labels: bool) {
    let area = frame.area();
    let background = Block::default().style(Style::default().fg(Color::White).bg(Color::Blue));
    frame.render_widget(background, area);

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let text = format!(
            "Terminal too small: need {}x{}, have {}x{}",
            MIN_WIDTH, MIN_HEIGHT, area.width, area.height
        );
        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    }

    let screen = center_rect(area, MIN_WIDTH, MIN_HEIGHT);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // Current player
            Constraint::Length(BOARD_HEIGHT), // Board
            Constraint::Length(1),            // Shadow
            Constraint::Length(1),            // Score
            Constraint::Length(1),            // Status
        ])
        .split(screen);

    let banner = Paragraph::new(format!("Current player: {}", session.engine().turn()))
        .style(Style::default().fg(Color::Red).bg(Color::White).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(banner, center_rect(chunks[0], 20, 1));

    let board_area = Rect::new(chunks[1].x, chunks[1].y, BOARD_WIDTH, BOARD_HEIGHT);
    board::render_board(frame, board_area, session, show_labels);

    let score = session.scoreboard();
    let score_line = format!(
        "X: {}   O: {}   Draws: {}",
        score.x_wins(),
        score.o_wins(),
        score.draws()
    );
    frame.render_widget(
        Paragraph::new(score_line).alignment(Alignment::Center),
        chunks[3],
    );

    let status = session.message().unwrap_or(HELP);
    frame.render_widget(
        Paragraph::new(status)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center),
        chunks[4],
    );

    if let Phase::RoundOver(status) = session.phase() {
        dialog::render_dialog(frame, board_area, status);
    }
}

/// Centers a `width` x `height` rectangle inside `area`.
pub(crate) fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
