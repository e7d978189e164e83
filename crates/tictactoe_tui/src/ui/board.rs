//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{Cell, Player};

use crate::session::{Phase, Session};

/// Board panel width, borders included.
pub const BOARD_WIDTH: u16 = 40;
/// Board panel height, borders included.
pub const BOARD_HEIGHT: u16 = 19;

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 5;

const CROSS: [&str; 5] = [
    "XX      XX",
    "  XX  XX  ",
    "    XX    ",
    "  XX  XX  ",
    "XX      XX",
];

const RING: [&str; 5] = [
    "   OOOO   ",
    " OO    OO ",
    "OO      OO",
    " OO    OO ",
    "   OOOO   ",
];

/// Glyph drawn for a player's mark.
pub fn glyph(player: Player) -> &'static [&'static str; 5] {
    match player {
        Player::X => &CROSS,
        Player::O => &RING,
    }
}

/// Renders the bordered board panel with its drop shadow.
pub fn render_board(frame: &mut Frame, area: Rect, session: &Session, show_labels: bool) {
    render_shadow(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(" TicTacToe ").centered())
        .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(Color::Blue).bg(Color::White));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(inner);

    render_row(frame, rows[0], session, 0, show_labels);
    render_separator(frame, rows[1]);
    render_row(frame, rows[2], session, 1, show_labels);
    render_separator(frame, rows[3]);
    render_row(frame, rows[4], session, 2, show_labels);
}

fn render_row(frame: &mut Frame, area: Rect, session: &Session, row: usize, show_labels: bool) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    for (column, rect) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(cell) = Cell::from_row_column(row, column) {
            render_cell(frame, rect, session, cell, show_labels);
        }
    }
    render_vertical_sep(frame, cols[1]);
    render_vertical_sep(frame, cols[3]);
}

fn render_cell(frame: &mut Frame, area: Rect, session: &Session, cell: Cell, show_labels: bool) {
    let engine = session.engine();
    let on_winning_line = engine
        .winning_line()
        .is_some_and(|line| line.mask().contains(cell));
    let under_cursor = session.phase() == Phase::Playing && session.cursor() == cell;

    let background = if on_winning_line {
        Color::Yellow
    } else if under_cursor {
        Color::Gray
    } else {
        Color::White
    };

    let lines: Vec<Line> = match engine.owner(cell) {
        Some(player) => glyph(player).iter().map(|row| Line::from(*row)).collect(),
        None => Vec::new(),
    };
    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(Color::Black).bg(background))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);

    if show_labels && area.width > 0 && area.height > 0 {
        let corner = Rect::new(area.right() - 1, area.bottom() - 1, 1, 1);
        let label = Paragraph::new(session.layout().label(cell).to_string())
            .style(Style::default().fg(Color::Red).bg(background));
        frame.render_widget(label, corner);
    }
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let segment = "─".repeat(CELL_WIDTH as usize);
    let text = format!("{segment}┼{segment}┼{segment}");
    let sep = Paragraph::new(text).style(Style::default().fg(Color::Blue));
    frame.render_widget(sep, area);
}

fn render_vertical_sep(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from("│")).collect();
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::Blue));
    frame.render_widget(sep, area);
}

fn render_shadow(frame: &mut Frame, area: Rect) {
    let shadow = Block::default().style(Style::default().bg(Color::Black));
    let buffer_area = frame.area();

    let bottom = Rect::new(area.x + 1, area.bottom(), area.width, 1).intersection(buffer_area);
    let right = Rect::new(area.right(), area.y + 1, 1, area.height).intersection(buffer_area);
    frame.render_widget(shadow.clone(), bottom);
    frame.render_widget(shadow, right);
}
