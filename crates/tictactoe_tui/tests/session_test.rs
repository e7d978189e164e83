//! Tests for full rounds driven through key presses.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictactoe_engine::{Cell, GameStatus, Player};
use tictactoe_tui::{Flow, KeyLayout, Phase, Session, intent_from_key};

/// Presses each key in turn, returning the flow after the last one.
fn press_keys(session: &mut Session, keys: &str) -> Flow {
    let mut flow = Flow::Continue;
    for c in keys.chars() {
        let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
        if let Some(intent) = intent_from_key(key, session.layout()) {
            flow = session.handle(intent);
        }
    }
    flow
}

#[test]
fn test_descending_keys_win_top_row() {
    let mut session = Session::new(KeyLayout::Descending);
    // X: 8 7 6 (top row), O: 5 4
    press_keys(&mut session, "85746");

    assert_eq!(session.phase(), Phase::RoundOver(GameStatus::Won(Player::X)));
    assert_eq!(*session.scoreboard().x_wins(), 1);
    for cell in [Cell::TopLeft, Cell::TopCenter, Cell::TopRight] {
        assert_eq!(session.engine().owner(cell), Some(Player::X));
    }
}

#[test]
fn test_moves_ignored_after_round_over() {
    let mut session = Session::new(KeyLayout::Ascending);
    press_keys(&mut session, "03142");
    let board = session.engine().occupied();

    press_keys(&mut session, "8");
    assert_eq!(session.engine().occupied(), board);
    assert_eq!(session.phase(), Phase::RoundOver(GameStatus::Won(Player::X)));
}

#[test]
fn test_confirm_starts_new_round() {
    let mut session = Session::new(KeyLayout::Ascending);
    press_keys(&mut session, "03142");
    assert_eq!(press_keys(&mut session, "y"), Flow::Continue);

    assert_eq!(session.phase(), Phase::Playing);
    assert!(session.engine().occupied().is_empty());
    assert_eq!(session.engine().turn(), Player::X);
    assert_eq!(session.cursor(), Cell::Center);
    assert_eq!(session.scoreboard().rounds(), 1);
}

#[test]
fn test_decline_exits() {
    let mut session = Session::new(KeyLayout::Ascending);
    press_keys(&mut session, "03142");
    assert_eq!(press_keys(&mut session, "n"), Flow::Exit);
}

#[test]
fn test_draw_round() {
    let mut session = Session::new(KeyLayout::Ascending);
    // X O X / X O O / O X X
    press_keys(&mut session, "012435768");

    assert_eq!(session.phase(), Phase::RoundOver(GameStatus::Draw));
    assert_eq!(*session.scoreboard().draws(), 1);
    assert!(!session.engine().is_won());
}

#[test]
fn test_o_wins_and_scores() {
    let mut session = Session::new(KeyLayout::Ascending);
    // X: 0 1 8, O: 3 4 5 (middle row)
    press_keys(&mut session, "031485");

    assert_eq!(session.phase(), Phase::RoundOver(GameStatus::Won(Player::O)));
    assert_eq!(*session.scoreboard().o_wins(), 1);
    assert_eq!(*session.scoreboard().x_wins(), 0);
}

#[test]
fn test_scores_accumulate_over_rounds() {
    let mut session = Session::new(KeyLayout::Ascending);
    press_keys(&mut session, "03142y");
    press_keys(&mut session, "012435768y");
    press_keys(&mut session, "031485");

    let score = session.scoreboard();
    assert_eq!((*score.x_wins(), *score.o_wins(), *score.draws()), (1, 1, 1));
}

#[test]
fn test_occupied_cell_message() {
    let mut session = Session::new(KeyLayout::Ascending);
    press_keys(&mut session, "44");
    assert_eq!(session.message(), Some("Center is already occupied"));
    assert_eq!(session.engine().turn(), Player::O);
}

#[test]
fn test_escape_quits() {
    let mut session = Session::new(KeyLayout::default());
    let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
    let intent = intent_from_key(key, session.layout()).unwrap();
    assert_eq!(session.handle(intent), Flow::Exit);
}
