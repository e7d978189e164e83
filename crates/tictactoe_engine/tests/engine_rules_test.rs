//! Tests for the engine's move, win, draw and turn rules.

use strum::IntoEnumIterator;
use tictactoe_engine::{Cell, CellSet, GameEngine, GameStatus, LINES, PlaceError, Player};

/// Plays `moves` alternately starting with X, stopping at the first
/// terminal status.
fn play(moves: &[usize]) -> GameEngine {
    let mut engine = GameEngine::new();
    for &index in moves {
        assert!(engine.place(index), "move {index} rejected");
        if engine.evaluate().is_over() {
            break;
        }
        engine.end_turn();
    }
    engine
}

#[test]
fn test_each_cell_accepts_exactly_one_mark() {
    for cell in Cell::iter() {
        let mut engine = GameEngine::new();
        assert!(engine.place(cell.index()));
        assert!(!engine.place(cell.index()));
        engine.end_turn();
        assert!(!engine.place(cell.index()), "opponent overwrote {cell}");
    }
}

#[test]
fn test_out_of_range_rejected_without_mutation() {
    let mut engine = GameEngine::new();
    engine.place(4);
    let before = engine.clone();

    for index in [9, 10, 16, 255, usize::MAX] {
        assert!(!engine.place(index));
        assert_eq!(engine.try_place(index), Err(PlaceError::InvalidCell(index)));
    }
    assert_eq!(engine, before);
}

#[test]
fn test_reset_restores_initial_state() {
    let mut engine = play(&[4, 0, 8, 2]);
    engine.reset();
    assert_eq!(engine, GameEngine::new());
    assert!(engine.occupied().is_empty());
    assert_eq!(engine.turn(), Player::X);
    assert!(!engine.is_won());
    assert!(!engine.is_draw());
}

#[test]
fn test_top_row_win_freezes_board() {
    let mut engine = GameEngine::new();
    for index in [0, 1] {
        assert!(engine.place(index));
        assert!(!engine.check_win());
    }
    assert!(engine.place(2));
    assert!(engine.check_win());
    assert!(engine.is_won());

    for cell in Cell::iter() {
        assert!(!engine.place(cell.index()));
    }
    engine.end_turn();
    assert!(!engine.place(8));
}

#[test]
fn test_diagonal_wins() {
    for diagonal in [[0, 4, 8], [2, 4, 6]] {
        let mut engine = GameEngine::new();
        for index in diagonal {
            engine.place(index);
        }
        assert!(engine.check_win(), "diagonal {diagonal:?} not detected");
    }
}

#[test]
fn test_every_line_wins_for_both_players() {
    for player in Player::iter() {
        for line in LINES {
            let mut engine = GameEngine::new();
            if player == Player::O {
                engine.end_turn();
            }
            for cell in line.cells() {
                engine.place_cell(cell).unwrap();
            }
            assert_eq!(engine.evaluate(), GameStatus::Won(player));
            assert_eq!(engine.winning_line(), Some(line));
        }
    }
}

#[test]
fn test_check_win_without_pieces_is_false() {
    let mut engine = GameEngine::new();
    assert!(!engine.check_win());
    engine.end_turn();
    assert!(!engine.check_win());
    assert_eq!(engine.status(), GameStatus::InProgress);
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / X O O / O X X
    let engine = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(engine.occupied(), CellSet::FULL);
    assert_eq!(engine.status(), GameStatus::Draw);
    assert!(!engine.is_won());
    assert!(engine.is_draw());
    assert_eq!(engine.winning_line(), None);
}

#[test]
fn test_draw_check_on_partial_board_is_false() {
    let mut engine = play(&[0, 1, 2]);
    assert!(!engine.check_draw());
    assert_eq!(engine.status(), GameStatus::InProgress);
}

#[test]
fn test_last_move_winning_and_filling_is_a_win() {
    // X completes the left column with the ninth mark.
    let mut engine = GameEngine::new();
    for index in [0, 1, 2, 4, 3, 5, 7, 8] {
        assert!(engine.place(index));
        assert_eq!(engine.evaluate(), GameStatus::InProgress);
        engine.end_turn();
    }
    assert!(engine.place(6));
    assert_eq!(engine.occupied(), CellSet::FULL);

    // The draw check defers to the unchecked line.
    assert!(!engine.check_draw());
    assert!(engine.check_win());
    assert!(!engine.check_draw());
    assert_eq!(engine.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_evaluate_prefers_win_over_draw() {
    let engine = play(&[0, 1, 2, 4, 3, 5, 7, 8, 6]);
    assert_eq!(engine.status(), GameStatus::Won(Player::X));
    assert!(!engine.is_draw());
}

#[test]
fn test_turn_alternation_ignores_placements() {
    let mut engine = GameEngine::new();
    assert_eq!(engine.turn(), Player::X);
    engine.end_turn();
    assert_eq!(engine.turn(), Player::O);
    engine.place(0);
    engine.place(1);
    engine.place(2);
    engine.end_turn();
    assert_eq!(engine.turn(), Player::X);
}

#[test]
fn test_occupied_cell_reports_owner() {
    let mut engine = play(&[4]);
    assert_eq!(engine.turn(), Player::O);
    assert_eq!(
        engine.try_place(4),
        Err(PlaceError::CellOccupied(Cell::Center))
    );
    assert_eq!(engine.owner(Cell::Center), Some(Player::X));
}
