//! Game state machine integration tests.

use rust_ttt::core::{Board, Cell, GameConfig, Mark, Mode, WinLine};
use rust_ttt::game::{GameState, IllegalMove, MoveRequest, Status, Transition};
use rust_ttt::policy::{DifficultyLevel, DifficultyPolicy, MovePolicy};
use rust_ttt::rules::{is_full, winning_line};

fn play_all(state: &mut GameState, moves: &[usize]) {
    for &index in moves {
        state.play(index).unwrap();
    }
}

// =============================================================================
// End-to-End Scenarios
// =============================================================================

#[test]
fn test_opening_moves_alternate() {
    let mut state = GameState::new(Mark::First);

    for (index, mark) in [
        (4, Mark::First),
        (0, Mark::Second),
        (8, Mark::First),
        (2, Mark::Second),
    ] {
        assert_eq!(state.to_move(), mark);
        let transition = state.apply_move(MoveRequest::new(index, mark)).unwrap();
        assert_eq!(
            transition,
            Transition::StillRunning {
                next: mark.opponent()
            }
        );
        assert_eq!(state.status(), Status::Running);
    }

    assert_eq!(state.to_move(), Mark::First);
    assert_eq!(state.board().empty_count(), 5);
    assert_eq!(winning_line(Mark::First, state.board()), None);
    assert_eq!(winning_line(Mark::Second, state.board()), None);
}

#[test]
fn test_top_row_win() {
    let board: Board = "XXX OO. ...".parse().unwrap();
    assert_eq!(winning_line(Mark::First, &board), Some(WinLine::from_cells([0, 1, 2]).unwrap()));

    let mut state = GameState::new(Mark::First);
    play_all(&mut state, &[0, 3, 1, 4]);
    let transition = state.play(2).unwrap();

    let expected_line = WinLine::from_cells([0, 1, 2]).unwrap();
    assert_eq!(
        transition,
        Transition::Won {
            mark: Mark::First,
            line: expected_line
        }
    );
    assert_eq!(
        state.status(),
        Status::Won {
            mark: Mark::First,
            line: expected_line
        }
    );
    assert_eq!(state.board(), &board);
}

#[test]
fn test_last_cell_without_line_draws() {
    let full: Board = "XOX XXO OXO".parse().unwrap();
    assert_eq!(winning_line(Mark::First, &full), None);
    assert_eq!(winning_line(Mark::Second, &full), None);
    assert!(is_full(&full));

    let mut state = GameState::new(Mark::First);
    play_all(&mut state, &[0, 1, 2, 5, 3, 6, 4, 8]);
    assert!(state.is_running());

    assert_eq!(state.play(7), Ok(Transition::Drawn));
    assert_eq!(state.status(), Status::Drawn);
    assert_eq!(state.board(), &full);
    assert!(state.legal_moves().is_empty());
}

// =============================================================================
// Rejected Moves
// =============================================================================

#[test]
fn test_double_submission_is_rejected_once() {
    let mut state = GameState::new(Mark::First);
    let request = MoveRequest::new(4, Mark::First);

    assert!(state.apply_move(request).is_ok());
    let snapshot = state.clone();

    assert_eq!(
        state.apply_move(request),
        Err(IllegalMove::NotYourTurn {
            expected: Mark::Second,
            attempted: Mark::First
        })
    );
    assert_eq!(state, snapshot);
}

#[test]
fn test_occupied_cell_for_side_to_move() {
    let mut state = GameState::new(Mark::First);
    state.play(4).unwrap();
    let snapshot = state.clone();

    assert_eq!(
        state.play(4),
        Err(IllegalMove::Occupied {
            index: 4,
            owner: Mark::First
        })
    );
    assert_eq!(state, snapshot);
}

#[test]
fn test_out_of_range_index() {
    let mut state = GameState::new(Mark::First);
    assert_eq!(state.play(9), Err(IllegalMove::OutOfRange { index: 9 }));
    assert_eq!(state.ply(), 0);
}

#[test]
fn test_moves_after_win_are_rejected() {
    let mut state = GameState::new(Mark::First);
    play_all(&mut state, &[0, 3, 1, 4, 2]);
    let snapshot = state.clone();

    for index in [5, 6, 7, 8, 42] {
        for mark in Mark::ALL {
            assert_eq!(
                state.apply_move(MoveRequest::new(index, mark)),
                Err(IllegalMove::GameOver)
            );
        }
    }
    assert_eq!(state, snapshot);
}

// =============================================================================
// Roles, Reset, Configuration
// =============================================================================

#[test]
fn test_human_as_second_mark_moves_first() {
    let mut state = GameState::new(Mark::Second);
    assert_eq!(state.to_move(), Mark::Second);
    assert_eq!(state.computer_mark(), Mark::First);
    assert!(!state.is_computer_turn());

    state.play(0).unwrap();
    assert!(state.is_computer_turn());
    assert_eq!(state.board().get(0), Cell::Taken(Mark::Second));
}

#[test]
fn test_role_swap_mid_game_resets() {
    let mut state = GameState::new(Mark::First);
    play_all(&mut state, &[4, 0, 8]);

    state.set_human_mark(Mark::Second);

    assert_eq!(state.human_mark(), Mark::Second);
    assert_eq!(state.to_move(), Mark::Second);
    assert_eq!(state.board(), &Board::new());
    assert!(state.history().is_empty());
    assert_eq!(state.status(), Status::Running);
}

#[test]
fn test_reset_keeps_configuration() {
    let config = GameConfig::new()
        .with_human_mark(Mark::Second)
        .with_mode(Mode::HumanVsHuman);
    let mut state = GameState::from_config(&config);
    play_all(&mut state, &[0, 1, 2]);

    state.reset();

    assert_eq!(state, GameState::from_config(&config));
    assert!(!state.is_computer_turn());
}

#[test]
fn test_history_tracks_plies() {
    let mut state = GameState::new(Mark::First);
    play_all(&mut state, &[4, 0, 8]);

    let plies: Vec<_> = state.history().iter().map(|r| (r.index, r.mark, r.ply)).collect();
    assert_eq!(
        plies,
        vec![
            (4, Mark::First, 1),
            (0, Mark::Second, 2),
            (8, Mark::First, 3)
        ]
    );
}

#[test]
fn test_independent_games() {
    let mut a = GameState::new(Mark::First);
    let b = a.clone();

    a.play(4).unwrap();

    assert_eq!(a.ply(), 1);
    assert_eq!(b.ply(), 0);
    assert_eq!(b.board(), &Board::new());
}

// =============================================================================
// Human vs Computer Loop
// =============================================================================

#[test]
fn test_controller_loop_finishes() {
    let config = GameConfig::new()
        .with_human_mark(Mark::First)
        .with_difficulty(DifficultyLevel::Hard)
        .with_seed(3);
    let mut state = GameState::from_config(&config);
    let mut computer = DifficultyPolicy::from_config(&config);

    while state.is_running() {
        let index = if state.is_computer_turn() {
            computer
                .choose_move(state.board(), state.computer_mark())
                .unwrap()
        } else {
            // Human always takes the lowest free cell.
            state.legal_moves()[0]
        };
        state.play(index).unwrap();
    }

    assert!(state.status().is_terminal());
    assert!(state.ply() >= 5);
}
