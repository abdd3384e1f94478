//! End-to-end engine behavior on small positions

use pretty_assertions::assert_eq;

use gomoku::board::TOTAL_CELLS;
use gomoku::eval::evaluate;
use gomoku::rules::{has_five_at_pos, wins_through};
use gomoku::search::{candidates, find_immediate_block, find_immediate_win, Searcher, ThreatSearcher, INF};
use gomoku::{choose_move, AIEngine, Board, GameError, Pos, SearchType, Stone};

fn board_with(turn: Stone, stones: &[(u8, u8, Stone)]) -> Board {
    let mut board = Board::with_turn(turn);
    for &(r, c, s) in stones {
        board.place_stone(Pos::new(r, c), s);
    }
    board
}

#[test]
fn empty_board_opens_in_the_center() {
    let board = Board::new();
    assert_eq!(candidates(&board), vec![Pos::new(7, 7)]);
    assert_eq!(choose_move(&board), Some(Pos::new(7, 7)));
}

#[test]
fn open_four_is_completed() {
    let board = board_with(
        Stone::Black,
        &[
            (7, 5, Stone::Black),
            (7, 6, Stone::Black),
            (7, 7, Stone::Black),
            (7, 8, Stone::Black),
            (6, 6, Stone::White),
            (8, 8, Stone::White),
        ],
    );
    // Both (7, 4) and (7, 9) win; row-major order reaches (7, 4) first
    assert_eq!(choose_move(&board), Some(Pos::new(7, 4)));
}

#[test]
fn immediate_win_really_wins() {
    let mut board = board_with(
        Stone::White,
        &[
            (2, 2, Stone::White),
            (3, 3, Stone::White),
            (4, 4, Stone::White),
            (5, 5, Stone::White),
            (1, 1, Stone::Black),
        ],
    );
    let pos = find_immediate_win(&board).unwrap();
    assert_eq!(pos, Pos::new(6, 6));
    board.play(pos);
    assert!(wins_through(&board, pos));
}

#[test]
fn single_opponent_threat_is_blocked() {
    let board = board_with(
        Stone::Black,
        &[
            (3, 10, Stone::White),
            (4, 10, Stone::White),
            (5, 10, Stone::White),
            (6, 10, Stone::White),
            (2, 10, Stone::Black),
            (7, 3, Stone::Black),
        ],
    );
    assert_eq!(find_immediate_win(&board), None);
    assert_eq!(find_immediate_block(&board), Some(Pos::new(7, 10)));

    let result = AIEngine::new().get_move_with_stats(&board, Stone::Black);
    assert_eq!(result.best_move, Some(Pos::new(7, 10)));
    assert_eq!(result.search_type, SearchType::Block);
}

#[test]
fn open_three_is_beyond_the_block_horizon() {
    let board = board_with(
        Stone::Black,
        &[
            (7, 6, Stone::White),
            (7, 7, Stone::White),
            (7, 8, Stone::White),
            (8, 7, Stone::Black),
            (6, 7, Stone::Black),
        ],
    );
    assert_eq!(find_immediate_win(&board), None);
    assert_eq!(find_immediate_block(&board), None);

    // Negamax caps the three on its left end
    assert_eq!(choose_move(&board), Some(Pos::new(7, 5)));
}

#[test]
fn threat_space_finds_forced_win() {
    let board = board_with(
        Stone::Black,
        &[
            (4, 7, Stone::Black),
            (5, 7, Stone::Black),
            (6, 7, Stone::Black),
            (2, 8, Stone::Black),
            (2, 9, Stone::Black),
            (8, 8, Stone::Black),
            (8, 9, Stone::Black),
            (12, 0, Stone::White),
            (12, 2, Stone::White),
            (12, 4, Stone::White),
            (0, 14, Stone::White),
            (14, 14, Stone::White),
            (14, 10, Stone::White),
            (10, 14, Stone::White),
        ],
    );
    assert_eq!(find_immediate_win(&board), None);
    assert_eq!(find_immediate_block(&board), None);

    let result = AIEngine::new().get_move_with_stats(&board, Stone::Black);
    assert_eq!(result.search_type, SearchType::ThreatSpace);
    assert_eq!(result.best_move, Some(Pos::new(1, 9)));
}

#[test]
fn depth_zero_negamax_is_static_eval() {
    let mut board = board_with(
        Stone::White,
        &[
            (7, 7, Stone::Black),
            (7, 8, Stone::Black),
            (8, 7, Stone::White),
        ],
    );
    let expected = evaluate(&board);
    assert_eq!(Searcher::new().negamax(&mut board, 0, -INF, INF), expected);
}

#[test]
fn zero_threat_horizon_never_wins() {
    let mut board = board_with(
        Stone::Black,
        &[
            (7, 4, Stone::Black),
            (7, 5, Stone::Black),
            (7, 6, Stone::Black),
            (7, 7, Stone::Black),
        ],
    );
    assert!(!ThreatSearcher::new().can_force_win(&mut board, 0));
    assert!(!ThreatSearcher::new().can_force_win(&mut Board::new(), 0));
}

#[test]
fn play_undo_round_trip() {
    let before = board_with(
        Stone::White,
        &[(0, 0, Stone::Black), (14, 14, Stone::White), (7, 7, Stone::Black)],
    );
    let mut board = before.clone();
    for pos in candidates(&before) {
        board.play(pos);
        board.undo(pos);
        assert_eq!(board, before);
    }
}

#[test]
fn win_detection_is_color_symmetric() {
    let line = [(4, 9), (5, 8), (6, 7), (7, 6), (8, 5)];
    for (color, other) in [(Stone::Black, Stone::White), (Stone::White, Stone::Black)] {
        let mut board = Board::new();
        for &(r, c) in &line {
            board.place_stone(Pos::new(r, c), color);
        }
        board.place_stone(Pos::new(9, 4), other);
        for &(r, c) in &line {
            assert!(wins_through(&board, Pos::new(r, c)));
        }
        assert!(!wins_through(&board, Pos::new(9, 4)));
        assert!(!has_five_at_pos(&board, Pos::new(9, 4), other));
    }
}

#[test]
fn decide_reports_boundary_errors() {
    let mut engine = AIEngine::new();
    assert_eq!(engine.decide(&Board::new(), Stone::Empty), Err(GameError::NoSideToMove));

    let mut full = Board::new();
    for idx in 0..TOTAL_CELLS {
        full.play(Pos::from_index(idx));
    }
    assert_eq!(engine.decide(&full, Stone::Black), Err(GameError::BoardFull));
    assert_eq!(choose_move(&full), None);
}

#[test]
fn rows_round_trip_through_the_engine() {
    let mut rows = [[0i8; 15]; 15];
    rows[7][7] = 1;
    rows[7][8] = -1;
    let board = Board::from_rows(&rows, Stone::Black).unwrap();
    assert_eq!(board.to_rows(), rows);

    let pos = choose_move(&board).unwrap();
    assert!(board.is_empty(pos));
    // Chebyshev distance two from some stone
    let near = |r: u8, c: u8| pos.row.abs_diff(r) <= 2 && pos.col.abs_diff(c) <= 2;
    assert!(near(7, 7) || near(7, 8));
}
