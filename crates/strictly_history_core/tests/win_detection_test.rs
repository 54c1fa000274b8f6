//! Exhaustive checks of win detection over every 3x3 board.

use strictly_history_core::rules::LINES;
use strictly_history_core::{Board, Player, Position, Square, detect_win};

/// Decodes `code` as nine base-3 digits: 0 empty, 1 X, 2 O.
fn board_for(mut code: u32) -> Board {
    let mut board = Board::new();
    for pos in Position::ALL {
        let square = match code % 3 {
            1 => Square::Occupied(Player::X),
            2 => Square::Occupied(Player::O),
            _ => Square::Empty,
        };
        board.set(pos, square);
        code /= 3;
    }
    board
}

#[test]
fn test_reported_line_is_uniform_and_occupied() {
    for code in 0..3u32.pow(9) {
        let board = board_for(code);
        if let Some(line) = detect_win(&board) {
            let [a, b, c] = line.positions();
            assert_ne!(board.get(a), Square::Empty, "board {code}");
            assert_eq!(board.get(a), board.get(b), "board {code}");
            assert_eq!(board.get(b), board.get(c), "board {code}");
        }
    }
}

#[test]
fn test_reported_line_is_first_complete_line() {
    for code in 0..3u32.pow(9) {
        let board = board_for(code);
        let expected = LINES.into_iter().find(|[a, b, c]| {
            board.get(*a) != Square::Empty
                && board.get(*a) == board.get(*b)
                && board.get(*b) == board.get(*c)
        });
        assert_eq!(detect_win(&board).map(|l| l.positions()), expected, "board {code}");
    }
}

#[test]
fn test_detection_is_repeatable() {
    for code in (0..3u32.pow(9)).step_by(97) {
        let board = board_for(code);
        assert_eq!(detect_win(&board), detect_win(&board));
    }
}
