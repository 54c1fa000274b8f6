//! Tests for headless replay.

use strictly_history::{GameStatus, render_text, replay};
use strictly_history_core::Player;

#[test]
fn test_replay_reaches_win() {
    let game = replay(&[0, 1, 4, 3, 8], None, false);
    assert_eq!(game.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_replay_skips_rejected_requests() {
    // 4 twice, an index off the board, and a jump past the end
    let game = replay(&[4, 4, 12, 0], Some(7), false);
    assert_eq!(game.history().len(), 3);
    assert_eq!(game.current_step(), 2);
}

#[test]
fn test_replay_jump_and_flip() {
    let game = replay(&[0, 4, 1], Some(1), true);
    assert_eq!(game.current_step(), 1);
    assert!(game.display_reversed());
    assert_eq!(game.displayed_move_list()[0].step, 1);
}

#[test]
fn test_render_text() {
    let game = replay(&[0, 7], None, true);
    let text = render_text(&game);
    assert_eq!(
        text,
        "Next player: X\n\n\
         X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|O|9\n\n\
         * Go to move #2: O to (2,3)\n  \
         Go to move #1: X to (1,1)\n  \
         Go to start\n"
    );
}

#[test]
fn test_snapshot_json_has_status() {
    let game = replay(&[0, 1, 2, 3, 4, 6, 5, 8, 7], None, false);
    let json = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(json["status"], serde_json::json!("It's a Draw!"));
    assert_eq!(json["moves"].as_array().map(Vec::len), Some(10));
    assert_eq!(json["winning_line"], serde_json::Value::Null);
}
