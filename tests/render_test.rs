//! Tests for terminal rendering.

use ratatui::{Terminal, backend::TestBackend};
use strictly_history::{App, Config, draw};

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_fresh_game_screen() {
    let app = App::new(&Config::default());
    let screen = render(&app);

    assert!(screen.contains("Strictly History - Tic Tac Toe"));
    assert!(screen.contains("Next player: X"));
    assert!(screen.contains("Go to start"));
    assert!(screen.contains("Flip the History"));
}

#[test]
fn test_win_screen() {
    let mut app = App::new(&Config::default());
    for pos in [0, 1, 4, 3, 8] {
        app.play(strictly_history::Position::from_index(pos).unwrap());
    }
    let screen = render(&app);

    assert!(screen.contains("Winner: X"));
    assert!(screen.contains("Go to move #5: X to (3,3)"));
}

#[test]
fn test_headers_follow_config() {
    let with = render(&App::new(&Config::default()));
    let without = render(&App::new(&Config::default().with_show_headers(false)));

    assert!(with.contains(" 1   2   3 "));
    assert!(!without.contains(" 1   2   3 "));
}

#[test]
fn test_empty_squares_show_their_digit() {
    let mut app = App::new(&Config::default());
    assert!(render(&app).contains(" 4 │ 5 │ 6 "));

    app.play(strictly_history::Position::Center);
    assert!(render(&app).contains(" 4 │ X │ 6 "));
}
