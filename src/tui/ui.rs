//! Stateless UI rendering for the game and its history.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strictly_history_core::{GameStatus, Player, Position, Square, WinningLine};

use super::app::{App, Focus};

const HELP: &str = "←↑↓→ move | Enter play/jump | 1-9 play | Tab focus | f flip | n new | q quit";

/// Renders the whole screen for the current app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Board + history
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(area);

    let title = Paragraph::new("Strictly History - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(30)])
        .split(chunks[1]);

    draw_board(frame, body[0], app);
    draw_history(frame, body[1], app);

    let status = app.game().status();
    let status_text = Paragraph::new(status.to_string())
        .style(status_style(status))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);
}

fn status_style(status: GameStatus) -> Style {
    match status {
        GameStatus::Won(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        GameStatus::Draw => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        GameStatus::NextPlayer(_) => Style::default().fg(Color::Yellow),
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let border = if game.is_game_over() {
        Style::default().fg(Color::Magenta)
    } else if *app.focus() == Focus::Board {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Board ")
        .border_style(border);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = board_lines(app, game.winning_line());
    let height = lines.len() as u16;
    let board = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board, center_rect(inner, inner.width, height));
}

fn board_lines(app: &App, winning_line: Option<WinningLine>) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let headers = *app.show_headers();

    if headers {
        let mut spans = vec![Span::raw("  ")];
        for col in 1..=3 {
            spans.push(header_span(format!(" {col} ")));
            if col < 3 {
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
    }

    for (row, positions) in Position::ALL.chunks(3).enumerate() {
        if row > 0 {
            lines.push(separator_line(headers));
        }
        let mut spans = Vec::new();
        if headers {
            spans.push(header_span(format!("{} ", row + 1)));
        }
        for (col, pos) in positions.iter().enumerate() {
            if col > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            spans.push(cell_span(app, *pos, winning_line));
        }
        lines.push(Line::from(spans));
    }

    lines
}

fn header_span(text: String) -> Span<'static> {
    Span::styled(text, Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM))
}

fn separator_line(headers: bool) -> Line<'static> {
    let pad = if headers { "  " } else { "" };
    Line::from(Span::styled(
        format!("{pad}───┼───┼───"),
        Style::default().fg(Color::DarkGray),
    ))
}

fn cell_span(app: &App, pos: Position, winning_line: Option<WinningLine>) -> Span<'static> {
    // Empty squares show the digit that plays them.
    let (symbol, mut style) = match app.game().current_board().get(pos) {
        Square::Empty => (
            format!(" {} ", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
        ),
        Square::Occupied(Player::X) => (
            " X ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if winning_line.is_some_and(|line| line.contains(pos)) {
        style = style.bg(Color::Green);
    }
    if *app.focus() == Focus::Board && pos == *app.cursor() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    Span::styled(symbol, style)
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let focused = *app.focus() == Focus::History;

    let items: Vec<ListItem> = app
        .game()
        .displayed_move_list()
        .into_iter()
        .map(|entry| {
            let style = if entry.current {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(entry.label).style(style)
        })
        .collect();

    let title = match app.game().outcome() {
        Some(outcome) => format!(" History: {outcome} "),
        None => " History ".to_string(),
    };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_bottom(format!(" ⇅ {} (f) ", app.flip_label()));
    if focused {
        block = block.border_style(Style::default().fg(Color::Yellow));
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut list_state = ListState::default().with_selected(focused.then_some(*app.selected()));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
