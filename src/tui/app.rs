//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use strictly_history_core::{GameState, Position};
use tracing::{debug, info, instrument};

use super::input::{digit_position, move_cursor};
use crate::Config;

/// Panel receiving arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrows move the board cursor; Enter plays.
    #[default]
    Board,
    /// Arrows move the move-list selection; Enter jumps.
    History,
}

impl Focus {
    /// Returns the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Stay,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    /// Index into the displayed move list.
    selected: usize,
    show_headers: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument(skip(config))]
    pub fn new(config: &Config) -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            show_headers: *config.show_headers(),
        }
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                info!("User quit");
                return AppAction::Quit;
            }
            KeyCode::Char('n') => self.restart(),
            KeyCode::Char('f') => self.flip_history(),
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.sync_selection();
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = digit_position(c) {
                    self.play(pos);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.play(self.cursor),
                Focus::History => self.jump(self.selected_step()),
            },
            code => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, code),
                Focus::History => self.move_selection(code),
            },
        }
        AppAction::Stay
    }

    /// Plays at `pos`; rejected moves leave everything as it was.
    #[instrument(skip(self))]
    pub fn play(&mut self, pos: Position) {
        match self.game.apply_move(pos) {
            Ok(play) => {
                debug!(%play, "Move accepted");
                self.cursor = pos;
                self.sync_selection();
            }
            Err(e) => debug!(error = %e, "Ignoring move"),
        }
    }

    /// Jumps to `step`; out-of-range steps leave everything as it was.
    #[instrument(skip(self))]
    pub fn jump(&mut self, step: usize) {
        match self.game.jump_to(step) {
            Ok(()) => self.sync_selection(),
            Err(e) => debug!(error = %e, "Ignoring jump"),
        }
    }

    /// Flips the move list and keeps the viewed entry selected.
    #[instrument(skip(self))]
    pub fn flip_history(&mut self) {
        self.game.toggle_history_order();
        self.sync_selection();
    }

    /// Replaces the game with a fresh one.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.game = GameState::new();
        self.cursor = Position::Center;
        self.selected = 0;
    }

    /// Returns the history step under the move-list selection.
    pub fn selected_step(&self) -> usize {
        self.game
            .displayed_move_list()
            .get(self.selected)
            .map_or(self.game.current_step(), |entry| entry.step)
    }

    /// Returns the label of the flip control.
    pub fn flip_label(&self) -> &'static str {
        if self.game.display_reversed() {
            "Unflip the History"
        } else {
            "Flip the History"
        }
    }

    fn move_selection(&mut self, code: KeyCode) {
        let last = self.game.history().len() - 1;
        self.selected = match code {
            KeyCode::Up => self.selected.saturating_sub(1),
            KeyCode::Down => (self.selected + 1).min(last),
            KeyCode::Home => 0,
            KeyCode::End => last,
            _ => self.selected,
        };
    }

    fn sync_selection(&mut self) {
        self.selected = self
            .game
            .displayed_move_list()
            .iter()
            .position(|entry| entry.current)
            .unwrap_or(0);
    }
}
