//! Application state and logic.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use derive_getters::Getters;
use morpion_engine::{Color, Coord, Game, Move, MoveError};
use ratatui::layout::Rect;
use tracing::{debug, info, instrument, warn};

use super::input::move_cursor;
use super::ui::{Hit, hit_test};

const READY: &str = "Ready?";

/// Free-text status line with its foreground color.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Status {
    /// Message shown to the players.
    text: String,
    /// Foreground color of the message.
    color: Color,
}

impl Status {
    /// Creates a status message.
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

/// What happened to a requested move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The move was invalid; nothing changed.
    Rejected(MoveError),
    /// The move was applied and the turn passed to the next player.
    Continue,
    /// The move completed a winning combination.
    Won,
    /// The move filled the board without a winner.
    Tied,
}

/// Entries of the menu bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Clear the board for another round.
    PlayAgain,
    /// Leave the application.
    Quit,
}

impl MenuAction {
    /// All menu entries, left to right.
    pub const ALL: [MenuAction; 2] = [MenuAction::PlayAgain, MenuAction::Quit];

    /// Returns the text shown in the menu bar.
    pub fn label(self) -> &'static str {
        match self {
            MenuAction::PlayAgain => " Play again (n) ",
            MenuAction::Quit => " Quit (q) ",
        }
    }
}

/// Main application state.
///
/// Owns the one [`Game`] it drives; all decisions are delegated to it.
#[derive(Debug)]
pub struct App {
    game: Game,
    status: Status,
    cursor: Coord,
    should_quit: bool,
}

impl App {
    /// Creates a new application around `game`.
    #[instrument(skip(game), fields(size = game.size()))]
    pub fn new(game: Game) -> Self {
        Self {
            game,
            status: Status::new(READY, Color::Black),
            cursor: Coord::new(0, 0),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the current status message.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Plays the current player's label at `coord`.
    ///
    /// Invalid moves leave both the game and the status untouched.
    #[instrument(skip(self))]
    pub fn play(&mut self, coord: Coord) -> TurnOutcome {
        let player = self.game.current_player().clone();
        let mv = Move::new(coord.row, coord.col, player.label().as_str());

        if let Err(reason) = self.game.validate_move(&mv) {
            debug!(%reason, "Ignoring invalid move");
            return TurnOutcome::Rejected(reason);
        }

        if let Err(reason) = self.game.process_move(mv) {
            warn!(%reason, "Validated move was refused");
            return TurnOutcome::Rejected(reason);
        }

        if self.game.is_tied() {
            info!("Game tied");
            self.status = Status::new("Tied game!", Color::Red);
            TurnOutcome::Tied
        } else if self.game.has_winner() {
            let winner = self.game.winner().unwrap_or(&player);
            info!(winner = %winner, "Game won");
            self.status = Status::new(format!("Player \"{}\" won!", winner), *winner.color());
            TurnOutcome::Won
        } else {
            self.game.toggle_player();
            self.status = Status::new(
                format!("{} to play.", self.game.current_player()),
                Color::Black,
            );
            TurnOutcome::Continue
        }
    }

    /// Plays at the keyboard cursor.
    pub fn play_cursor(&mut self) -> TurnOutcome {
        self.play(self.cursor)
    }

    /// Starts a new round.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Restarting game");
        self.game.reset_game();
        self.status = Status::new(READY, Color::Black);
    }

    /// Runs a menu entry.
    #[instrument(skip(self))]
    pub fn select(&mut self, action: MenuAction) {
        match action {
            MenuAction::PlayAgain => self.reset(),
            MenuAction::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    /// Handles a key press.
    #[instrument(skip(self, key), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Skip key release events (crossterm fires both press and release).
        if key.kind == KeyEventKind::Release {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.select(MenuAction::Quit)
            }
            KeyCode::Char('n') | KeyCode::Char('N') => self.select(MenuAction::PlayAgain),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.play_cursor();
            }
            code => self.cursor = move_cursor(self.cursor, code, self.game.size()),
        }
    }

    /// Handles a mouse event on a screen of `area`.
    ///
    /// Only left clicks on a cell or a menu entry do anything.
    #[instrument(skip(self, mouse), fields(column = mouse.column, row = mouse.row))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        match hit_test(area, self.game.size(), mouse.column, mouse.row) {
            Some(Hit::Cell(coord)) => {
                self.cursor = coord;
                self.play(coord);
            }
            Some(Hit::Menu(action)) => self.select(action),
            None => {}
        }
    }
}
