//! Application state and key handling.

use crate::input::{Focus, digit_index, move_cursor};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use strictly_tictactoe::{GameEngine, GameState, Phase, Position, Seat, SnapshotReceiver};
use tracing::{debug, info, instrument};

/// Main application state.
///
/// The engine owns the game; the app only keeps what the screen needs on top
/// of it (focus, cursor) and the last snapshot it rendered.
pub struct App {
    engine: GameEngine,
    snapshots: SnapshotReceiver,
    state: GameState,
    focus: Focus,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates an application around `engine`.
    pub fn new(engine: GameEngine) -> Self {
        let snapshots = engine.subscribe();
        let state = engine.snapshot();
        Self {
            engine,
            snapshots,
            state,
            focus: Focus::default(),
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// Last snapshot pulled from the engine.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The engine driving this app.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Focused setup field.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Pulls a new snapshot if the engine published one.
    ///
    /// Returns `true` when the screen needs redrawing.
    pub fn sync(&mut self) -> bool {
        match self.snapshots.has_changed() {
            Ok(true) => {
                self.state = self.snapshots.borrow_and_update().clone();
                true
            }
            _ => false,
        }
    }

    /// Routes a key press to the screen for the current phase.
    #[instrument(skip(self), fields(phase = %self.state.phase()))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            info!("Quit requested");
            self.should_quit = true;
            return;
        }

        match self.state.phase() {
            Phase::Setup => self.handle_setup_key(key),
            Phase::InProgress | Phase::Finished => self.handle_board_key(key),
        }
        self.sync();
    }

    fn handle_setup_key(&mut self, key: KeyEvent) {
        match (self.focus, key.code) {
            (_, KeyCode::Esc) => self.should_quit = true,
            (_, KeyCode::Tab | KeyCode::Down) => self.focus = self.focus.next(),
            (_, KeyCode::BackTab | KeyCode::Up) => self.focus = self.focus.prev(),
            (_, KeyCode::Enter) => self.start(),

            (Focus::PlayerOneName, code) => self.edit_name(Seat::One, code),
            (Focus::PlayerTwoName, code) => self.edit_name(Seat::Two, code),

            (Focus::Mark, KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')) => {
                let mark = self.state.player_one().mark().opponent();
                self.engine.set_player_one_mark(mark);
            }
            (Focus::Mark, KeyCode::Char(c)) => {
                if let Ok(mark) = c.to_string().parse() {
                    self.engine.set_player_one_mark(mark);
                }
            }

            (Focus::Start, KeyCode::Char(' ')) => self.start(),
            _ => {}
        }
    }

    fn edit_name(&mut self, seat: Seat, code: KeyCode) {
        let mut name = self.state.player(seat).name().to_string();
        match code {
            KeyCode::Char(c) if !c.is_control() => name.push(c),
            KeyCode::Backspace => {
                name.pop();
            }
            _ => return,
        }
        self.engine.set_player_name(seat, name);
    }

    fn start(&mut self) {
        if let Err(e) = self.engine.start_game() {
            debug!(error = %e, "Start rejected");
        }
    }

    fn handle_board_key(&mut self, key: KeyEvent) {
        let finished = self.state.phase() == Phase::Finished;
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.engine.play(self.cursor);
            }
            KeyCode::Char('r') if finished => self.engine.restart_game(),
            KeyCode::Char('n') if finished => {
                self.engine.reset_game();
                self.focus = Focus::default();
            }
            KeyCode::Char(c) => {
                if let Some(index) = digit_index(c) {
                    self.engine.make_move(index);
                    if let Some(pos) = Position::from_index(index) {
                        self.cursor = pos;
                    }
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_tictactoe::Mark;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn started_app() -> App {
        let mut app = App::new(GameEngine::new());
        type_text(&mut app, "Amy");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Bob");
        press(&mut app, KeyCode::Enter);
        app
    }

    #[test]
    fn test_typing_edits_focused_name() {
        let mut app = App::new(GameEngine::new());
        type_text(&mut app, "Amyy");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.state().player_one().name(), "Amy");
        assert_eq!(app.state().player_two().name(), "");
    }

    #[test]
    fn test_short_name_shows_error_and_stays_in_setup() {
        let mut app = App::new(GameEngine::new());
        type_text(&mut app, "Al");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Bob");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state().phase(), Phase::Setup);
        assert!(app.state().name_error());
    }

    #[test]
    fn test_mark_toggle() {
        let mut app = App::new(GameEngine::new());
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus(), Focus::Mark);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.state().player_one().mark(), Mark::O);
        assert_eq!(app.state().player_two().mark(), Mark::X);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.state().player_one().mark(), Mark::X);
    }

    #[test]
    fn test_enter_starts_game() {
        let app = started_app();
        assert_eq!(app.state().phase(), Phase::InProgress);
    }

    #[test]
    fn test_cursor_and_digits_place_marks() {
        let mut app = started_app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state().board().get(Position::Center), strictly_tictactoe::Square::Occupied(Mark::X));
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.state().board().get(Position::TopLeft), strictly_tictactoe::Square::Occupied(Mark::O));
        assert_eq!(app.cursor(), Position::TopLeft);
    }

    #[test]
    fn test_restart_only_when_finished() {
        let mut app = started_app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.state().history().len(), 1);

        for c in ['4', '2', '5', '3'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.state().phase(), Phase::Finished);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.state().phase(), Phase::InProgress);
        assert!(app.state().history().is_empty());
        assert_eq!(app.state().player_one().name(), "Amy");
    }

    #[test]
    fn test_new_game_returns_to_setup() {
        let mut app = started_app();
        for c in ['1', '4', '2', '5', '3'] {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.state().phase(), Phase::Setup);
        assert_eq!(app.state().player_one().name(), "");
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(GameEngine::new());
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());

        let mut app = started_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
