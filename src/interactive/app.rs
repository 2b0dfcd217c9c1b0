//! TUI application state and logic

use crate::game::{GameObserver, Message};
use crate::session::GameSession;
use crate::store::SessionStore;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const HELP_TEXT: &str = "Type a 5-letter word, Enter to submit. Ctrl-N new game, Esc quits.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Message line shown under the board
///
/// Receives the game's notifications; the TUI reads it back when drawing.
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    pub message: Option<(String, MessageStyle)>,
}

impl StatusLine {
    fn set(&mut self, text: impl Into<String>, style: MessageStyle) {
        self.message = Some((text.into(), style));
    }
}

impl GameObserver for StatusLine {
    fn on_message(&mut self, message: &Message) {
        let style = match message {
            Message::Won { .. } => MessageStyle::Success,
            Message::Lost { .. } | Message::TooFewLetters | Message::NotInDictionary => {
                MessageStyle::Error
            }
        };
        self.set(message.to_string(), style);
    }

    fn on_message_cleared(&mut self) {
        self.message = None;
    }
}

/// Application state
pub struct App<S: SessionStore> {
    pub session: GameSession<S>,
    pub status: StatusLine,
    pub profile: String,
    /// Waiting for the player to accept or decline the saved game
    pub confirm_resume: bool,
    pub should_quit: bool,
}

impl<S: SessionStore> App<S> {
    #[must_use]
    pub fn new(session: GameSession<S>, profile: impl Into<String>) -> Self {
        let mut status = StatusLine::default();
        let confirm_resume = session.has_saved_game();
        if confirm_resume {
            status.set("Resume your saved game? (y/n)", MessageStyle::Info);
        } else {
            status.set(HELP_TEXT, MessageStyle::Info);
        }

        Self {
            session,
            status,
            profile: profile.into(),
            confirm_resume,
            should_quit: false,
        }
    }

    /// React to one key press
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot record a result.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if self.confirm_resume {
            match key.code {
                KeyCode::Char('c') if ctrl => self.should_quit = true,
                KeyCode::Char('y' | 'Y') | KeyCode::Enter => {
                    self.session.resume();
                    self.confirm_resume = false;
                    self.status.set("Saved game restored.", MessageStyle::Info);
                }
                KeyCode::Char('n' | 'N') | KeyCode::Esc => {
                    self.session.discard();
                    self.confirm_resume = false;
                    self.status.set(HELP_TEXT, MessageStyle::Info);
                }
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game()?,
            KeyCode::Char('n') if self.session.game().is_over() => self.new_game()?,
            KeyCode::Char('q') if self.session.game().is_over() => self.should_quit = true,
            KeyCode::Char(c) if c.is_ascii_alphabetic() && !ctrl => {
                // Ascii checked above
                self.session.type_letter(c as u8, &mut self.status);
            }
            KeyCode::Backspace => {
                self.session.erase(&mut self.status);
            }
            KeyCode::Enter => {
                self.session.submit(&mut self.status)?;
                if self.session.game().is_over() {
                    let (text, style) = self
                        .status
                        .message
                        .take()
                        .unwrap_or_else(|| (String::new(), MessageStyle::Info));
                    self.status
                        .set(format!("{text}  (n: new game, q: quit)"), style);
                }
            }
            _ => {}
        }

        Ok(())
    }

    fn new_game(&mut self) -> Result<()> {
        self.session.new_game()?;
        self.status = StatusLine::default();
        self.status.set("New game started!", MessageStyle::Info);
        Ok(())
    }
}

/// Run the TUI application
///
/// The session is saved on exit when autosave is on.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: SessionStore>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let mut app = res?;
    if app.session.close()? {
        println!("Game saved.");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: SessionStore>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<App<S>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{Game, NoopObserver};
    use crate::session::encode_game;
    use crate::store::MemoryStore;
    use crate::wordlists::Dictionary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn app() -> App<MemoryStore> {
        let session = GameSession::with_rng(
            MemoryStore::new(),
            Dictionary::from_strs(&["crane"]),
            StdRng::seed_from_u64(3),
        )
        .unwrap();
        App::new(session, "tester")
    }

    fn app_with_saved_game() -> App<MemoryStore> {
        let mut store = MemoryStore::new();
        let mut saved = Game::new(Word::new("trace").unwrap());
        for letter in *b"crane" {
            saved.type_letter(letter, &mut NoopObserver);
        }
        saved.submit(
            &Dictionary::from_strs(&["crane", "trace"]),
            &mut NoopObserver,
        );
        store.session = encode_game(&saved);

        let session = GameSession::with_rng(
            store,
            Dictionary::from_strs(&["crane", "trace"]),
            StdRng::seed_from_u64(3),
        )
        .unwrap();
        App::new(session, "tester")
    }

    fn press(app: &mut App<MemoryStore>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    #[test]
    fn typing_and_submitting_wins() {
        let mut app = app();
        for c in "crane".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert!(app.status.message.is_none());
        press(&mut app, KeyCode::Enter);

        assert!(app.session.game().is_over());
        let (text, style) = app.status.message.clone().unwrap();
        assert!(text.starts_with("Congratulations! The word was CRANE"));
        assert_eq!(style, MessageStyle::Success);
        assert_eq!(app.session.store().stats.won, 1);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn short_row_shows_error() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.status.message,
            Some(("too few letters".to_string(), MessageStyle::Error))
        );

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.status.message, None);
        assert_eq!(app.session.game().cursor().input_pointer, 0);
    }

    #[test]
    fn ctrl_n_restarts_and_esc_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL))
            .unwrap();
        assert_eq!(app.session.game().cursor().input_pointer, 0);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn saved_game_waits_for_answer() {
        let mut app = app_with_saved_game();
        assert!(app.confirm_resume);
        assert_eq!(
            app.status.message.as_ref().map(|(text, _)| text.as_str()),
            Some("Resume your saved game? (y/n)")
        );

        // Letters do not reach the board while asking
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.session.game().cursor().input_pointer, 0);

        press(&mut app, KeyCode::Char('y'));
        assert!(!app.confirm_resume);
        assert_eq!(app.session.game().secret().text(), "TRACE");
        assert_eq!(app.session.game().cursor().current_row, 2);
    }

    #[test]
    fn declining_saved_game_keeps_fresh_one() {
        let mut app = app_with_saved_game();
        press(&mut app, KeyCode::Char('n'));

        assert!(!app.confirm_resume);
        assert!(!app.should_quit);
        assert!(!app.session.has_saved_game());
        assert_eq!(app.session.game().cursor().input_pointer, 0);
        assert_eq!(app.session.game().cursor().current_row, 1);
    }
}
