//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: each line is a whole guess.

use crate::core::ROW_LENGTH;
use crate::game::{GameObserver, Message, SubmitOutcome};
use crate::output::{print_board, print_statistics};
use crate::session::{GameSession, SessionError};
use crate::store::SessionStore;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Prints advisory messages as they arrive
struct ConsoleObserver;

impl GameObserver for ConsoleObserver {
    fn on_message(&mut self, message: &Message) {
        let text = message.to_string();
        match message {
            Message::Won { .. } => println!("\n🎉 {}", text.bright_green().bold()),
            Message::Lost { .. } => println!("\n💀 {}", text.bright_red().bold()),
            Message::TooFewLetters | Message::NotInDictionary => {
                println!("❌ {}", text.yellow());
            }
        }
    }
}

/// Result of one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineAction {
    Quit,
    NewGame,
    ShowStats,
    TooManyLetters,
    Guess(SubmitOutcome),
}

/// Apply one line of input to the session
///
/// `quit`/`q`/`exit`, `new`/`n` and `stats` are commands; anything else is a
/// guess. A guess replaces whatever the active row held, and a guess the
/// dictionary rejects is wiped so the next line starts clean.
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub fn handle_line<S: SessionStore>(
    session: &mut GameSession<S>,
    line: &str,
    observer: &mut dyn GameObserver,
) -> Result<LineAction, SessionError> {
    let action = match line.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => LineAction::Quit,
        "new" | "n" => {
            session.new_game()?;
            LineAction::NewGame
        }
        "stats" => LineAction::ShowStats,
        guess if guess.len() > ROW_LENGTH => LineAction::TooManyLetters,
        guess => {
            while session.erase(observer) {}
            for letter in guess.bytes() {
                session.type_letter(letter, observer);
            }
            let outcome = session.submit(observer)?;
            if outcome == SubmitOutcome::WordNotRecognized {
                while session.erase(observer) {}
            }
            LineAction::Guess(outcome)
        }
    };

    Ok(action)
}

/// Apply the answer to "resume saved game?"; anything but yes declines
///
/// Returns whether the saved game was resumed.
pub fn answer_resume<S: SessionStore>(session: &mut GameSession<S>, answer: &str) -> bool {
    if matches!(answer.trim().to_lowercase().as_str(), "yes" | "y") {
        session.resume()
    } else {
        session.discard();
        false
    }
}

/// Run the simple interactive CLI mode
///
/// Commands: `quit` saves (if autosave is on) and exits, `new` abandons the
/// current game, `stats` shows the profile statistics.
///
/// # Errors
///
/// Returns an error if reading input fails or the store cannot be written.
pub fn run_simple<S: SessionStore>(session: &mut GameSession<S>, profile: &str) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    if session.has_saved_game() {
        let answer = get_user_input("Resume your saved game? (yes/no)")?;
        if answer_resume(session, &answer) {
            println!("\n📂 Saved game restored.");
        }
    }

    println!("Type a 5-letter guess and press Enter.");
    println!("Commands: 'quit' to exit, 'new' for new game, 'stats' for statistics\n");

    let mut observer = ConsoleObserver;

    loop {
        print_board(session.game());

        if session.game().is_over() {
            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    session.new_game()?;
                    println!("\n🔄 New game started!\n");
                    continue;
                }
                _ => break,
            }
        }

        let Some(input) = read_line("Guess")? else {
            break;
        };

        match handle_line(session, &input, &mut observer)? {
            LineAction::Quit => break,
            LineAction::NewGame => println!("\n🔄 New game started!\n"),
            LineAction::ShowStats => print_statistics(profile, &session.store().statistics()),
            LineAction::TooManyLetters => println!("❌ {}", "too many letters".yellow()),
            LineAction::Guess(_) => {}
        }
    }

    if session.close()? {
        println!("💾 Game saved.");
    }
    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Get user input with a prompt, `None` on end of input
fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

fn get_user_input(prompt: &str) -> io::Result<String> {
    Ok(read_line(prompt)?.unwrap_or_default())
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

    #[derive(Default)]
    struct Messages(Vec<Message>);

    impl GameObserver for Messages {
        fn on_message(&mut self, message: &Message) {
            self.0.push(message.clone());
        }
    }

    const WORDS: [&str; 3] = ["crane", "trace", "slate"];

    /// Session playing CRANE, optionally with a saved TRACE game on offer
    fn session(saved: bool) -> GameSession<MemoryStore> {
        let mut store = MemoryStore::new();
        let pinned = if saved { "trace" } else { "crane" };
        store.session = encode_game(&Game::new(Word::new(pinned).unwrap()));

        let mut session = GameSession::with_rng(
            store,
            Dictionary::from_strs(&WORDS),
            StdRng::seed_from_u64(5),
        )
        .unwrap();
        if !saved {
            assert!(session.resume());
        }
        session
    }

    #[test]
    fn commands_are_recognised() {
        let mut session = session(false);
        let mut messages = Messages::default();

        assert_eq!(
            handle_line(&mut session, "QUIT", &mut messages).unwrap(),
            LineAction::Quit
        );
        assert_eq!(
            handle_line(&mut session, " stats ", &mut messages).unwrap(),
            LineAction::ShowStats
        );
        assert_eq!(
            handle_line(&mut session, "new", &mut messages).unwrap(),
            LineAction::NewGame
        );
        assert!(messages.0.is_empty());
    }

    #[test]
    fn long_guess_never_reaches_the_board() {
        let mut session = session(false);
        let action = handle_line(&mut session, "cranes", &mut NoopObserver).unwrap();

        assert_eq!(action, LineAction::TooManyLetters);
        assert_eq!(session.game().cursor().input_pointer, 0);
    }

    #[test]
    fn unknown_word_leaves_row_empty() {
        let mut session = session(false);
        let mut messages = Messages::default();
        let action = handle_line(&mut session, "qqqqq", &mut messages).unwrap();

        assert_eq!(action, LineAction::Guess(SubmitOutcome::WordNotRecognized));
        assert_eq!(messages.0, vec![Message::NotInDictionary]);
        assert_eq!(session.game().cursor().input_pointer, 0);
        assert_eq!(session.game().board().cell(0, 0).letter, None);
    }

    #[test]
    fn short_guess_is_replaced_by_next_line() {
        let mut session = session(false);
        let mut messages = Messages::default();

        let action = handle_line(&mut session, "tra", &mut messages).unwrap();
        assert_eq!(action, LineAction::Guess(SubmitOutcome::RowIncomplete));
        assert_eq!(messages.0, vec![Message::TooFewLetters]);
        assert_eq!(session.game().cursor().input_pointer, 3);

        // The leftover letters are erased before typing the new guess
        let action = handle_line(&mut session, "trace", &mut messages).unwrap();
        assert!(matches!(action, LineAction::Guess(SubmitOutcome::Continue { .. })));
        assert_eq!(session.game().cursor().current_row, 2);
        assert_eq!(session.game().board().cell(0, 0).letter, Some(b'T'));
    }

    #[test]
    fn winning_line_is_recorded() {
        let mut session = session(false);
        let action = handle_line(&mut session, "Crane", &mut NoopObserver).unwrap();

        assert!(matches!(
            action,
            LineAction::Guess(SubmitOutcome::Won { attempt: 1, .. })
        ));
        assert_eq!(session.store().stats.won, 1);
    }

    #[test]
    fn resume_answer_yes_restores_saved_game() {
        let mut session = session(true);
        assert!(session.has_saved_game());

        assert!(answer_resume(&mut session, " Yes"));
        assert_eq!(session.game().secret().text(), "TRACE");
        assert!(!session.has_saved_game());
    }

    #[test]
    fn resume_answer_no_keeps_fresh_game() {
        let mut session = session(true);
        let fresh = session.game().clone();

        assert!(!answer_resume(&mut session, "no"));
        assert!(!session.has_saved_game());
        assert_eq!(session.game(), &fresh);
    }
}
