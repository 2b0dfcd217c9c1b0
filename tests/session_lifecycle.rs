use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::path::{Path, PathBuf};
use wordle_session::core::{LetterState, Word};
use wordle_session::game::{Game, GameObserver, Message, NoopObserver, SubmitOutcome};
use wordle_session::session::{GameSession, encode_game};
use wordle_session::store::{FileStore, SessionStore};
use wordle_session::wordlists::Dictionary;

const WORDS: [&str; 4] = ["crane", "trace", "slate", "plant"];

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "wordle_session_it_{name}_{}",
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    dir
}

/// Store whose saved game pins the secret to CRANE
fn pinned_store(dir: &Path, profile: &str) -> FileStore {
    let mut store = FileStore::open(dir, profile).unwrap();
    store
        .save_state(&encode_game(&Game::new(Word::new("crane").unwrap())))
        .unwrap();
    store
}

/// Start a session and accept any saved game
fn start(store: FileStore) -> GameSession<FileStore> {
    let mut session =
        GameSession::with_rng(store, Dictionary::from_strs(&WORDS), StdRng::seed_from_u64(7))
            .unwrap();
    session.resume();
    session
}

fn enter(
    session: &mut GameSession<FileStore>,
    word: &str,
    observer: &mut dyn GameObserver,
) -> SubmitOutcome {
    for letter in word.bytes() {
        session.type_letter(letter, observer);
    }
    session.submit(observer).unwrap()
}

#[derive(Default)]
struct Messages(Vec<String>);

impl GameObserver for Messages {
    fn on_message(&mut self, message: &Message) {
        self.0.push(message.to_string());
    }
}

#[test]
fn unfinished_game_survives_restart() {
    let dir = temp_dir("resume");

    let mut session = start(pinned_store(&dir, "resume"));
    enter(&mut session, "trace", &mut NoopObserver);
    session.type_letter(b's', &mut NoopObserver);
    assert!(session.close().unwrap());
    drop(session);

    let session = start(FileStore::open(&dir, "resume").unwrap());
    let game = session.game();
    assert_eq!(game.secret().text(), "CRANE");
    // Unsubmitted letters are not kept
    assert_eq!(game.cursor().current_row, 2);
    assert_eq!(game.cursor().input_pointer, 5);
    assert_eq!(game.keyboard().get(b'a'), Some(LetterState::Correct));
    assert_eq!(game.keyboard().get(b't'), Some(LetterState::Absent));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn win_updates_statistics_and_clears_save() {
    let dir = temp_dir("win");
    let mut messages = Messages::default();

    let mut session = start(pinned_store(&dir, "win"));
    enter(&mut session, "plunk", &mut messages);
    assert_eq!(messages.0, vec!["word not in dictionary".to_string()]);
    for _ in 0..5 {
        session.erase(&mut messages);
    }

    enter(&mut session, "slate", &mut messages);
    let outcome = enter(&mut session, "crane", &mut messages);
    assert!(matches!(outcome, SubmitOutcome::Won { attempt: 2, .. }));
    assert_eq!(
        messages.0.last().map(String::as_str),
        Some("Congratulations! The word was CRANE")
    );
    assert!(!session.close().unwrap());
    drop(session);

    let store = FileStore::open(&dir, "win").unwrap();
    assert_eq!(store.load_state().unwrap(), None);
    let stats = store.statistics();
    assert_eq!((stats.played, stats.won, stats.current_streak), (1, 1, 1));
    assert_eq!(stats.distribution[1], 1);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn loss_is_recorded_and_breaks_streak() {
    let dir = temp_dir("loss");
    {
        let mut store = pinned_store(&dir, "loss");
        store.record_win(3).unwrap();
    }

    // Interrupt the game once so a mid-game save exists
    let mut session = start(FileStore::open(&dir, "loss").unwrap());
    enter(&mut session, "trace", &mut NoopObserver);
    assert!(session.close().unwrap());
    drop(session);

    let mut session = start(FileStore::open(&dir, "loss").unwrap());
    assert_eq!(session.game().cursor().current_row, 2);
    let mut messages = Messages::default();
    let guesses = ["slate", "plant", "trace", "slate", "plant"];
    let outcomes: Vec<_> = guesses
        .iter()
        .map(|g| enter(&mut session, g, &mut messages))
        .collect();

    assert!(matches!(outcomes[4], SubmitOutcome::Lost { .. }));
    assert_eq!(
        messages.0.last().map(String::as_str),
        Some("Too bad! The word was CRANE")
    );
    assert!(session.game().is_over());

    let stats = session.store().statistics();
    assert_eq!((stats.played, stats.lost, stats.current_streak), (2, 1, 0));
    assert_eq!(stats.max_streak, 1);
    drop(session);

    // The lost game is gone, not offered again
    let session = GameSession::with_rng(
        FileStore::open(&dir, "loss").unwrap(),
        Dictionary::from_strs(&WORDS),
        StdRng::seed_from_u64(7),
    )
    .unwrap();
    assert!(!session.has_saved_game());
    assert_eq!(session.store().statistics().played, 2);

    let _ = fs::remove_dir_all(&dir);
}
