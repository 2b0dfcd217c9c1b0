//! Game session lifecycle
//!
//! Owns the active [`Game`] together with its word source and store:
//!
//! - starting draws a fresh secret; when autosave is on, a saved unfinished
//!   game is held back until the player resumes or declines it
//! - a win or a loss is recorded and clears the saved game
//! - starting a new game clears the saved game
//! - closing saves the game if autosave is on and it is unfinished

use super::{SessionError, Snapshot, codec};
use crate::core::Word;
use crate::game::{Game, GameObserver, SubmitOutcome};
use crate::session::SessionBlob;
use crate::store::SessionStore;
use crate::wordlists::Dictionary;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A game bound to its dictionary and store
pub struct GameSession<S: SessionStore> {
    store: S,
    words: Dictionary,
    game: Game,
    rng: StdRng,
    saved: Option<Snapshot>,
}

impl<S: SessionStore> GameSession<S> {
    /// Start a session with a fresh game
    ///
    /// A resumable saved game is kept aside; see [`GameSession::has_saved_game`].
    ///
    /// # Errors
    /// Returns an error if the dictionary is empty or the store fails. A
    /// corrupt saved game is not an error: it is logged and ignored.
    pub fn start(store: S, words: Dictionary) -> Result<Self, SessionError> {
        Self::with_rng(store, words, StdRng::from_os_rng())
    }

    /// Like [`GameSession::start`] with a caller-provided random source
    ///
    /// # Errors
    /// See [`GameSession::start`].
    pub fn with_rng(store: S, words: Dictionary, mut rng: StdRng) -> Result<Self, SessionError> {
        let saved = if store.settings().autosave {
            Self::restore(&store)?
        } else {
            None
        };
        let game = Game::new(draw_secret(&words, &mut rng)?);

        Ok(Self {
            store,
            words,
            game,
            rng,
            saved,
        })
    }

    fn restore(store: &S) -> Result<Option<Snapshot>, SessionError> {
        let Some(blob) = store.load_state()? else {
            return Ok(None);
        };

        match codec::decode(&blob) {
            Ok(Some(snapshot)) if !snapshot.game_over => Ok(Some(snapshot)),
            Ok(Some(_)) => {
                log::warn!("saved game is already finished, ignoring it");
                Ok(None)
            }
            Ok(None) => Ok(None),
            Err(e) => {
                log::warn!("discarding saved game: {e}");
                Ok(None)
            }
        }
    }

    /// Whether an unfinished saved game is waiting to be resumed
    #[must_use]
    pub const fn has_saved_game(&self) -> bool {
        self.saved.is_some()
    }

    /// Replace the current game with the saved one
    ///
    /// Returns `false` when there is nothing to resume.
    pub fn resume(&mut self) -> bool {
        let Some(snapshot) = self.saved.take() else {
            return false;
        };
        log::info!("resuming saved game at row {}", snapshot.cursor.current_row);
        self.game = snapshot.into_game();
        true
    }

    /// Decline the saved game and keep playing the fresh one
    ///
    /// The store is untouched; the saved game is overwritten once this game
    /// is saved or finished.
    pub fn discard(&mut self) {
        if self.saved.take().is_some() {
            log::info!("saved game declined");
        }
    }

    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    #[must_use]
    pub const fn words(&self) -> &Dictionary {
        &self.words
    }

    pub fn type_letter(&mut self, letter: u8, observer: &mut dyn GameObserver) -> bool {
        self.game.type_letter(letter, observer)
    }

    pub fn erase(&mut self, observer: &mut dyn GameObserver) -> bool {
        self.game.erase(observer)
    }

    /// Submit the active row; a finished game is recorded and its save cleared
    ///
    /// # Errors
    /// Returns an error if the store cannot record the result.
    pub fn submit(
        &mut self,
        observer: &mut dyn GameObserver,
    ) -> Result<SubmitOutcome, SessionError> {
        let outcome = self.game.submit(&self.words, observer);

        match &outcome {
            SubmitOutcome::Won { attempt, .. } => self.store.record_win(*attempt)?,
            SubmitOutcome::Lost { .. } => self.store.record_loss()?,
            _ => return Ok(outcome),
        }
        self.saved = None;
        self.store.save_state(&SessionBlob::empty())?;

        Ok(outcome)
    }

    /// Abandon the current game and start over with a fresh secret
    ///
    /// # Errors
    /// Returns an error if the store cannot clear the saved game.
    pub fn new_game(&mut self) -> Result<(), SessionError> {
        let secret = draw_secret(&self.words, &mut self.rng)?;
        self.game.new_game(secret);
        self.saved = None;
        self.store.save_state(&SessionBlob::empty())?;
        Ok(())
    }

    /// Save the game if autosave is on and it is unfinished
    ///
    /// Returns whether anything was saved.
    ///
    /// # Errors
    /// Returns an error if the store cannot be written.
    pub fn close(&mut self) -> Result<bool, SessionError> {
        if !self.store.settings().autosave || self.game.is_over() {
            return Ok(false);
        }
        self.store.save_state(&codec::encode_game(&self.game))?;
        log::info!("saved unfinished game");
        Ok(true)
    }

    /// Consume the session, handing back its store
    pub fn into_store(self) -> S {
        self.store
    }
}

fn draw_secret(words: &Dictionary, rng: &mut StdRng) -> Result<Word, SessionError> {
    words
        .choose_secret(rng)
        .cloned()
        .ok_or(SessionError::EmptyWordList)
}
