//! Saved sessions
//!
//! [`codec`] turns a game into the three strings kept by the store and back;
//! [`GameSession`] ties a game to a word source and a store so that wins and
//! losses get recorded and unfinished games survive a restart.

pub mod codec;
mod controller;

pub use codec::{Snapshot, decode, encode, encode_game};
pub use controller::GameSession;

use crate::store::StoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Durable form of a game: keyboard string, board string and secret
///
/// An empty `word` means there is no saved game.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionBlob {
    #[serde(default)]
    pub keyboard: String,
    #[serde(default)]
    pub board: String,
    #[serde(default)]
    pub word: String,
}

impl SessionBlob {
    /// The "no saved game" sentinel
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if a game is saved
    #[must_use]
    pub fn is_present(&self) -> bool {
        !self.word.is_empty()
    }
}

/// Errors raised while saving, restoring or driving a session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("saved session is corrupt: {0}")]
    Corrupt(String),
    #[error("word list is empty, cannot choose a secret")]
    EmptyWordList,
    #[error(transparent)]
    Store(#[from] StoreError),
}
