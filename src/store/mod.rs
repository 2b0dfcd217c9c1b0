//! Persistence for sessions, statistics and settings
//!
//! The game core only talks to [`SessionStore`]. [`FileStore`] keeps one TOML
//! file per profile; [`MemoryStore`] keeps everything in memory.
//! [`ProfileDir`] lists, adds and deletes profiles and remembers the current one.

mod file;
mod memory;
mod profiles;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use profiles::{NAME_LENGTH, ProfileDir};

use crate::core::ROW_AMOUNT;
use crate::session::SessionBlob;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by stores
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize profile: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid profile name {0:?}")]
    InvalidProfile(String),
    #[error("profile {0:?} does not exist")]
    UnknownProfile(String),
    #[error("attempt {0} is outside 1..=6")]
    InvalidAttempt(usize),
}

/// Win/loss statistics of a profile
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Wins by attempt number, index 0 = first attempt
    pub distribution: [u32; ROW_AMOUNT],
}

impl Statistics {
    /// Record a win at a 1-based attempt
    ///
    /// # Errors
    /// Returns `StoreError::InvalidAttempt` if `attempt` is not in `1..=6`.
    pub fn record_win(&mut self, attempt: usize) -> Result<(), StoreError> {
        let bucket = attempt
            .checked_sub(1)
            .and_then(|i| self.distribution.get_mut(i))
            .ok_or(StoreError::InvalidAttempt(attempt))?;
        *bucket += 1;
        self.played += 1;
        self.won += 1;
        self.current_streak += 1;
        self.max_streak = self.max_streak.max(self.current_streak);
        Ok(())
    }

    /// Record a loss; breaks the streak
    pub fn record_loss(&mut self) {
        self.played += 1;
        self.lost += 1;
        self.current_streak = 0;
    }

    /// Percentage of games won, 0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            f64::from(self.won) * 100.0 / f64::from(self.played)
        }
    }
}

/// Persistent settings of a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Save unfinished games on exit and offer them on start
    pub autosave: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { autosave: true }
    }
}

/// Storage used by a game session
pub trait SessionStore {
    /// The saved session, `None` when nothing is saved
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be read.
    fn load_state(&self) -> Result<Option<SessionBlob>, StoreError>;

    /// Replace the saved session; the empty blob clears it
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be written.
    fn save_state(&mut self, blob: &SessionBlob) -> Result<(), StoreError>;

    /// Record a win at a 1-based attempt
    ///
    /// # Errors
    /// Returns an error for an out-of-range attempt or a storage failure.
    fn record_win(&mut self, attempt: usize) -> Result<(), StoreError>;

    /// Record a loss
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be written.
    fn record_loss(&mut self) -> Result<(), StoreError>;

    fn statistics(&self) -> Statistics;

    fn settings(&self) -> Settings;

    /// # Errors
    /// Returns an error if the backing storage cannot be written.
    fn set_autosave(&mut self, enabled: bool) -> Result<(), StoreError>;
}
