//! TOML file store
//!
//! Each profile lives in `<data_dir>/<profile>.toml`:
//!
//! ```toml
//! [settings]
//! autosave = true
//!
//! [stats]
//! played = 3
//! won = 2
//! ...
//!
//! [session]
//! keyboard = "a:0|b:0|..."
//! board = "lbl00:white:|..."
//! word = "CRANE"
//! ```
//!
//! A missing file means a fresh profile; it is created on the first write.

use super::{SessionStore, Settings, Statistics, StoreError};
use crate::session::SessionBlob;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ProfileFile {
    #[serde(default)]
    settings: Settings,
    #[serde(default)]
    stats: Statistics,
    #[serde(default)]
    session: SessionBlob,
}

/// Store backed by one TOML file per profile
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    profile: ProfileFile,
}

pub(super) fn valid_profile_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl FileStore {
    /// Open (or prepare) the file of `profile` under `data_dir`
    ///
    /// # Errors
    /// Returns an error for an invalid profile name, or if an existing file
    /// cannot be read or parsed.
    pub fn open(data_dir: impl AsRef<Path>, profile: &str) -> Result<Self, StoreError> {
        if !valid_profile_name(profile) {
            return Err(StoreError::InvalidProfile(profile.to_string()));
        }

        let path = data_dir.as_ref().join(format!("{profile}.toml"));
        let profile = match fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|source| StoreError::Parse {
                path: path.clone(),
                source,
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("no profile file at {}, starting fresh", path.display());
                ProfileFile::default()
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        log::debug!("opened profile file {}", path.display());
        Ok(Self { path, profile })
    }

    /// Location of the profile file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(super) fn persist(&self) -> Result<(), StoreError> {
        let content = toml::to_string_pretty(&self.profile)?;
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        let written = match self.path.parent() {
            Some(parent) => {
                fs::create_dir_all(parent).and_then(|()| fs::write(&self.path, content))
            }
            None => fs::write(&self.path, content),
        };
        written
            .inspect_err(|e| log::warn!("failed to write {}: {e}", self.path.display()))
            .map_err(io_err)
    }
}

impl SessionStore for FileStore {
    fn load_state(&self) -> Result<Option<SessionBlob>, StoreError> {
        let session = &self.profile.session;
        Ok(session.is_present().then(|| session.clone()))
    }

    fn save_state(&mut self, blob: &SessionBlob) -> Result<(), StoreError> {
        self.profile.session = blob.clone();
        self.persist()
    }

    fn record_win(&mut self, attempt: usize) -> Result<(), StoreError> {
        self.profile.stats.record_win(attempt)?;
        self.persist()
    }

    fn record_loss(&mut self) -> Result<(), StoreError> {
        self.profile.stats.record_loss();
        self.persist()
    }

    fn statistics(&self) -> Statistics {
        self.profile.stats.clone()
    }

    fn settings(&self) -> Settings {
        self.profile.settings
    }

    fn set_autosave(&mut self, enabled: bool) -> Result<(), StoreError> {
        self.profile.settings.autosave = enabled;
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "wordle_session_store_{name}_{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = temp_dir("missing");
        let store = FileStore::open(&dir, "alice").unwrap();

        assert_eq!(store.load_state().unwrap(), None);
        assert_eq!(store.statistics(), Statistics::default());
        assert!(store.settings().autosave);
        assert!(!store.path().exists());
    }

    #[test]
    fn writes_survive_reopen() {
        let dir = temp_dir("reopen");
        let blob = SessionBlob {
            keyboard: "a:1|".to_string(),
            board: "lbl00:white:|".to_string(),
            word: "CRANE".to_string(),
        };

        {
            let mut store = FileStore::open(&dir, "bob").unwrap();
            store.save_state(&blob).unwrap();
            store.record_win(4).unwrap();
            store.record_loss().unwrap();
            store.set_autosave(false).unwrap();
        }

        let store = FileStore::open(&dir, "bob").unwrap();
        assert_eq!(store.load_state().unwrap(), Some(blob));
        let stats = store.statistics();
        assert_eq!(stats.played, 2);
        assert_eq!(stats.distribution[3], 1);
        assert_eq!(stats.current_streak, 0);
        assert!(!store.settings().autosave);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn empty_blob_clears_session() {
        let dir = temp_dir("clear");
        let mut store = FileStore::open(&dir, "carol").unwrap();
        store
            .save_state(&SessionBlob {
                word: "CRANE".to_string(),
                ..SessionBlob::default()
            })
            .unwrap();
        store.save_state(&SessionBlob::empty()).unwrap();

        let store = FileStore::open(&dir, "carol").unwrap();
        assert_eq!(store.load_state().unwrap(), None);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn rejects_bad_profile_names() {
        let dir = temp_dir("names");
        for name in ["", "../etc", "a b", "x/y"] {
            assert!(matches!(
                FileStore::open(&dir, name),
                Err(StoreError::InvalidProfile(_))
            ));
        }
    }

    #[test]
    fn reports_unparsable_files() {
        let dir = temp_dir("garbage");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("dave.toml"), "this is [not toml").unwrap();

        assert!(matches!(
            FileStore::open(&dir, "dave"),
            Err(StoreError::Parse { .. })
        ));

        let _ = fs::remove_dir_all(&dir);
    }
}
