//! Profile management
//!
//! Every `<name>.toml` in the data directory is a profile. The profile picked
//! with `use` is remembered in `.current.toml`, which is never listed since
//! `.current` is not a valid profile name.

use super::file::valid_profile_name;
use super::{FileStore, StoreError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

const CURRENT_FILE: &str = ".current.toml";

/// Allowed length of a newly added profile name
pub const NAME_LENGTH: RangeInclusive<usize> = 4..=24;

#[derive(Debug, Serialize, Deserialize)]
struct CurrentProfile {
    name: String,
}

/// The set of profiles kept in one data directory
#[derive(Debug, Clone)]
pub struct ProfileDir {
    dir: PathBuf,
}

impl ProfileDir {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn profile_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.toml"))
    }

    fn io_err(path: &Path) -> impl FnOnce(io::Error) -> StoreError + '_ {
        move |source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Names of all profiles, sorted
    ///
    /// # Errors
    /// Returns an error if the directory exists but cannot be read.
    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.dir.clone(),
                    source,
                });
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let path = entry.path();
                if path.extension()? != "toml" {
                    return None;
                }
                let name = path.file_stem()?.to_str()?;
                valid_profile_name(name).then(|| name.to_string())
            })
            .collect();
        names.sort();
        Ok(names)
    }

    #[must_use]
    pub fn exists(&self, name: &str) -> bool {
        valid_profile_name(name) && self.profile_path(name).is_file()
    }

    /// Create an empty profile
    ///
    /// Returns `false` if the profile already exists.
    ///
    /// # Errors
    /// Returns `StoreError::InvalidProfile` for a malformed name or one whose
    /// length is outside [`NAME_LENGTH`], or an error if the file cannot be written.
    pub fn add(&self, name: &str) -> Result<bool, StoreError> {
        if !valid_profile_name(name) || !NAME_LENGTH.contains(&name.chars().count()) {
            return Err(StoreError::InvalidProfile(name.to_string()));
        }
        if self.exists(name) {
            return Ok(false);
        }

        FileStore::open(&self.dir, name)?.persist()?;
        log::info!("added profile {name}");
        Ok(true)
    }

    /// Delete a profile together with its statistics and saved game
    ///
    /// Returns `false` if there was no such profile. Deleting the current
    /// profile forgets it as current.
    ///
    /// # Errors
    /// Returns an error for an invalid name or if the file cannot be removed.
    pub fn delete(&self, name: &str) -> Result<bool, StoreError> {
        if !valid_profile_name(name) {
            return Err(StoreError::InvalidProfile(name.to_string()));
        }

        let path = self.profile_path(name);
        match fs::remove_file(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
            Err(source) => return Err(StoreError::Io { path, source }),
        }
        log::info!("deleted profile {name}");

        if self.marker()?.as_deref() == Some(name) {
            let marker = self.dir.join(CURRENT_FILE);
            fs::remove_file(&marker).map_err(Self::io_err(&marker))?;
        }
        Ok(true)
    }

    fn marker(&self) -> Result<Option<String>, StoreError> {
        let path = self.dir.join(CURRENT_FILE);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        let marker: CurrentProfile =
            toml::from_str(&content).map_err(|source| StoreError::Parse { path, source })?;
        Ok(Some(marker.name))
    }

    /// The remembered current profile, if any
    ///
    /// A marker naming a profile that no longer exists counts as none.
    ///
    /// # Errors
    /// Returns an error if the marker exists but cannot be read or parsed.
    pub fn current(&self) -> Result<Option<String>, StoreError> {
        match self.marker()? {
            Some(name) if self.exists(&name) => Ok(Some(name)),
            Some(name) => {
                log::warn!("current profile {name} no longer exists");
                Ok(None)
            }
            None => Ok(None),
        }
    }

    /// Remember `name` as the current profile
    ///
    /// # Errors
    /// Returns `StoreError::UnknownProfile` if the profile does not exist, or
    /// an error if the marker cannot be written.
    pub fn set_current(&self, name: &str) -> Result<(), StoreError> {
        if !self.exists(name) {
            return Err(StoreError::UnknownProfile(name.to_string()));
        }

        let content = toml::to_string_pretty(&CurrentProfile {
            name: name.to_string(),
        })?;
        let path = self.dir.join(CURRENT_FILE);
        fs::write(&path, content).map_err(Self::io_err(&path))?;
        log::info!("current profile is now {name}");
        Ok(())
    }

    /// Profile to use when none is named: the current one, else `fallback`
    ///
    /// # Errors
    /// See [`ProfileDir::current`].
    pub fn resolve(&self, requested: Option<&str>, fallback: &str) -> Result<String, StoreError> {
        if let Some(name) = requested {
            return Ok(name.to_string());
        }
        Ok(self.current()?.unwrap_or_else(|| fallback.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SessionStore;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "wordle_session_profiles_{name}_{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn missing_directory_has_no_profiles() {
        let profiles = ProfileDir::new(temp_dir("missing"));
        assert!(profiles.list().unwrap().is_empty());
        assert_eq!(profiles.current().unwrap(), None);
        assert_eq!(profiles.resolve(None, "default").unwrap(), "default");
    }

    #[test]
    fn add_list_and_reject_duplicates() {
        let dir = temp_dir("add");
        let profiles = ProfileDir::new(&dir);

        assert!(profiles.add("zoe_1").unwrap());
        assert!(profiles.add("alice").unwrap());
        assert!(!profiles.add("alice").unwrap());
        assert_eq!(profiles.list().unwrap(), vec!["alice", "zoe_1"]);

        let store = FileStore::open(&dir, "alice").unwrap();
        assert_eq!(store.statistics().played, 0);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn add_enforces_name_length() {
        let profiles = ProfileDir::new(temp_dir("length"));
        let long = "x".repeat(25);
        for name in ["abc", long.as_str(), "a b c d"] {
            assert!(matches!(
                profiles.add(name),
                Err(StoreError::InvalidProfile(_))
            ));
        }
    }

    #[test]
    fn current_profile_is_remembered_and_resolved() {
        let dir = temp_dir("current");
        let profiles = ProfileDir::new(&dir);
        profiles.add("alice").unwrap();

        assert!(matches!(
            profiles.set_current("ghost"),
            Err(StoreError::UnknownProfile(_))
        ));

        profiles.set_current("alice").unwrap();
        let reopened = ProfileDir::new(&dir);
        assert_eq!(reopened.current().unwrap().as_deref(), Some("alice"));
        assert_eq!(reopened.resolve(None, "default").unwrap(), "alice");
        assert_eq!(reopened.resolve(Some("bob"), "default").unwrap(), "bob");
        // The marker is not a profile
        assert_eq!(reopened.list().unwrap(), vec!["alice"]);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn deleting_current_profile_forgets_it() {
        let dir = temp_dir("delete");
        let profiles = ProfileDir::new(&dir);
        profiles.add("alice").unwrap();
        profiles.add("bobby").unwrap();
        profiles.set_current("alice").unwrap();

        assert!(profiles.delete("bobby").unwrap());
        assert_eq!(profiles.current().unwrap().as_deref(), Some("alice"));

        assert!(profiles.delete("alice").unwrap());
        assert!(!profiles.delete("alice").unwrap());
        assert_eq!(profiles.current().unwrap(), None);
        assert!(profiles.list().unwrap().is_empty());
        assert!(!dir.join(CURRENT_FILE).exists());

        let _ = fs::remove_dir_all(&dir);
    }
}
