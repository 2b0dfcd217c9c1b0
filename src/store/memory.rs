//! In-memory store

use super::{SessionStore, Settings, Statistics, StoreError};
use crate::session::SessionBlob;

/// Store that keeps everything in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub session: SessionBlob,
    pub stats: Statistics,
    pub settings: Settings,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load_state(&self) -> Result<Option<SessionBlob>, StoreError> {
        Ok(self.session.is_present().then(|| self.session.clone()))
    }

    fn save_state(&mut self, blob: &SessionBlob) -> Result<(), StoreError> {
        self.session = blob.clone();
        Ok(())
    }

    fn record_win(&mut self, attempt: usize) -> Result<(), StoreError> {
        self.stats.record_win(attempt)
    }

    fn record_loss(&mut self) -> Result<(), StoreError> {
        self.stats.record_loss();
        Ok(())
    }

    fn statistics(&self) -> Statistics {
        self.stats.clone()
    }

    fn settings(&self) -> Settings {
        self.settings
    }

    fn set_autosave(&mut self, enabled: bool) -> Result<(), StoreError> {
        self.settings.autosave = enabled;
        Ok(())
    }
}
