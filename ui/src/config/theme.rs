use engine::TransitionTimings;
use engine::store::{DEFAULT_APPLY_DELAY, DEFAULT_SETTLE_DELAY};
use serde::Deserialize;
use std::path::PathBuf;

/// `[theme]` section
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ThemeSettings {
    /// Registry key used when nothing valid is persisted
    default_key: Option<String>,
    apply_delay_ms: Option<u64>,
    settle_delay_ms: Option<u64>,
    /// Persist the selected theme between runs
    persist: Option<bool>,
    /// File backing the selected-theme slot
    storage_path: Option<PathBuf>,
    /// Extra registry file merged over the built-in themes
    themes_file: Option<PathBuf>,
}

impl ThemeSettings {
    pub fn default_key(&self) -> Option<&str> {
        self.default_key.as_deref()
    }

    pub fn apply_delay_ms(&self) -> u64 {
        self.apply_delay_ms
            .unwrap_or(DEFAULT_APPLY_DELAY.as_millis() as u64)
    }

    pub fn settle_delay_ms(&self) -> u64 {
        self.settle_delay_ms
            .unwrap_or(DEFAULT_SETTLE_DELAY.as_millis() as u64)
    }

    pub fn timings(&self) -> TransitionTimings {
        TransitionTimings::from_millis(self.apply_delay_ms(), self.settle_delay_ms())
    }

    pub fn persist(&self) -> bool {
        self.persist.unwrap_or(true)
    }

    pub fn storage_path(&self) -> Option<&PathBuf> {
        self.storage_path.as_ref()
    }

    pub fn themes_file(&self) -> Option<&PathBuf> {
        self.themes_file.as_ref()
    }

    pub(crate) fn set_persist(&mut self, persist: bool) {
        self.persist = Some(persist);
    }
}
