//! Persistent store for the application state and the activity log.
//!
//! Two versioned JSON files under one data directory are the single source
//! of truth. Reads are infallible: missing or malformed data falls back to
//! defaults (state) or an empty list (log), and partially-valid state merges
//! over defaults field by field. Writes overwrite the whole record and can
//! fail with real I/O errors.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{PraxisError, Result};
use crate::log::LogEntry;
use crate::merge::deep_merge;
use crate::state::AppState;

const DATA_DIR_NAME: &str = "praxis";
const STATE_FILE: &str = "state_v1.json";
const LOG_FILE: &str = "log_v1.json";

pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Store rooted at the platform data directory (e.g.
    /// `~/.local/share/praxis`).
    pub fn new() -> Result<Self> {
        let base = dirs::data_dir().ok_or(PraxisError::NoDataDir)?;
        Ok(Self::with_dir(base.join(DATA_DIR_NAME)))
    }

    /// Store rooted at an explicit directory (config override, tests).
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn state_path(&self) -> PathBuf {
        self.dir.join(STATE_FILE)
    }

    fn log_path(&self) -> PathBuf {
        self.dir.join(LOG_FILE)
    }

    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    /// Load the application state. Never fails: a missing or unreadable file
    /// yields defaults, and a readable record is merged over defaults so
    /// absent fields (including nested preference fields) fall back cleanly.
    pub fn load_state(&self) -> AppState {
        let raw = match fs::read_to_string(self.state_path()) {
            Ok(raw) => raw,
            Err(_) => return AppState::default(),
        };
        let stored: Value = match serde_json::from_str(&raw) {
            Ok(value @ Value::Object(_)) => value,
            _ => return AppState::default(),
        };

        let mut merged = match serde_json::to_value(AppState::default()) {
            Ok(defaults) => defaults,
            Err(_) => return AppState::default(),
        };
        deep_merge(&mut merged, stored);
        serde_json::from_value(merged).unwrap_or_default()
    }

    /// Persist the full state record, overwriting the prior value.
    pub fn save_state(&self, state: &AppState) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(state)?;
        fs::write(self.state_path(), content)?;
        Ok(())
    }

    /// Load the activity log, newest first. Missing or malformed data yields
    /// an empty log; individually malformed entries are skipped rather than
    /// discarding the readable rest.
    pub fn load_log(&self) -> Vec<LogEntry> {
        let raw = match fs::read_to_string(self.log_path()) {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };
        let items: Vec<Value> = match serde_json::from_str(&raw) {
            Ok(Value::Array(items)) => items,
            _ => return Vec::new(),
        };
        items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect()
    }

    /// Persist the full log, overwriting the prior value.
    pub fn save_log(&self, entries: &[LogEntry]) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(entries)?;
        fs::write(self.log_path(), content)?;
        Ok(())
    }

    /// First-boot initialization: write default records for any file that is
    /// absent, leaving existing data untouched.
    pub fn init_if_absent(&self) -> Result<()> {
        if !self.state_path().exists() {
            self.save_state(&AppState::default())?;
        }
        if !self.log_path().exists() {
            self.save_log(&[])?;
        }
        Ok(())
    }

    /// Delete both records and reinitialize them to defaults.
    pub fn clear(&self) -> Result<()> {
        for path in [self.state_path(), self.log_path()] {
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        self.save_state(&AppState::default())?;
        self.save_log(&[])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::{LogEntry, LogKind};
    use crate::state::{LastStop, Mode, Route};
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> Store {
        Store::with_dir(dir.path().join("praxis"))
    }

    #[test]
    fn missing_state_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.load_state(), AppState::default());
    }

    #[test]
    fn malformed_state_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::create_dir_all(store.dir()).unwrap();

        for blob in ["", "{not json", "[1,2,3]", "\"just a string\"", "42"] {
            fs::write(store.state_path(), blob).unwrap();
            assert_eq!(store.load_state(), AppState::default(), "blob: {blob:?}");
        }
    }

    #[test]
    fn partial_state_merges_over_defaults() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::create_dir_all(store.dir()).unwrap();
        fs::write(
            store.state_path(),
            r#"{"route":"calm","preferences":{"preferred_mode":"movement"}}"#,
        )
        .unwrap();

        let state = store.load_state();
        assert_eq!(state.route, Route::Calm);
        assert_eq!(state.preferences.preferred_mode, Mode::Movement);
        // Everything absent from the file keeps its default.
        assert_eq!(state.preferences.last_plan_choice, None);
        assert_eq!(state.last_stop, LastStop::Forward { sub: None });
        assert_eq!(state.last_visited, None);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut state = AppState::default();
        state.route = Route::Urge;
        state.last_stop = LastStop::Urge;
        store.save_state(&state).unwrap();

        assert_eq!(store.load_state(), state);
    }

    #[test]
    fn save_load_save_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut state = AppState::default();
        state.route = Route::Forward;
        store.save_state(&state).unwrap();

        let loaded = store.load_state();
        store.save_state(&loaded).unwrap();
        assert_eq!(store.load_state(), loaded);
    }

    #[test]
    fn missing_or_malformed_log_yields_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.load_log().is_empty());

        fs::create_dir_all(store.dir()).unwrap();
        fs::write(store.log_path(), "{\"oops\":true}").unwrap();
        assert!(store.load_log().is_empty());
    }

    #[test]
    fn malformed_log_entries_are_skipped() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let entry = LogEntry::now(LogKind::Win, "Move Forward Win", "did the thing");
        store.save_log(std::slice::from_ref(&entry)).unwrap();

        // Splice garbage into the stored array.
        let raw = fs::read_to_string(store.log_path()).unwrap();
        let mut items: Vec<Value> = serde_json::from_str(&raw).unwrap();
        items.push(Value::String("not an entry".into()));
        fs::write(store.log_path(), serde_json::to_string(&items).unwrap()).unwrap();

        let log = store.load_log();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0], entry);
    }

    #[test]
    fn init_if_absent_is_non_destructive() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.init_if_absent().unwrap();
        assert_eq!(store.load_state(), AppState::default());
        assert!(store.load_log().is_empty());

        let mut state = AppState::default();
        state.route = Route::Calm;
        store.save_state(&state).unwrap();

        store.init_if_absent().unwrap();
        assert_eq!(store.load_state().route, Route::Calm);
    }

    #[test]
    fn clear_resets_both_records() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut state = AppState::default();
        state.route = Route::Forward;
        store.save_state(&state).unwrap();
        store
            .save_log(&[LogEntry::now(LogKind::System, "something", "")])
            .unwrap();

        store.clear().unwrap();
        assert_eq!(store.load_state(), AppState::default());
        assert!(store.load_log().is_empty());
        // Cleared, not deleted: the files exist again with defaults.
        assert!(store.state_path().exists());
        assert!(store.log_path().exists());
    }
}
