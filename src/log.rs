//! Append-only activity log, newest first.
//!
//! Entries are only ever created through [`Logbook::append`]; nothing updates
//! or removes an individual entry. The whole log can be exported as a JSON
//! snapshot or cleared through the store.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{PraxisError, Result};
use crate::store::Store;

/// Category tag for a log entry. The set is open-ended on disk: unknown
/// stored tags survive as [`LogKind::Other`] instead of failing the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LogKind {
    /// A quick action was completed.
    Action,
    /// The Move Forward mode was set.
    ModeSet,
    /// A Plan Today lane was chosen.
    PlanChoice,
    /// A clarify suggestion was picked.
    Clarify,
    /// A free-form win was logged.
    Win,
    /// System event (clear, maintenance).
    System,
    /// A tag written by some other version of the tool.
    Other(String),
}

impl LogKind {
    pub fn token(&self) -> &str {
        match self {
            LogKind::Action => "action",
            LogKind::ModeSet => "mode-set",
            LogKind::PlanChoice => "plan-choice",
            LogKind::Clarify => "clarify",
            LogKind::Win => "win",
            LogKind::System => "system",
            LogKind::Other(token) => token,
        }
    }
}

impl From<String> for LogKind {
    fn from(token: String) -> Self {
        match token.as_str() {
            "action" => LogKind::Action,
            "mode-set" => LogKind::ModeSet,
            "plan-choice" => LogKind::PlanChoice,
            "clarify" => LogKind::Clarify,
            "win" => LogKind::Win,
            "system" => LogKind::System,
            _ => LogKind::Other(token),
        }
    }
}

impl From<LogKind> for String {
    fn from(kind: LogKind) -> Self {
        kind.token().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: Uuid,
    pub at: DateTime<Utc>,
    pub kind: LogKind,
    pub title: String,
    #[serde(default)]
    pub note: String,
}

impl LogEntry {
    /// Fresh entry stamped now. The note is trimmed; it may end up empty.
    pub fn now(kind: LogKind, title: &str, note: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            at: Utc::now(),
            kind,
            title: title.to_string(),
            note: note.trim().to_string(),
        }
    }
}

/// Log service over the store.
pub struct Logbook<'a> {
    store: &'a Store,
}

impl<'a> Logbook<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Append an entry to the front of the log and persist. Newest-first
    /// ordering is the invariant every reader relies on.
    pub fn append(&self, kind: LogKind, title: &str, note: &str) -> Result<LogEntry> {
        let entry = LogEntry::now(kind, title, note);
        let mut items = self.store.load_log();
        items.insert(0, entry.clone());
        self.store.save_log(&items)?;
        Ok(entry)
    }

    pub fn all(&self) -> Vec<LogEntry> {
        self.store.load_log()
    }

    /// The newest `n` entries.
    pub fn recent(&self, n: usize) -> Vec<LogEntry> {
        let mut items = self.store.load_log();
        items.truncate(n);
        items
    }

    /// Write the full log as a pretty JSON snapshot. With no explicit target
    /// the file lands in the current directory as `praxis-log-<date>.json`.
    /// Refuses to overwrite an existing file.
    pub fn export(&self, target: Option<PathBuf>) -> Result<PathBuf> {
        let target = target.unwrap_or_else(|| {
            PathBuf::from(format!("praxis-log-{}.json", Utc::now().format("%Y%m%d")))
        });
        if target.exists() {
            return Err(PraxisError::ExportTargetExists(target));
        }
        let items = self.store.load_log();
        fs::write(&target, serde_json::to_string_pretty(&items)?)?;
        Ok(target)
    }
}
