//! # Quiz History
//!
//! Completed-quiz summaries persisted under the fixed key `quizHistory`.
//!
//! Storage is a small key-value seam (`KeyValueStore`). `FileStore` keeps one
//! JSON file per key in `~/.trivia/`; `MemoryStore` is used in tests.
//! File writes use atomic rename (write `.tmp`, then `rename()`).
//!
//! A missing, unreadable or malformed value loads as an empty history.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::core::quiz::QuizSummary;

pub const HISTORY_KEY: &str = "quizHistory";

/// Number of entries shown on the home screen unless configured otherwise.
pub const DEFAULT_DISPLAY_LIMIT: usize = 5;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// RFC 3339 timestamp of completion.
    pub timestamp: String,
    pub category_label: String,
    pub difficulty: String,
    pub score: usize,
    pub total: usize,
    pub percentage: u8,
}

impl HistoryEntry {
    pub fn from_summary(
        summary: &QuizSummary,
        category_label: &str,
        difficulty: &str,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp: completed_at.to_rfc3339(),
            category_label: category_label.to_string(),
            difficulty: difficulty.to_string(),
            score: summary.score,
            total: summary.total,
            percentage: summary.percentage(),
        }
    }
}

// ============================================================================
// Key-value storage
// ============================================================================

pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> io::Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// One `<key>.json` file per key inside `dir`.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Store rooted at `~/.trivia/`.
    pub fn in_data_dir() -> io::Result<Self> {
        Self::new(data_dir()?)
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

/// Returns `~/.trivia/`.
pub fn data_dir() -> io::Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?;
    Ok(home.join(".trivia"))
}

/// Atomically write `contents` to `path` (via `.tmp` + rename).
fn atomic_write(path: &Path, contents: &str) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, contents)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(path).map(Some)
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        atomic_write(&self.path_for(key), value)
    }
}

#[derive(Default, Debug)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ============================================================================
// History store
// ============================================================================

/// In-memory cache of the history plus the storage it is written back to.
pub struct HistoryStore {
    storage: Box<dyn KeyValueStore>,
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// Loads the history once. Bad data degrades to an empty list.
    pub fn load(storage: Box<dyn KeyValueStore>) -> Self {
        let entries = match storage.get(HISTORY_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<Vec<HistoryEntry>>(&json) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Stored quiz history is malformed, starting empty: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read quiz history, starting empty: {}", e);
                Vec::new()
            }
        };
        debug!("Loaded {} history entries", entries.len());
        Self { storage, entries }
    }

    /// History that lives only in memory.
    pub fn in_memory() -> Self {
        Self::load(Box::new(MemoryStore::new()))
    }

    /// Appends `entry` and writes the whole sequence back.
    pub fn record(&mut self, entry: HistoryEntry) -> io::Result<()> {
        self.entries.push(entry);
        self.persist()
    }

    /// Most recent `limit` entries (all if `None`), newest first.
    pub fn list(&self, limit: Option<usize>) -> Vec<HistoryEntry> {
        let limit = limit.unwrap_or(self.entries.len());
        self.entries.iter().rev().take(limit).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Empties the history. Callers gate this behind a user confirmation.
    pub fn clear(&mut self) -> io::Result<()> {
        self.entries.clear();
        self.persist()?;
        info!("Quiz history cleared");
        Ok(())
    }

    /// Raw persisted value, for diagnostics and tests.
    pub fn stored_value(&self) -> io::Result<Option<String>> {
        self.storage.get(HISTORY_KEY)
    }

    fn persist(&mut self) -> io::Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.storage.set(HISTORY_KEY, &json)
    }
}
