//! Leaderboard
//!
//! The whole board is persisted read-modify-write as one JSON array under
//! a single LocalStorage key, always sorted descending by score. The
//! import/export text format is the same JSON array, so an exported board
//! pastes straight back in.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// LocalStorage key (used only in wasm32)
#[allow(dead_code)]
const STORAGE_KEY: &str = "safety_catch_leaderboard";

/// Errors surfaced by the score store. Storage *read* failures are not
/// here on purpose: a missing or corrupt board loads as empty.
#[derive(Error, Debug)]
pub enum ScoreStoreError {
    #[error("leaderboard text is not a valid record list: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
    #[error("a {0} is required to save a score")]
    MissingField(&'static str),
}

/// A single saved run, immutable once stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub name: String,
    pub dept: String,
    pub score: u32,
    #[serde(rename = "dateISO")]
    pub date_iso: String,
}

impl ScoreRecord {
    /// Build a record, rejecting blank name or department
    pub fn validated(
        name: &str,
        dept: &str,
        score: u32,
        date_iso: String,
    ) -> Result<Self, ScoreStoreError> {
        let name = name.trim();
        let dept = dept.trim();
        if name.is_empty() {
            return Err(ScoreStoreError::MissingField("name"));
        }
        if dept.is_empty() {
            return Err(ScoreStoreError::MissingField("department"));
        }
        Ok(Self {
            name: name.to_string(),
            dept: dept.to_string(),
            score,
            date_iso,
        })
    }
}

/// Score-sorted collection of player records. Only the record list goes
/// over the wire; the wrapper itself is never serialized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Leaderboard {
    pub records: Vec<ScoreRecord>,
}

impl Leaderboard {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Stable sort, highest score first
    fn sort(&mut self) {
        self.records.sort_by(|a, b| b.score.cmp(&a.score));
    }

    /// Append a record, re-sort, and persist the whole board
    pub fn save(&mut self, record: ScoreRecord) {
        self.records.push(record);
        self.sort();
        self.persist();
        log::info!("Score saved ({} records)", self.records.len());
    }

    /// Erase all stored records. The UI confirms before calling this.
    pub fn clear(&mut self) {
        self.records.clear();
        self.persist();
        log::info!("Leaderboard cleared");
    }

    /// Serialize the board as human-copyable text
    pub fn export(&self) -> String {
        serde_json::to_string_pretty(&self.records).unwrap_or_else(|_| "[]".to_string())
    }

    /// Parse `text` as a record list and merge it in. Null entries in the
    /// source array are dropped. On parse failure nothing changes.
    pub fn import(&mut self, text: &str) -> Result<usize, ScoreStoreError> {
        let incoming = parse_records(text)?;
        let count = incoming.len();
        self.records.extend(incoming);
        self.sort();
        self.persist();
        log::info!("Imported {count} records");
        Ok(count)
    }

    /// Load the stored board; absence or corruption reads as empty
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage
            && let Ok(Some(json)) = storage.get_item(STORAGE_KEY)
        {
            if let Ok(records) = serde_json::from_str::<Vec<ScoreRecord>>(&json) {
                log::info!("Loaded {} leaderboard records", records.len());
                let mut board = Self { records };
                board.sort();
                return board;
            }
            log::info!("Stored leaderboard was unreadable, starting fresh");
        }

        Self::new()
    }

    /// Write the whole board back to LocalStorage
    #[cfg(target_arch = "wasm32")]
    fn persist(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage
            && let Ok(json) = serde_json::to_string(&self.records)
        {
            let _ = storage.set_item(STORAGE_KEY, &json);
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn persist(&self) {
        // No-op for native
    }
}

/// Parse import text: a JSON array of records in which empty slots may be
/// null (they are filtered out, matching the persisted shape)
fn parse_records(text: &str) -> Result<Vec<ScoreRecord>, ScoreStoreError> {
    let parsed: Vec<Option<ScoreRecord>> = serde_json::from_str(text)?;
    Ok(parsed.into_iter().flatten().collect())
}
