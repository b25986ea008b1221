//! Persisted progress storage.
//!
//! Three maps keyed by page id: completion stars, unique-paint counts,
//! and a legacy mirrored click count kept for parity with older state
//! files. Storage failures are absorbed: reads fall back to empty and
//! writes become no-ops, degrading progress tracking to memory-only for
//! the session.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The serialized state file shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressRecords {
    #[serde(default)]
    pub stars: HashMap<String, bool>,
    #[serde(default)]
    pub unique: HashMap<String, u32>,
    #[serde(default)]
    pub clicks: HashMap<String, u32>,
}

impl ProgressRecords {
    fn starred(&self, page: &str) -> bool {
        self.stars.get(page).copied().unwrap_or(false)
    }

    fn stars_total(&self) -> usize {
        self.stars.values().filter(|&&v| v).count()
    }
}

/// Key-value progress persistence.
///
/// Methods take `&mut self` because file-backed implementations re-read
/// the backing store on every access (another session may have written
/// the same keys, see the session design notes).
pub trait ProgressStore {
    fn star(&mut self, page: &str) -> bool;
    fn set_star(&mut self, page: &str);
    fn unique_count(&mut self, page: &str) -> u32;
    fn set_unique_count(&mut self, page: &str, count: u32);
    fn clicks(&mut self, page: &str) -> u32;
    fn set_clicks(&mut self, page: &str, count: u32);
    /// Number of pages holding an award.
    fn stars_total(&mut self) -> usize;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: ProgressRecords,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryStore {
    fn star(&mut self, page: &str) -> bool {
        self.records.starred(page)
    }

    fn set_star(&mut self, page: &str) {
        self.records.stars.insert(page.to_string(), true);
    }

    fn unique_count(&mut self, page: &str) -> u32 {
        self.records.unique.get(page).copied().unwrap_or(0)
    }

    fn set_unique_count(&mut self, page: &str, count: u32) {
        self.records.unique.insert(page.to_string(), count);
    }

    fn clicks(&mut self, page: &str) -> u32 {
        self.records.clicks.get(page).copied().unwrap_or(0)
    }

    fn set_clicks(&mut self, page: &str, count: u32) {
        self.records.clicks.insert(page.to_string(), count);
    }

    fn stars_total(&mut self) -> usize {
        self.records.stars_total()
    }
}

/// JSON-file-backed store.
///
/// Every access is read-modify-write against the file, with no batching;
/// a failed read acts as an empty state and a failed write is logged and
/// dropped.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> ProgressRecords {
        let Ok(text) = fs::read_to_string(&self.path) else {
            return ProgressRecords::default();
        };
        match serde_json::from_str(&text) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "unreadable state file, starting empty");
                ProgressRecords::default()
            }
        }
    }

    fn update(&self, mutate: impl FnOnce(&mut ProgressRecords)) {
        let mut records = self.load();
        mutate(&mut records);
        match serde_json::to_string_pretty(&records) {
            Ok(json) => {
                if let Err(e) = fs::write(&self.path, json) {
                    tracing::warn!(path = %self.path.display(), error = %e, "progress write failed");
                }
            }
            Err(e) => tracing::warn!(error = %e, "progress serialization failed"),
        }
    }
}

impl ProgressStore for JsonStore {
    fn star(&mut self, page: &str) -> bool {
        self.load().starred(page)
    }

    fn set_star(&mut self, page: &str) {
        self.update(|r| {
            r.stars.insert(page.to_string(), true);
        });
    }

    fn unique_count(&mut self, page: &str) -> u32 {
        self.load().unique.get(page).copied().unwrap_or(0)
    }

    fn set_unique_count(&mut self, page: &str, count: u32) {
        self.update(|r| {
            r.unique.insert(page.to_string(), count);
        });
    }

    fn clicks(&mut self, page: &str) -> u32 {
        self.load().clicks.get(page).copied().unwrap_or(0)
    }

    fn set_clicks(&mut self, page: &str, count: u32) {
        self.update(|r| {
            r.clicks.insert(page.to_string(), count);
        });
    }

    fn stars_total(&mut self) -> usize {
        self.load().stars_total()
    }
}
