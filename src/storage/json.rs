//! JSON-file-backed store: one pretty-printed file, rewritten on mutation.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::Utc;
use parking_lot::Mutex;
use rand::seq::{IteratorRandom, SliceRandom};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{BotStore, Fact, Quote};

const STORE_FILE: &str = "store.json";

/// Errors raised while opening a store file.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The store file exists but could not be read.
    #[error("failed to read store file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The store file is not valid JSON for this schema.
    #[error("store file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct StoreData {
    next_fact_id: u64,
    facts: BTreeMap<String, Fact>,
    next_quote_id: u64,
    quotes: Vec<Quote>,
    karma: BTreeMap<String, i64>,
}

/// All bot data in one mutex-guarded table set, persisted to
/// `<data_dir>/store.json` after every mutation. With no backing path the
/// store is purely in-memory.
pub struct JsonStore {
    path: Option<PathBuf>,
    data: Mutex<StoreData>,
}

impl JsonStore {
    /// An in-memory store that never touches disk.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            data: Mutex::new(StoreData::default()),
        }
    }

    /// Open (or create) the store under `data_dir`.
    pub fn open(data_dir: &Path) -> Result<Self, StorageError> {
        let path = data_dir.join(STORE_FILE);
        let data = match std::fs::read_to_string(&path) {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|source| StorageError::Corrupt {
                    path: path.clone(),
                    source,
                })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => StoreData::default(),
            Err(source) => return Err(StorageError::Io { path, source }),
        };
        tracing::debug!(path = %path.display(), "opened store");
        Ok(Self {
            path: Some(path),
            data: Mutex::new(data),
        })
    }

    /// Write the current tables back to disk. Failures are logged, not
    /// surfaced; the in-memory state stays authoritative for the session.
    fn persist(&self, data: &StoreData) {
        let Some(path) = &self.path else {
            return;
        };
        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            tracing::warn!(path = %path.display(), error = %e, "failed to create data dir");
            return;
        }
        match serde_json::to_string_pretty(data) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    tracing::warn!(path = %path.display(), error = %e, "failed to write store");
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize store");
            }
        }
    }
}

impl BotStore for JsonStore {
    fn fact_lookup(&self, key: &str) -> Option<String> {
        self.data.lock().facts.get(key).map(|f| f.body.clone())
    }

    fn fact_store(&self, key: &str, body: &str, author: &str) -> bool {
        let mut data = self.data.lock();
        if data.facts.contains_key(key) {
            return false;
        }
        data.next_fact_id += 1;
        let fact = Fact {
            id: data.next_fact_id,
            key: key.to_string(),
            body: body.to_string(),
            added_by: author.to_string(),
            added_at: Utc::now(),
        };
        data.facts.insert(key.to_string(), fact);
        self.persist(&data);
        true
    }

    fn fact_append(&self, key: &str, extra: &str) -> bool {
        let mut data = self.data.lock();
        let Some(fact) = data.facts.get_mut(key) else {
            return false;
        };
        fact.body.push(' ');
        fact.body.push_str(extra);
        self.persist(&data);
        true
    }

    fn fact_delete(&self, key: &str) -> bool {
        let mut data = self.data.lock();
        let removed = data.facts.remove(key).is_some();
        if removed {
            self.persist(&data);
        }
        removed
    }

    fn fact_random(&self) -> Option<Fact> {
        self.data
            .lock()
            .facts
            .values()
            .choose(&mut rand::thread_rng())
            .cloned()
    }

    fn fact_search(&self, needle: &str) -> Vec<Fact> {
        self.data
            .lock()
            .facts
            .values()
            .filter(|f| f.body.contains(needle))
            .cloned()
            .collect()
    }

    fn fact_info(&self, key: &str) -> Option<Fact> {
        self.data.lock().facts.get(key).cloned()
    }

    fn quote_grab(&self, nick: &str, text: &str, grabber: &str) -> u64 {
        let mut data = self.data.lock();
        data.next_quote_id += 1;
        let id = data.next_quote_id;
        data.quotes.push(Quote {
            id,
            nick: nick.to_string(),
            text: text.to_string(),
            grabbed_by: grabber.to_string(),
            grabbed_at: Utc::now(),
        });
        self.persist(&data);
        id
    }

    fn quote_by_id(&self, id: u64) -> Option<Quote> {
        self.data.lock().quotes.iter().find(|q| q.id == id).cloned()
    }

    fn quote_random(&self) -> Option<Quote> {
        self.data.lock().quotes.choose(&mut rand::thread_rng()).cloned()
    }

    fn quote_random_for(&self, nick: &str) -> Option<Quote> {
        self.data
            .lock()
            .quotes
            .iter()
            .filter(|q| q.nick == nick)
            .choose(&mut rand::thread_rng())
            .cloned()
    }

    fn quote_search(&self, needle: &str) -> Vec<Quote> {
        self.data
            .lock()
            .quotes
            .iter()
            .filter(|q| q.text.contains(needle))
            .cloned()
            .collect()
    }

    fn karma_get(&self, name: &str) -> i64 {
        self.data.lock().karma.get(name).copied().unwrap_or(0)
    }

    fn karma_adjust(&self, name: &str, delta: i64) -> i64 {
        let mut data = self.data.lock();
        let total = data
            .karma
            .entry(name.to_string())
            .and_modify(|v| *v += delta)
            .or_insert(delta);
        let total = *total;
        self.persist(&data);
        total
    }
}
