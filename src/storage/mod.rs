//! Persistence boundary: facts, quote grabs, karma, and game scoring.
//!
//! Everything here is synchronous and absence-returning: a failed or empty
//! query yields `None`/`false`/an empty vec, never an error the dispatcher
//! would have to handle. Write failures are logged by the implementation.

pub mod json;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use json::JsonStore;

/// A stored fact: a named template string retrievable by key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fact {
    pub id: u64,
    pub key: String,
    pub body: String,
    pub added_by: String,
    pub added_at: DateTime<Utc>,
}

impl Fact {
    /// One-line rendering used for search results.
    pub fn display_line(&self) -> String {
        format!("({}) {}: {}", self.id, self.key, self.body)
    }

    /// Metadata rendering used by `factinfo`.
    pub fn info_line(&self) -> String {
        format!(
            "({}) {}: added by {} on {}",
            self.id,
            self.key,
            self.added_by,
            self.added_at.format("%Y-%m-%d")
        )
    }
}

/// A grabbed quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub id: u64,
    pub nick: String,
    pub text: String,
    pub grabbed_by: String,
    pub grabbed_at: DateTime<Utc>,
}

impl Quote {
    /// One-line rendering with attribution.
    pub fn display_line(&self) -> String {
        format!("({}) <{}> {}", self.id, self.nick, self.text)
    }

    /// Metadata rendering used by `qinfo`.
    pub fn info_line(&self) -> String {
        format!(
            "({}) <{}> grabbed by {} on {}",
            self.id,
            self.nick,
            self.grabbed_by,
            self.grabbed_at.format("%Y-%m-%d")
        )
    }
}

/// The storage contract the routing engine consumes.
pub trait BotStore: Send + Sync {
    /// Body of the fact stored under `key`.
    fn fact_lookup(&self, key: &str) -> Option<String>;
    /// Store a new fact. Returns false (and stores nothing) when the key
    /// already exists.
    fn fact_store(&self, key: &str, body: &str, author: &str) -> bool;
    /// Append to an existing fact body, separated by a space. Returns false
    /// when the key does not exist.
    fn fact_append(&self, key: &str, extra: &str) -> bool;
    /// Delete a fact. Returns whether anything was removed.
    fn fact_delete(&self, key: &str) -> bool;
    /// A uniformly random fact, if any exist.
    fn fact_random(&self) -> Option<Fact>;
    /// Facts whose body contains `needle`, ordered by key.
    fn fact_search(&self, needle: &str) -> Vec<Fact>;
    /// Full record for `key`.
    fn fact_info(&self, key: &str) -> Option<Fact>;

    /// Record a quote; returns its assigned id.
    fn quote_grab(&self, nick: &str, text: &str, grabber: &str) -> u64;
    fn quote_by_id(&self, id: u64) -> Option<Quote>;
    fn quote_random(&self) -> Option<Quote>;
    /// A random quote attributed to `nick`.
    fn quote_random_for(&self, nick: &str) -> Option<Quote>;
    /// Quotes whose text contains `needle`, oldest first.
    fn quote_search(&self, needle: &str) -> Vec<Quote>;

    fn karma_get(&self, name: &str) -> i64;
    /// Add `delta` to `name`'s karma and return the new total.
    fn karma_adjust(&self, name: &str, delta: i64) -> i64;

    /// Scoring hook for the guessing game.
    fn award_point(&self, nick: &str) -> i64 {
        self.karma_adjust(nick, 1)
    }
}
