//! Bot configuration: a TOML file with defaults for every field.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid TOML for [`BotConfig`].
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level bot configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BotConfig {
    /// The bot's own display name.
    pub nick: String,
    /// Leading character marking a command line.
    pub command_sentinel: char,
    /// Leading character marking a fact lookup.
    pub fact_sentinel: char,
    /// Whether learn/append require a transport-verified identity.
    pub require_verified: bool,
    /// Nicks granted operator-only actions (forget) regardless of channel
    /// status.
    pub operators: Vec<String>,
    /// Directory for the JSON store. Absent means in-memory only.
    pub data_dir: Option<PathBuf>,
    pub limits: Limits,
}

/// Safety knobs for dispatch and storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    /// Longest fact body accepted by learn/append.
    pub max_fact_len: usize,
    /// Overflow queue capacity per channel.
    pub overflow_cap: usize,
    /// Maximum `$(...)` expansion depth per dispatch.
    pub max_expansion_depth: usize,
    /// Maximum length the expanded line may grow to.
    pub max_expanded_len: usize,
    /// Wall-clock budget for one top-level dispatch.
    pub dispatch_budget_ms: u64,
    /// How long a mini-game stays active before it lapses.
    pub game_timeout_secs: u64,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            nick: "quip".to_string(),
            command_sentinel: '!',
            fact_sentinel: '~',
            require_verified: true,
            operators: Vec::new(),
            data_dir: None,
            limits: Limits::default(),
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_fact_len: 500,
            overflow_cap: 50,
            max_expansion_depth: 8,
            max_expanded_len: 2000,
            dispatch_budget_ms: 3000,
            game_timeout_secs: 300,
        }
    }
}

impl BotConfig {
    /// Load configuration from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), nick = %config.nick, "loaded config");
        Ok(config)
    }

    /// Whether `nick` is a configured operator.
    pub fn is_operator(&self, nick: &str) -> bool {
        self.operators.iter().any(|op| op == nick)
    }
}

impl Limits {
    pub fn dispatch_budget(&self) -> Duration {
        Duration::from_millis(self.dispatch_budget_ms)
    }

    pub fn game_timeout(&self) -> Duration {
        Duration::from_secs(self.game_timeout_secs)
    }
}
