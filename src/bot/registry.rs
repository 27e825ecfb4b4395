//! Alias registry: maps command tokens to registered capabilities.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use super::context::BotContext;
use super::event::MessageEvent;
use super::response::Response;

/// Handler trait every builtin command implements.
///
/// A capability is registered once at startup, lives for the process
/// lifetime, and must be safe to call from concurrent dispatches.
pub trait Capability: Send + Sync {
    /// Tokens this capability answers to. Must be non-empty; every token
    /// must be unique across the whole registry.
    fn aliases(&self) -> &'static [&'static str];

    /// Canonical name, used in logs and the `check` listing.
    fn name(&self) -> &'static str {
        self.aliases().first().copied().unwrap_or("<unnamed>")
    }

    /// Whether the line is passed through `$(...)`/`$USER` expansion before
    /// this capability runs. Commands that store user text verbatim (learn,
    /// append) keep this off so literal `$(` sequences survive.
    fn allows_substitution(&self) -> bool {
        true
    }

    /// Handle one invocation. `args[0]` is the alias token the user typed,
    /// with the command sentinel already stripped.
    fn execute(&self, ctx: &BotContext, event: &MessageEvent, args: &[String]) -> Response;
}

/// Errors raised while building the registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Two capabilities declared the same alias. Silent shadowing is not
    /// allowed; startup fails and names every colliding token.
    #[error("duplicate command aliases: {}", aliases.join(", "))]
    DuplicateAliases { aliases: Vec<String> },

    /// A capability declared no aliases at all.
    #[error("capability {0:?} declares no aliases")]
    EmptyAliasSet(&'static str),
}

/// Immutable alias-to-capability mapping, built once at startup.
///
/// Reads are lock-free; the registry is shared as an `Arc` across all
/// concurrent dispatch calls.
pub struct CommandRegistry {
    by_alias: HashMap<&'static str, Arc<dyn Capability>>,
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut aliases: Vec<&&'static str> = self.by_alias.keys().collect();
        aliases.sort();
        f.debug_struct("CommandRegistry")
            .field("aliases", &aliases)
            .finish()
    }
}

impl CommandRegistry {
    /// Start building a registry.
    pub fn builder() -> CommandRegistryBuilder {
        CommandRegistryBuilder {
            capabilities: Vec::new(),
        }
    }

    /// Look up the capability registered for `token`. Case-sensitive.
    pub fn resolve(&self, token: &str) -> Option<Arc<dyn Capability>> {
        self.by_alias.get(token).cloned()
    }

    /// All registered aliases, sorted, each with its capability name and
    /// substitution flag.
    pub fn alias_table(&self) -> Vec<(String, &'static str, bool)> {
        let mut rows: Vec<_> = self
            .by_alias
            .iter()
            .map(|(alias, cap)| (alias.to_string(), cap.name(), cap.allows_substitution()))
            .collect();
        rows.sort();
        rows
    }

    /// Number of registered aliases.
    pub fn len(&self) -> usize {
        self.by_alias.len()
    }

    /// Whether nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.by_alias.is_empty()
    }
}

/// Collects capabilities, then validates the alias table in one pass.
pub struct CommandRegistryBuilder {
    capabilities: Vec<Arc<dyn Capability>>,
}

impl CommandRegistryBuilder {
    /// Queue a capability for registration.
    pub fn register(mut self, capability: Arc<dyn Capability>) -> Self {
        self.capabilities.push(capability);
        self
    }

    /// Build the registry, rejecting empty alias sets and collisions.
    pub fn build(self) -> Result<CommandRegistry, RegistryError> {
        let mut by_alias: HashMap<&'static str, Arc<dyn Capability>> = HashMap::new();
        let mut collisions = Vec::new();

        for cap in self.capabilities {
            if cap.aliases().is_empty() {
                return Err(RegistryError::EmptyAliasSet(cap.name()));
            }
            for &alias in cap.aliases() {
                if by_alias.insert(alias, cap.clone()).is_some() {
                    collisions.push(alias.to_string());
                }
            }
            tracing::debug!(capability = cap.name(), aliases = ?cap.aliases(), "registered");
        }

        if !collisions.is_empty() {
            collisions.sort();
            collisions.dedup();
            return Err(RegistryError::DuplicateAliases {
                aliases: collisions,
            });
        }

        Ok(CommandRegistry { by_alias })
    }
}
