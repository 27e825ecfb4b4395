//! Builtin capabilities and the static registration list.
//!
//! Discovery is deliberately explicit: every capability is named once in
//! [`builtin_capabilities`], and [`build_registry`] turns that list into the
//! immutable alias table, failing fast on collisions.

use std::sync::Arc;

use crate::bot::registry::{Capability, CommandRegistry, RegistryError};

pub mod coin;
pub mod dice;
pub mod echo;
pub mod eightball;
pub mod fact;
pub mod game;
pub mod karma;
pub mod math;
pub mod more;
pub mod quote;
pub mod rot13;
pub mod sed;
pub mod version;

/// Every capability the bot ships with.
pub fn builtin_capabilities() -> Vec<Arc<dyn Capability>> {
    vec![
        Arc::new(echo::EchoCommand),
        Arc::new(fact::FactCommand),
        Arc::new(quote::QuoteGrabCommand),
        Arc::new(karma::KarmaCommand),
        Arc::new(more::MoreCommand),
        Arc::new(sed::SedCommand),
        Arc::new(dice::DiceCommand),
        Arc::new(coin::CoinCommand),
        Arc::new(rot13::Rot13Command),
        Arc::new(math::MathCommand),
        Arc::new(eightball::EightBallCommand),
        Arc::new(game::MysteryCommand),
        Arc::new(game::RegexGameCommand),
        Arc::new(version::VersionCommand),
    ]
}

/// Build the alias registry from the builtin list.
pub fn build_registry() -> Result<CommandRegistry, RegistryError> {
    builtin_capabilities()
        .into_iter()
        .fold(CommandRegistry::builder(), |builder, cap| {
            builder.register(cap)
        })
        .build()
}

#[cfg(test)]
pub(crate) mod testutil {
    use std::sync::Arc;

    use crate::bot::context::BotContext;
    use crate::bot::event::{Invoker, MessageEvent};
    use crate::config::BotConfig;
    use crate::storage::JsonStore;

    /// A context over an in-memory store with default configuration.
    pub fn context() -> BotContext {
        BotContext::new(BotConfig::default(), Arc::new(JsonStore::in_memory()))
    }

    /// An event from a verified (but non-operator) user in `#test`.
    pub fn event(nick: &str) -> MessageEvent {
        MessageEvent::new("#test", Invoker::new(nick).verified(), "")
    }

    /// An event from an unverified user.
    pub fn unverified_event(nick: &str) -> MessageEvent {
        MessageEvent::new("#test", Invoker::new(nick), "")
    }

    /// Owned argument vector from string literals.
    pub fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::bot::game::SEARCH_DENYLIST;

    use super::*;

    #[test]
    fn test_builtin_registry_builds() {
        let registry = build_registry().expect("builtin aliases must not collide");
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_key_aliases_resolve() {
        let registry = build_registry().unwrap();
        for alias in [
            "echo", "learn", "forget", "fact", "grab", "q", "rq", "karma", "more", "sed", "dice",
            "coin", "rot13", "sqrt", "8ball", "mystery", "regexgame", "version",
        ] {
            assert!(registry.resolve(alias).is_some(), "missing alias {alias}");
        }
    }

    #[test]
    fn test_aliases_of_one_capability_share_behavior_flags() {
        let registry = build_registry().unwrap();
        let fact = registry.resolve("learn").unwrap();
        for &alias in fact.aliases() {
            let resolved = registry.resolve(alias).unwrap();
            assert_eq!(resolved.name(), fact.name());
            assert_eq!(resolved.allows_substitution(), fact.allows_substitution());
        }
    }

    #[test]
    fn test_search_denylist_covers_only_fact_search_aliases() {
        let registry = build_registry().unwrap();
        for &alias in SEARCH_DENYLIST {
            let cap = registry
                .resolve(alias)
                .unwrap_or_else(|| panic!("denylisted alias {alias} must exist"));
            assert_eq!(cap.name(), "learn");
        }
    }

    #[test]
    fn test_substitution_stays_off_for_raw_text_commands() {
        let registry = build_registry().unwrap();
        for alias in ["learn", "append", "sed", "mystery", "regexgame"] {
            assert!(!registry.resolve(alias).unwrap().allows_substitution());
        }
        for alias in ["echo", "q", "karma", "dice"] {
            assert!(registry.resolve(alias).unwrap().allows_substitution());
        }
    }
}
