//! Shared bot context: configuration, storage, and per-channel state.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::BotConfig;
use crate::storage::BotStore;

use super::event::Invoker;
use super::game::GameState;
use super::history::RecentLines;
use super::more::OverflowQueue;

/// Mutable state scoped to one channel, guarded by a single mutex so racing
/// dispatches serialize their game transitions and queue updates.
#[derive(Debug)]
pub struct ChannelState {
    pub game: GameState,
    pub overflow: OverflowQueue,
    pub history: RecentLines,
}

impl ChannelState {
    fn new(config: &BotConfig) -> Self {
        Self {
            game: GameState::Idle,
            overflow: OverflowQueue::new(config.limits.overflow_cap),
            history: RecentLines::default(),
        }
    }
}

/// Everything a capability can reach while handling a line. Built once at
/// startup and shared across all concurrent dispatch calls.
pub struct BotContext {
    pub config: BotConfig,
    pub store: Arc<dyn BotStore>,
    channels: Mutex<HashMap<String, Arc<Mutex<ChannelState>>>>,
}

impl BotContext {
    pub fn new(config: BotConfig, store: Arc<dyn BotStore>) -> Self {
        Self {
            config,
            store,
            channels: Mutex::new(HashMap::new()),
        }
    }

    /// The state object for `channel`, created on first use.
    pub fn channel(&self, channel: &str) -> Arc<Mutex<ChannelState>> {
        let mut channels = self.channels.lock();
        channels
            .entry(channel.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(ChannelState::new(&self.config))))
            .clone()
    }

    /// Record a non-command line for later sed corrections and quote grabs.
    /// Called by the transport's passive path.
    pub fn record_chat_line(&self, channel: &str, nick: &str, text: &str) {
        let state = self.channel(channel);
        state.lock().history.record(nick, text);
    }

    /// Whether the invoker may run operator-gated commands: channel operator
    /// status or a configured operator nick.
    pub fn is_operator(&self, invoker: &Invoker) -> bool {
        invoker.operator || self.config.is_operator(&invoker.nick)
    }
}

#[cfg(test)]
mod tests {
    use crate::storage::JsonStore;

    use super::*;

    fn context() -> BotContext {
        BotContext::new(BotConfig::default(), Arc::new(JsonStore::in_memory()))
    }

    #[test]
    fn test_channel_state_is_shared() {
        let ctx = context();
        ctx.channel("#a").lock().overflow.push("queued");
        assert_eq!(
            ctx.channel("#a").lock().overflow.pop().as_deref(),
            Some("queued")
        );
    }

    #[test]
    fn test_channels_are_isolated() {
        let ctx = context();
        ctx.channel("#a").lock().overflow.push("queued");
        assert!(ctx.channel("#b").lock().overflow.is_empty());
    }

    #[test]
    fn test_record_chat_line() {
        let ctx = context();
        ctx.record_chat_line("#a", "alice", "hello world");
        let state = ctx.channel("#a");
        assert_eq!(state.lock().history.last_for("alice"), Some("hello world"));
    }

    #[test]
    fn test_operator_via_config_or_status() {
        let mut config = BotConfig::default();
        config.operators.push("alice".to_string());
        let ctx = BotContext::new(config, Arc::new(JsonStore::in_memory()));
        assert!(ctx.is_operator(&Invoker::new("alice")));
        assert!(ctx.is_operator(&Invoker::new("bob").operator()));
        assert!(!ctx.is_operator(&Invoker::new("bob")));
    }
}
