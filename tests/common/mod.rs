//! Shared helpers for integration tests: a dispatcher over an in-memory
//! store, and ways to speak as different kinds of users.

use std::sync::Arc;

use quip::bot::{BotContext, Dispatcher, Invoker, MessageEvent, Response};
use quip::command;
use quip::config::BotConfig;
use quip::storage::JsonStore;

pub const CHANNEL: &str = "#test";

pub fn dispatcher() -> Dispatcher {
    dispatcher_with_config(BotConfig::default())
}

pub fn dispatcher_with_config(config: BotConfig) -> Dispatcher {
    let registry = Arc::new(command::build_registry().expect("builtin registry must build"));
    let ctx = Arc::new(BotContext::new(config, Arc::new(JsonStore::in_memory())));
    Dispatcher::new(ctx, registry)
}

/// Dispatch `line` as a verified, non-operator user.
pub fn say(dispatcher: &Dispatcher, nick: &str, line: &str) -> Response {
    let event = MessageEvent::new(CHANNEL, Invoker::new(nick).verified(), line);
    dispatcher.handle(&event)
}

/// Dispatch `line` as a channel operator.
pub fn say_as_op(dispatcher: &Dispatcher, nick: &str, line: &str) -> Response {
    let event = MessageEvent::new(CHANNEL, Invoker::new(nick).verified().operator(), line);
    dispatcher.handle(&event)
}

/// Dispatch `line` as an unverified user.
pub fn say_unverified(dispatcher: &Dispatcher, nick: &str, line: &str) -> Response {
    let event = MessageEvent::new(CHANNEL, Invoker::new(nick), line);
    dispatcher.handle(&event)
}
