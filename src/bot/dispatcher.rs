//! Dispatcher: per-line orchestration of sed detection, game interception,
//! alias resolution, substitution, and the implicit fact-lookup fallback.

use std::sync::Arc;
use std::time::Instant;

use lazy_static::lazy_static;
use regex::Regex;

use crate::command;

use super::context::BotContext;
use super::event::MessageEvent;
use super::game;
use super::registry::CommandRegistry;
use super::response::Response;
use super::substitution::{self, ExpandLimits};

lazy_static! {
    /// `s/pattern/replacement/` with one optional trailing flag, applied to
    /// the invoker's own last chat line.
    static ref SED_LINE: Regex = Regex::new(r"^s/[^/]*/[^/]*/[a-z]?$").expect("Invalid Regex");
}

/// The only component the transport invokes. One call per inbound command
/// line; safe to call from any number of concurrent tasks.
pub struct Dispatcher {
    ctx: Arc<BotContext>,
    registry: Arc<CommandRegistry>,
}

impl Dispatcher {
    pub fn new(ctx: Arc<BotContext>, registry: Arc<CommandRegistry>) -> Self {
        Self { ctx, registry }
    }

    pub fn context(&self) -> &Arc<BotContext> {
        &self.ctx
    }

    /// Handle one inbound line. Never fails: internal faults degrade to
    /// [`Response::none`] or an explanatory highlight.
    pub fn handle(&self, event: &MessageEvent) -> Response {
        let deadline = Instant::now() + self.ctx.config.limits.dispatch_budget();
        self.handle_line(event, &event.text, deadline, 0)
    }

    /// Dispatch `raw` at the given substitution depth. Re-entered by the
    /// substitution engine for every `$(...)` sub-command.
    fn handle_line(&self, event: &MessageEvent, raw: &str, deadline: Instant, depth: usize) -> Response {
        let raw = raw.trim();
        if raw.is_empty() {
            return Response::none();
        }
        if depth > 0 && Instant::now() >= deadline {
            tracing::warn!(channel = %event.channel, "dispatch budget exceeded, dropping sub-command");
            return Response::none();
        }

        // sed corrections bypass tokenizing, games, and the registry
        if SED_LINE.is_match(raw)
            && let Some(cap) = self.registry.resolve("sed")
        {
            return cap.execute(&self.ctx, event, &[raw.to_string()]);
        }

        let mut tokens: Vec<String> = raw.split_whitespace().map(String::from).collect();
        if let Some(stripped) = tokens[0]
            .strip_prefix(self.ctx.config.command_sentinel)
            .map(String::from)
        {
            tokens[0] = stripped;
        }
        if tokens[0].is_empty() && tokens.len() == 1 {
            return Response::none();
        }
        let stripped_line = tokens.join(" ");

        let channel = self.ctx.channel(&event.channel);
        {
            let mut state = channel.lock();
            if state.game.expire_if_overdue(Instant::now()) {
                tracing::debug!(channel = %event.channel, "game timed out");
            }
            if let Some(response) =
                game::intercept(&mut state.game, &tokens[0], &stripped_line, event)
            {
                return response;
            }
        }

        match self.registry.resolve(&tokens[0]) {
            Some(cap) if cap.allows_substitution() => {
                let limits = ExpandLimits {
                    depth_left: self
                        .ctx
                        .config
                        .limits
                        .max_expansion_depth
                        .saturating_sub(depth),
                    max_len: self.ctx.config.limits.max_expanded_len,
                    deadline,
                };
                let expanded =
                    substitution::expand(&stripped_line, &event.invoker.nick, limits, |inner| {
                        self.handle_line(event, inner, deadline, depth + 1)
                    });
                let tokens: Vec<String> =
                    expanded.split_whitespace().map(String::from).collect();
                if tokens.is_empty() {
                    return Response::none();
                }
                cap.execute(&self.ctx, event, &tokens)
            }
            Some(cap) => cap.execute(&self.ctx, event, &tokens),
            None => {
                {
                    let mut state = channel.lock();
                    if let Some(response) = game::check_guess(
                        &mut state.game,
                        &tokens[0],
                        self.ctx.config.fact_sentinel,
                        event,
                        self.ctx.store.as_ref(),
                    ) {
                        return response;
                    }
                }
                // unresolved tokens fall through to the fact store
                command::fact::lookup_response(&self.ctx, event, &tokens)
            }
        }
    }
}
