//! The fact knowledge base: learn, append, forget, lookup, and search.
//!
//! Lookups happen two ways: explicitly through the aliases below, and
//! implicitly when the dispatcher fails to resolve a token and hands the
//! line to [`lookup_response`]. Substitution stays off for this family so
//! taught text is stored exactly as typed.

use crate::bot::context::BotContext;
use crate::bot::event::MessageEvent;
use crate::bot::registry::Capability;
use crate::bot::response::Response;
use crate::bot::template;

pub struct FactCommand;

const LEARN_USAGE: &str = "usage: learn <key>: <value>";
const APPEND_USAGE: &str = "usage: append <key>: <value>";
const FORGET_USAGE: &str = "usage: forget <key>";
const INFO_USAGE: &str = "usage: factinfo <key>";
const SEARCH_USAGE: &str = "usage: factsearch <text>";

impl Capability for FactCommand {
    fn aliases(&self) -> &'static [&'static str] {
        &[
            "learn", "append", "forget", "fact", "factinfo", "finfo", "fi", "factfind",
            "factsearch", "fsearch", "ffind", "ff", "fs",
        ]
    }

    fn allows_substitution(&self) -> bool {
        false
    }

    fn execute(&self, ctx: &BotContext, event: &MessageEvent, args: &[String]) -> Response {
        match args[0].as_str() {
            "learn" => learn(ctx, event, args),
            "append" => append(ctx, event, args),
            "forget" => forget(ctx, event, args),
            "fact" => random_fact(ctx, event),
            "factinfo" | "finfo" | "fi" => info(ctx, event, args),
            "factfind" | "factsearch" | "fsearch" | "ffind" | "ff" | "fs" => {
                search(ctx, event, args)
            }
            other => {
                tracing::error!(token = other, "fact capability hit with an unregistered alias");
                Response::none()
            }
        }
    }
}

/// Implicit lookup for a token no capability claims. `tokens[0]` may carry
/// the fact sentinel; remaining tokens feed the positional placeholders.
pub fn lookup_response(ctx: &BotContext, event: &MessageEvent, tokens: &[String]) -> Response {
    let key = tokens[0]
        .strip_prefix(ctx.config.fact_sentinel)
        .unwrap_or(&tokens[0]);
    if key.is_empty() {
        return Response::none();
    }
    let Some(body) = ctx.store.fact_lookup(key) else {
        return Response::none();
    };
    let provided = tokens[1..].join(" ");
    let mut text = if template::has_placeholders(&body) {
        template::apply_args(&body, &provided)
    } else {
        body
    };
    text = text.replace("$USER", &event.invoker.nick);
    match text.strip_prefix("$ME") {
        Some(rest) => Response::action(rest.trim_start()),
        None => Response::chat(text),
    }
}

fn learn(ctx: &BotContext, event: &MessageEvent, args: &[String]) -> Response {
    if ctx.config.require_verified && !event.invoker.verified {
        tracing::debug!(nick = %event.invoker.nick, "unverified learn ignored");
        return Response::none();
    }
    if args.len() < 3 {
        return Response::highlight(&event.invoker.nick, LEARN_USAGE);
    }
    let key = normalize_key(&args[1]);
    let body = args[2..].join(" ");
    if body.len() > ctx.config.limits.max_fact_len {
        return Response::highlight(
            &event.invoker.nick,
            format!(
                "facts are limited to {} characters",
                ctx.config.limits.max_fact_len
            ),
        );
    }
    if ctx.store.fact_store(&key, &body, &event.invoker.nick) {
        Response::highlight(&event.invoker.nick, "ok, got it")
    } else {
        Response::highlight(&event.invoker.nick, format!("I already know about {key}"))
    }
}

fn append(ctx: &BotContext, event: &MessageEvent, args: &[String]) -> Response {
    if ctx.config.require_verified && !event.invoker.verified {
        tracing::debug!(nick = %event.invoker.nick, "unverified append ignored");
        return Response::none();
    }
    if args.len() < 3 {
        return Response::highlight(&event.invoker.nick, APPEND_USAGE);
    }
    let key = normalize_key(&args[1]);
    let extra = args[2..].join(" ");
    if extra.len() > ctx.config.limits.max_fact_len {
        return Response::highlight(
            &event.invoker.nick,
            format!(
                "facts are limited to {} characters",
                ctx.config.limits.max_fact_len
            ),
        );
    }
    if ctx.store.fact_append(&key, &extra) {
        Response::highlight(&event.invoker.nick, "ok, got it")
    } else {
        Response::highlight(
            &event.invoker.nick,
            format!("I don't know anything about {key}"),
        )
    }
}

fn forget(ctx: &BotContext, event: &MessageEvent, args: &[String]) -> Response {
    if !ctx.is_operator(&event.invoker) {
        tracing::trace!(nick = %event.invoker.nick, "forget denied, not an operator");
        return Response::none();
    }
    if args.len() != 2 {
        return Response::highlight(&event.invoker.nick, FORGET_USAGE);
    }
    let key = &args[1];
    let old = ctx.store.fact_lookup(key);
    if ctx.store.fact_delete(key) {
        // keep the removed body recoverable from the log
        tracing::info!(%key, body = old.as_deref().unwrap_or(""), "fact removed");
        Response::highlight(&event.invoker.nick, format!("ok, forgot {key}"))
    } else {
        Response::highlight(
            &event.invoker.nick,
            format!("I don't know anything about {key}"),
        )
    }
}

fn random_fact(ctx: &BotContext, event: &MessageEvent) -> Response {
    match ctx.store.fact_random() {
        Some(fact) => Response::chat(fact.body),
        None => Response::highlight(&event.invoker.nick, "I don't know any facts yet"),
    }
}

fn info(ctx: &BotContext, event: &MessageEvent, args: &[String]) -> Response {
    if args.len() != 2 {
        return Response::highlight(&event.invoker.nick, INFO_USAGE);
    }
    match ctx.store.fact_info(&args[1]) {
        Some(fact) => Response::chat(fact.info_line()),
        None => Response::chat("nothing found"),
    }
}

/// Substring search over fact bodies. The first match is returned directly;
/// the rest land in the channel's overflow queue for `more`.
fn search(ctx: &BotContext, event: &MessageEvent, args: &[String]) -> Response {
    if args.len() < 2 {
        return Response::highlight(&event.invoker.nick, SEARCH_USAGE);
    }
    let needle = args[1..].join(" ");
    let matches = ctx.store.fact_search(&needle);
    let Some((first, rest)) = matches.split_first() else {
        return Response::chat("nothing found");
    };

    let channel = ctx.channel(&event.channel);
    let mut state = channel.lock();
    state.overflow.clear();
    for fact in rest {
        state.overflow.push(fact.display_line());
    }
    Response::chat(first.display_line())
}

fn normalize_key(token: &str) -> String {
    token.strip_suffix(':').unwrap_or(token).to_string()
}
