//! Game round management: start or end the guessing and regex mini-games.
//!
//! These commands only move the per-channel game state into or out of an
//! active variant; interception and success detection live in
//! [`crate::bot::game`].

use std::time::Instant;

use crate::bot::context::BotContext;
use crate::bot::event::MessageEvent;
use crate::bot::game::{GameState, GuessingGame, RegexPuzzle};
use crate::bot::registry::Capability;
use crate::bot::response::Response;

const MYSTERY_USAGE: &str = "usage: mystery [end]";
const REGEXGAME_USAGE: &str = "usage: regexgame <must-match> <must-not-match>, or regexgame end";

/// Starts a guessing round over a random stored fact.
pub struct MysteryCommand;

impl Capability for MysteryCommand {
    fn aliases(&self) -> &'static [&'static str] {
        &["mystery"]
    }

    fn allows_substitution(&self) -> bool {
        false
    }

    fn execute(&self, ctx: &BotContext, event: &MessageEvent, args: &[String]) -> Response {
        match args.get(1).map(String::as_str) {
            None => start_mystery(ctx, event),
            Some("end") => end_game(ctx, event),
            Some(_) => Response::highlight(&event.invoker.nick, MYSTERY_USAGE),
        }
    }
}

/// Starts a regex puzzle with explicit match/avoid strings.
pub struct RegexGameCommand;

impl Capability for RegexGameCommand {
    fn aliases(&self) -> &'static [&'static str] {
        &["regexgame", "rg"]
    }

    fn allows_substitution(&self) -> bool {
        false
    }

    fn execute(&self, ctx: &BotContext, event: &MessageEvent, args: &[String]) -> Response {
        match args.get(1).map(String::as_str) {
            Some("end") if args.len() == 2 => end_game(ctx, event),
            Some(should_match) if args.len() == 3 => {
                start_regex(ctx, event, should_match, &args[2])
            }
            _ => Response::highlight(&event.invoker.nick, REGEXGAME_USAGE),
        }
    }
}

fn start_mystery(ctx: &BotContext, event: &MessageEvent) -> Response {
    let Some(fact) = ctx.store.fact_random() else {
        return Response::highlight(&event.invoker.nick, "I don't know any facts yet");
    };
    let channel = ctx.channel(&event.channel);
    let mut state = channel.lock();
    if state.game.is_active() {
        return Response::highlight(&event.invoker.nick, "a game is already running");
    }
    let sentinel = ctx.config.fact_sentinel;
    tracing::info!(channel = %event.channel, key = %fact.key, "guessing round started");
    state.game = GameState::Guessing(GuessingGame {
        answer_key: fact.key,
        expires_at: Instant::now() + ctx.config.limits.game_timeout(),
    });
    Response::chat(format!(
        "new round: which fact says \"{}\"? answer with {}<key>",
        fact.body, sentinel
    ))
}

fn start_regex(
    ctx: &BotContext,
    event: &MessageEvent,
    should_match: &str,
    should_not_match: &str,
) -> Response {
    let channel = ctx.channel(&event.channel);
    let mut state = channel.lock();
    if state.game.is_active() {
        return Response::highlight(&event.invoker.nick, "a game is already running");
    }
    tracing::info!(channel = %event.channel, "regex puzzle started");
    state.game = GameState::Regex(RegexPuzzle {
        should_match: should_match.to_string(),
        should_not_match: should_not_match.to_string(),
        expires_at: Instant::now() + ctx.config.limits.game_timeout(),
    });
    Response::chat(format!(
        "new puzzle: write a regex that matches \"{should_match}\" but not \"{should_not_match}\""
    ))
}

fn end_game(ctx: &BotContext, event: &MessageEvent) -> Response {
    let channel = ctx.channel(&event.channel);
    let mut state = channel.lock();
    match std::mem::take(&mut state.game) {
        GameState::Idle => Response::highlight(&event.invoker.nick, "no game is running"),
        GameState::Guessing(game) => Response::chat(format!(
            "round over, the answer was {}{}",
            ctx.config.fact_sentinel, game.answer_key
        )),
        GameState::Regex(_) => Response::chat("puzzle abandoned"),
    }
}
