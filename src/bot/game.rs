//! Game mode interception: an active per-channel mini-game can short-circuit
//! or supplement normal dispatch until it is solved, ended, or times out.

use std::time::Instant;

use regex::Regex;

use crate::storage::BotStore;

use super::event::MessageEvent;
use super::response::Response;

/// Fact-search aliases rejected while a guessing round is open, so players
/// cannot search the store for the answer.
pub const SEARCH_DENYLIST: &[&str] = &["factfind", "factsearch", "fsearch", "ffind", "ff", "fs"];

/// A guessing round: players must name the mystery fact key.
#[derive(Debug, Clone)]
pub struct GuessingGame {
    pub answer_key: String,
    pub expires_at: Instant,
}

/// A regex puzzle: players must produce an expression that matches one
/// string and avoids another.
#[derive(Debug, Clone)]
pub struct RegexPuzzle {
    pub should_match: String,
    pub should_not_match: String,
    pub expires_at: Instant,
}

/// Per-channel game state. At most one variant is active at a time.
#[derive(Debug, Clone, Default)]
pub enum GameState {
    #[default]
    Idle,
    Guessing(GuessingGame),
    Regex(RegexPuzzle),
}

impl GameState {
    pub fn is_active(&self) -> bool {
        !matches!(self, GameState::Idle)
    }

    /// Lapse an overdue game back to [`GameState::Idle`]. Returns whether a
    /// game actually timed out.
    pub fn expire_if_overdue(&mut self, now: Instant) -> bool {
        let overdue = match self {
            GameState::Idle => false,
            GameState::Guessing(g) => now >= g.expires_at,
            GameState::Regex(p) => now >= p.expires_at,
        };
        if overdue {
            *self = GameState::Idle;
        }
        overdue
    }
}

/// Pre-resolution interception. Runs on every command line while a game is
/// active; may short-circuit dispatch with a response.
///
/// `first_token` has the command sentinel stripped; `stripped_line` is the
/// whole re-joined line, used as the regex puzzle candidate.
pub fn intercept(
    state: &mut GameState,
    first_token: &str,
    stripped_line: &str,
    event: &MessageEvent,
) -> Option<Response> {
    match state {
        GameState::Idle => None,
        GameState::Guessing(_) => {
            if SEARCH_DENYLIST.contains(&first_token) {
                Some(Response::highlight(
                    &event.invoker.nick,
                    "fact search is disabled while a guessing round is open",
                ))
            } else {
                None
            }
        }
        GameState::Regex(puzzle) => {
            let solved = match Regex::new(stripped_line) {
                Ok(candidate) => {
                    candidate.is_match(&puzzle.should_match)
                        && !candidate.is_match(&puzzle.should_not_match)
                }
                // not a valid expression, let normal dispatch have the line
                Err(_) => false,
            };
            if !solved {
                return None;
            }
            let message = format!(
                "solved! `{}` matches \"{}\" and avoids \"{}\"",
                stripped_line, puzzle.should_match, puzzle.should_not_match
            );
            tracing::info!(channel = %event.channel, nick = %event.invoker.nick, "regex puzzle solved");
            *state = GameState::Idle;
            Some(Response::highlight(&event.invoker.nick, message))
        }
    }
}

/// Post-resolution check for an unresolved token: a correct mystery guess
/// awards a point and closes the round.
pub fn check_guess(
    state: &mut GameState,
    token: &str,
    fact_sentinel: char,
    event: &MessageEvent,
    store: &dyn BotStore,
) -> Option<Response> {
    let GameState::Guessing(game) = state else {
        return None;
    };
    if token != format!("{}{}", fact_sentinel, game.answer_key) {
        return None;
    }
    let answer = game.answer_key.clone();
    let total = store.award_point(&event.invoker.nick);
    tracing::info!(channel = %event.channel, nick = %event.invoker.nick, %answer, "mystery solved");
    *state = GameState::Idle;
    Some(Response::highlight(
        &event.invoker.nick,
        format!("correct, it was {fact_sentinel}{answer}! that's a point ({total})"),
    ))
}
