//! `s/pattern/replacement/` corrections against the invoker's last line.
//!
//! Reached only through the dispatcher's early detection; the whole raw
//! line arrives as a single argument.

use lazy_static::lazy_static;
use regex::Regex;

use crate::bot::context::BotContext;
use crate::bot::event::MessageEvent;
use crate::bot::registry::Capability;
use crate::bot::response::Response;

pub struct SedCommand;

const USAGE: &str = "usage: s/pattern/replacement/ (g replaces every match)";

lazy_static! {
    static ref SED_EXPR: Regex =
        Regex::new(r"^s/([^/]*)/([^/]*)/([a-z])?$").expect("Invalid Regex");
}

impl Capability for SedCommand {
    fn aliases(&self) -> &'static [&'static str] {
        &["sed"]
    }

    fn allows_substitution(&self) -> bool {
        false
    }

    fn execute(&self, ctx: &BotContext, event: &MessageEvent, args: &[String]) -> Response {
        let line = args.join(" ");
        let Some(caps) = SED_EXPR.captures(&line) else {
            return Response::highlight(&event.invoker.nick, USAGE);
        };
        let replacement = caps[2].to_string();
        let global = caps.get(3).map(|f| f.as_str() == "g").unwrap_or(false);
        let pattern = match Regex::new(&caps[1]) {
            Ok(p) => p,
            Err(e) => {
                tracing::debug!(error = %e, "sed pattern rejected");
                return Response::highlight(&event.invoker.nick, "that pattern doesn't parse");
            }
        };

        let last = {
            let channel = ctx.channel(&event.channel);
            let state = channel.lock();
            state.history.last_for(&event.invoker.nick).map(String::from)
        };
        let Some(last) = last else {
            return Response::highlight(&event.invoker.nick, "I haven't seen you say anything");
        };
        if !pattern.is_match(&last) {
            return Response::highlight(&event.invoker.nick, "that doesn't match your last line");
        }

        let corrected = if global {
            pattern.replace_all(&last, replacement.as_str())
        } else {
            pattern.replace(&last, replacement.as_str())
        };
        Response::chat(format!("{} meant to say: {}", event.invoker.nick, corrected))
    }
}
