//! Quote grabs: capture a user's last line and replay it later.

use crate::bot::context::BotContext;
use crate::bot::event::MessageEvent;
use crate::bot::registry::Capability;
use crate::bot::response::Response;

pub struct QuoteGrabCommand;

const GRAB_USAGE: &str = "usage: grab <nick>";
const GET_USAGE: &str = "usage: q <id|nick>";
const INFO_USAGE: &str = "usage: qinfo <id>";
const SEARCH_USAGE: &str = "usage: qsearch <text>";

impl Capability for QuoteGrabCommand {
    fn aliases(&self) -> &'static [&'static str] {
        &[
            "grab", "q", "qsay", "qinfo", "qi", "qsearch", "qfind", "qf", "rq", "rqnouser", "rqn",
        ]
    }

    fn execute(&self, ctx: &BotContext, event: &MessageEvent, args: &[String]) -> Response {
        match args[0].as_str() {
            "grab" => grab(ctx, event, args),
            "q" | "qsay" => get(ctx, event, args),
            "rq" => random(ctx, event, true),
            "rqnouser" | "rqn" => random(ctx, event, false),
            "qinfo" | "qi" => info(ctx, event, args),
            "qsearch" | "qfind" | "qf" => search(ctx, event, args),
            other => {
                tracing::error!(token = other, "quote capability hit with an unregistered alias");
                Response::none()
            }
        }
    }
}

fn grab(ctx: &BotContext, event: &MessageEvent, args: &[String]) -> Response {
    if args.len() != 2 {
        return Response::highlight(&event.invoker.nick, GRAB_USAGE);
    }
    let target = &args[1];
    if *target == event.invoker.nick {
        return Response::highlight(&event.invoker.nick, "you can't grab yourself");
    }
    let last = {
        let channel = ctx.channel(&event.channel);
        let state = channel.lock();
        state.history.last_for(target).map(String::from)
    };
    match last {
        Some(line) => {
            let id = ctx.store.quote_grab(target, &line, &event.invoker.nick);
            tracing::debug!(%target, id, "quote grabbed");
            Response::highlight(&event.invoker.nick, format!("grabbed ({id})"))
        }
        None => Response::highlight(
            &event.invoker.nick,
            format!("I haven't seen {target} say anything"),
        ),
    }
}

fn get(ctx: &BotContext, event: &MessageEvent, args: &[String]) -> Response {
    if args.len() != 2 {
        return Response::highlight(&event.invoker.nick, GET_USAGE);
    }
    let quote = match args[1].parse::<u64>() {
        Ok(id) => ctx.store.quote_by_id(id),
        Err(_) => ctx.store.quote_random_for(&args[1]),
    };
    match quote {
        Some(q) => Response::chat(q.display_line()),
        None => Response::highlight(&event.invoker.nick, "no quote found"),
    }
}

fn random(ctx: &BotContext, event: &MessageEvent, attributed: bool) -> Response {
    match ctx.store.quote_random() {
        Some(q) if attributed => Response::chat(q.display_line()),
        Some(q) => Response::chat(q.text),
        None => Response::highlight(&event.invoker.nick, "no quotes grabbed yet"),
    }
}

fn info(ctx: &BotContext, event: &MessageEvent, args: &[String]) -> Response {
    let id = match args.get(1).and_then(|a| a.parse::<u64>().ok()) {
        Some(id) => id,
        None => return Response::highlight(&event.invoker.nick, INFO_USAGE),
    };
    match ctx.store.quote_by_id(id) {
        Some(q) => Response::chat(q.info_line()),
        None => Response::highlight(&event.invoker.nick, "no quote found"),
    }
}

/// Substring search over quote text; extras land in the overflow queue.
fn search(ctx: &BotContext, event: &MessageEvent, args: &[String]) -> Response {
    if args.len() < 2 {
        return Response::highlight(&event.invoker.nick, SEARCH_USAGE);
    }
    let needle = args[1..].join(" ");
    let matches = ctx.store.quote_search(&needle);
    let Some((first, rest)) = matches.split_first() else {
        return Response::chat("nothing found");
    };

    let channel = ctx.channel(&event.channel);
    let mut state = channel.lock();
    state.overflow.clear();
    for quote in rest {
        state.overflow.push(quote.display_line());
    }
    Response::chat(first.display_line())
}
