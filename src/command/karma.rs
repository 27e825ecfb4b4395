//! Karma lookups.

use crate::bot::context::BotContext;
use crate::bot::event::MessageEvent;
use crate::bot::registry::Capability;
use crate::bot::response::Response;

pub struct KarmaCommand;

impl Capability for KarmaCommand {
    fn aliases(&self) -> &'static [&'static str] {
        &["karma"]
    }

    fn execute(&self, ctx: &BotContext, event: &MessageEvent, args: &[String]) -> Response {
        if args.len() < 2 {
            return Response::highlight(&event.invoker.nick, "usage: karma <name>");
        }
        let name = args[1..].join(" ");
        let total = ctx.store.karma_get(&name);
        Response::chat(format!("{name} has {total} karma"))
    }
}
