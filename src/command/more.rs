//! Drain the channel's overflow queue, one result per invocation.

use crate::bot::context::BotContext;
use crate::bot::event::MessageEvent;
use crate::bot::registry::Capability;
use crate::bot::response::Response;

pub struct MoreCommand;

impl Capability for MoreCommand {
    fn aliases(&self) -> &'static [&'static str] {
        &["more"]
    }

    fn execute(&self, ctx: &BotContext, event: &MessageEvent, _args: &[String]) -> Response {
        let channel = ctx.channel(&event.channel);
        let next = channel.lock().overflow.pop();
        match next {
            Some(item) => Response::chat(item),
            None => Response::highlight(&event.invoker.nick, "no more results"),
        }
    }
}
