//! Echo the arguments back to the channel, after substitution.

use crate::bot::context::BotContext;
use crate::bot::event::MessageEvent;
use crate::bot::registry::Capability;
use crate::bot::response::Response;

pub struct EchoCommand;

impl Capability for EchoCommand {
    fn aliases(&self) -> &'static [&'static str] {
        &["echo"]
    }

    fn execute(&self, _ctx: &BotContext, _event: &MessageEvent, args: &[String]) -> Response {
        if args.len() < 2 {
            return Response::none();
        }
        Response::chat(args[1..].join(" "))
    }
}
