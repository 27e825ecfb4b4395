//! Report the running version.

use crate::bot::context::BotContext;
use crate::bot::event::MessageEvent;
use crate::bot::registry::Capability;
use crate::bot::response::Response;

pub struct VersionCommand;

impl Capability for VersionCommand {
    fn aliases(&self) -> &'static [&'static str] {
        &["version"]
    }

    fn execute(&self, _ctx: &BotContext, _event: &MessageEvent, _args: &[String]) -> Response {
        Response::chat(concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION")))
    }
}
