//! Coin flip.

use crate::bot::context::BotContext;
use crate::bot::event::MessageEvent;
use crate::bot::registry::Capability;
use crate::bot::response::Response;

pub struct CoinCommand;

impl Capability for CoinCommand {
    fn aliases(&self) -> &'static [&'static str] {
        &["coin"]
    }

    fn execute(&self, _ctx: &BotContext, _event: &MessageEvent, _args: &[String]) -> Response {
        Response::chat(if rand::random() { "heads" } else { "tails" })
    }
}

#[cfg(test)]
mod tests {
    use crate::command::testutil::{args, context, event};

    use super::*;

    #[test]
    fn test_coin_flip() {
        let ctx = context();
        let response = CoinCommand.execute(&ctx, &event("alice"), &args(&["coin"]));
        assert!(matches!(response.message_text(), "heads" | "tails"));
    }
}
