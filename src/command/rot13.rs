//! ROT13 letter rotation.

use crate::bot::context::BotContext;
use crate::bot::event::MessageEvent;
use crate::bot::registry::Capability;
use crate::bot::response::Response;

pub struct Rot13Command;

impl Capability for Rot13Command {
    fn aliases(&self) -> &'static [&'static str] {
        &["rot", "rot13"]
    }

    fn execute(&self, _ctx: &BotContext, event: &MessageEvent, args: &[String]) -> Response {
        if args.len() < 2 {
            return Response::highlight(&event.invoker.nick, "usage: rot13 <text>");
        }
        Response::chat(rot13(&args[1..].join(" ")))
    }
}

fn rot13(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'a'..='z' => rotate(c, b'a'),
            'A'..='Z' => rotate(c, b'A'),
            other => other,
        })
        .collect()
}

fn rotate(c: char, base: u8) -> char {
    (((c as u8 - base + 13) % 26) + base) as char
}
