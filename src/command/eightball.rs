//! The magic eight ball.

use rand::seq::SliceRandom;

use crate::bot::context::BotContext;
use crate::bot::event::MessageEvent;
use crate::bot::registry::Capability;
use crate::bot::response::Response;

pub struct EightBallCommand;

const ANSWERS: &[&str] = &[
    "it is certain",
    "without a doubt",
    "you may rely on it",
    "most likely",
    "outlook good",
    "signs point to yes",
    "reply hazy, try again",
    "ask again later",
    "better not tell you now",
    "cannot predict now",
    "don't count on it",
    "my reply is no",
    "my sources say no",
    "outlook not so good",
    "very doubtful",
];

impl Capability for EightBallCommand {
    fn aliases(&self) -> &'static [&'static str] {
        &["8", "8ball"]
    }

    fn execute(&self, _ctx: &BotContext, _event: &MessageEvent, _args: &[String]) -> Response {
        match ANSWERS.choose(&mut rand::thread_rng()) {
            Some(answer) => Response::chat(*answer),
            None => Response::none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::command::testutil::{args, context, event};

    use super::*;

    #[test]
    fn test_answer_comes_from_the_table() {
        let ctx = context();
        let response = EightBallCommand.execute(&ctx, &event("alice"), &args(&["8ball"]));
        assert!(ANSWERS.contains(&response.message_text()));
    }
}
