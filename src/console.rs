//! Console transport: a local stdin/stdout chat session.
//!
//! Lines carrying the command or fact sentinel (or a sed correction) are
//! dispatched; everything else is recorded as chat history, the way a
//! passive listener on a real transport would.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::bot::{Dispatcher, Intention, Invoker, MessageEvent, Response};

/// Run the session loop until EOF or `/quit`.
pub async fn run(dispatcher: Arc<Dispatcher>, channel: &str, nick: &str) -> anyhow::Result<()> {
    let ctx = dispatcher.context().clone();
    let bot_nick = ctx.config.nick.clone();
    let command_sentinel = ctx.config.command_sentinel;
    let fact_sentinel = ctx.config.fact_sentinel;

    println!("{bot_nick} is listening on {channel}; /quit to exit");

    // the console user owns the session, so treat them as verified staff
    let invoker = Invoker {
        nick: nick.to_string(),
        verified: true,
        operator: true,
    };

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }
        if line == "/quit" {
            break;
        }

        let is_command = line.starts_with(command_sentinel)
            || line.starts_with(fact_sentinel)
            || line.starts_with("s/");
        if is_command {
            let event = MessageEvent::new(channel, invoker.clone(), line);
            let response = dispatcher.handle(&event);
            render(&bot_nick, &response);
        } else {
            ctx.record_chat_line(channel, nick, &line);
        }
    }

    tracing::info!(channel, "console session closed");
    Ok(())
}

fn render(bot_nick: &str, response: &Response) {
    match response.intention {
        Intention::Chat => println!("<{bot_nick}> {}", response.message_text()),
        Intention::Highlight => {
            let recipient = response.recipient.as_deref().unwrap_or("you");
            println!("<{bot_nick}> {recipient}: {}", response.message_text());
        }
        Intention::Action => println!("* {bot_nick} {}", response.message_text()),
        Intention::NoReply => {}
    }
}
