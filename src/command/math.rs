//! Small arithmetic helpers: square root, powers, and a random number.

use rand::Rng;

use crate::bot::context::BotContext;
use crate::bot::event::MessageEvent;
use crate::bot::registry::Capability;
use crate::bot::response::Response;

pub struct MathCommand;

const SQRT_USAGE: &str = "usage: sqrt <number>";
const POW_USAGE: &str = "usage: pow <base> <exponent>";

impl Capability for MathCommand {
    fn aliases(&self) -> &'static [&'static str] {
        &["sqrt", "pow", "random"]
    }

    fn execute(&self, _ctx: &BotContext, event: &MessageEvent, args: &[String]) -> Response {
        match args[0].as_str() {
            "sqrt" => sqrt(event, args),
            "pow" => pow(event, args),
            "random" => Response::chat(rand::thread_rng().gen_range(0..10000).to_string()),
            other => {
                tracing::error!(token = other, "math capability hit with an unregistered alias");
                Response::none()
            }
        }
    }
}

fn sqrt(event: &MessageEvent, args: &[String]) -> Response {
    let value = match args.get(1).and_then(|a| a.parse::<f64>().ok()) {
        Some(v) if v >= 0.0 => v,
        _ => return Response::highlight(&event.invoker.nick, SQRT_USAGE),
    };
    Response::chat(value.sqrt().to_string())
}

fn pow(event: &MessageEvent, args: &[String]) -> Response {
    if args.len() != 3 {
        return Response::highlight(&event.invoker.nick, POW_USAGE);
    }
    match (args[1].parse::<f64>(), args[2].parse::<f64>()) {
        (Ok(base), Ok(exponent)) => Response::chat(base.powf(exponent).to_string()),
        _ => Response::highlight(&event.invoker.nick, POW_USAGE),
    }
}

#[cfg(test)]
mod tests {
    use crate::command::testutil::{args, context, event};

    use super::*;

    #[test]
    fn test_sqrt() {
        let ctx = context();
        let response = MathCommand.execute(&ctx, &event("alice"), &args(&["sqrt", "9"]));
        assert_eq!(response.message_text(), "3");
    }

    #[test]
    fn test_sqrt_rejects_negatives_and_garbage() {
        let ctx = context();
        for bad in [&["sqrt", "-4"][..], &["sqrt", "nan?"][..], &["sqrt"][..]] {
            let response = MathCommand.execute(&ctx, &event("alice"), &args(bad));
            assert_eq!(response.message_text(), SQRT_USAGE);
        }
    }

    #[test]
    fn test_pow() {
        let ctx = context();
        let response = MathCommand.execute(&ctx, &event("alice"), &args(&["pow", "2", "10"]));
        assert_eq!(response.message_text(), "1024");
    }

    #[test]
    fn test_random_is_in_range() {
        let ctx = context();
        let response = MathCommand.execute(&ctx, &event("alice"), &args(&["random"]));
        let value: u32 = response.message_text().parse().unwrap();
        assert!(value < 10000);
    }
}
