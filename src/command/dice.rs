//! Dice rolls in `NdM` notation.

use lazy_static::lazy_static;
use rand::Rng;
use regex::Regex;

use crate::bot::context::BotContext;
use crate::bot::event::MessageEvent;
use crate::bot::registry::Capability;
use crate::bot::response::Response;

pub struct DiceCommand;

const USAGE: &str = "usage: dice [NdM], e.g. dice 2d6";
const MAX_DICE: u32 = 32;
const MAX_SIDES: u32 = 1000;

lazy_static! {
    static ref DICE_SPEC: Regex = Regex::new(r"^(\d{1,2})d(\d{1,4})$").expect("Invalid Regex");
}

impl Capability for DiceCommand {
    fn aliases(&self) -> &'static [&'static str] {
        &["dice", "roll"]
    }

    fn execute(&self, _ctx: &BotContext, event: &MessageEvent, args: &[String]) -> Response {
        let spec = args.get(1).map(String::as_str).unwrap_or("1d6");
        let Some((count, sides)) = parse_spec(spec) else {
            return Response::highlight(&event.invoker.nick, USAGE);
        };

        let mut rng = rand::thread_rng();
        let rolls: Vec<u32> = (0..count).map(|_| rng.gen_range(1..=sides)).collect();
        if rolls.len() == 1 {
            Response::chat(format!("rolled {}", rolls[0]))
        } else {
            let total: u32 = rolls.iter().sum();
            let listed = rolls
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            Response::chat(format!("rolled {listed} (total {total})"))
        }
    }
}

fn parse_spec(spec: &str) -> Option<(u32, u32)> {
    let caps = DICE_SPEC.captures(spec)?;
    let count: u32 = caps[1].parse().ok()?;
    let sides: u32 = caps[2].parse().ok()?;
    if (1..=MAX_DICE).contains(&count) && (2..=MAX_SIDES).contains(&sides) {
        Some((count, sides))
    } else {
        None
    }
}
