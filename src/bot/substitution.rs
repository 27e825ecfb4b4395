//! Recursive `$(...)` command substitution and `$USER` expansion.
//!
//! Embedded sub-commands are resolved to their response text before the
//! outer command executes, so `!echo $(rot13 uryyb)` echoes the rotated
//! word. Expansion is bounded in depth, output length, and wall-clock time;
//! past any bound the remaining text is left unexpanded.

use std::time::Instant;

use lazy_static::lazy_static;
use regex::Regex;

use super::response::Response;

lazy_static! {
    /// Shortest non-nested match: the first `)` closes the span, so an
    /// inner parenthesis like `$(a(b)c)` splits early. Stored fact
    /// templates rely on this exact matching.
    static ref SUB_COMMAND: Regex = Regex::new(r"\$\(([^)]*)\)").expect("Invalid Regex");
}

/// Bounds for one expansion pass.
#[derive(Debug, Clone, Copy)]
pub struct ExpandLimits {
    /// Remaining recursion depth. At zero, sub-commands stay literal.
    pub depth_left: usize,
    /// Longest string the expansion may produce.
    pub max_len: usize,
    /// Wall-clock cutoff for the whole dispatch.
    pub deadline: Instant,
}

/// Expand every `$(...)` sub-command in `input` via `dispatch`, then replace
/// every literal `$USER` with the invoker's nick.
///
/// Each matched span is dispatched as a full command line (re-entering the
/// dispatcher, including alias lookup, game interception, and further
/// substitution) and its response text, empty when the response carries no
/// message, is spliced over the first occurrence of the span.
pub fn expand<F>(input: &str, nick: &str, limits: ExpandLimits, mut dispatch: F) -> String
where
    F: FnMut(&str) -> Response,
{
    let mut result = input.to_string();
    if limits.depth_left == 0 {
        tracing::warn!(input, "expansion depth exhausted, leaving sub-commands literal");
        return replace_user(&result, nick);
    }

    let mut rounds = 0usize;
    loop {
        if rounds >= limits.depth_left {
            tracing::warn!(rounds, "expansion round bound hit");
            break;
        }
        if Instant::now() >= limits.deadline {
            tracing::warn!("dispatch budget exceeded during expansion");
            break;
        }
        let Some(caps) = SUB_COMMAND.captures(&result) else {
            break;
        };
        let whole = caps[0].to_string();
        let inner = caps[1].to_string();
        let replacement = dispatch(&inner).message_text().to_string();
        if result.len() - whole.len() + replacement.len() > limits.max_len {
            tracing::warn!(len = result.len(), "expansion length bound hit");
            break;
        }
        result = result.replacen(&whole, &replacement, 1);
        rounds += 1;
    }

    replace_user(&result, nick)
}

fn replace_user(text: &str, nick: &str) -> String {
    text.replace("$USER", nick)
}
