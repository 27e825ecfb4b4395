//! Substitution flows through the full dispatcher: `$(...)` re-entry,
//! `$USER`, and the safety bounds.

mod common;

use common::{dispatcher, say};
use quip::bot::Intention;

#[test]
fn test_sub_command_expansion() {
    let d = dispatcher();
    let response = say(&d, "bob", "!echo $(echo hi) there");
    assert_eq!(response.message_text(), "hi there");
}

#[test]
fn test_user_variable_expansion() {
    let d = dispatcher();
    let response = say(&d, "bob", "!echo hello $USER");
    assert_eq!(response.message_text(), "hello bob");
}

#[test]
fn test_sub_command_can_reach_facts() {
    let d = dispatcher();
    say(&d, "alice", "!learn city: gdansk");
    let response = say(&d, "bob", "!echo greetings from $(~city)");
    assert_eq!(response.message_text(), "greetings from gdansk");
}

#[test]
fn test_nested_chain_resolves_inside_out() {
    let d = dispatcher();
    // each inner span is re-dispatched; the unmatched tails heal round by round
    let response = say(&d, "bob", "!echo $(echo $(echo $(echo x)))");
    assert_eq!(response.message_text(), "x");
}

#[test]
fn test_rot13_of_sub_command() {
    let d = dispatcher();
    let response = say(&d, "bob", "!rot13 $(echo green)");
    assert_eq!(response.message_text(), "terra");
}

#[test]
fn test_silent_sub_command_expands_to_nothing() {
    let d = dispatcher();
    let response = say(&d, "bob", "!echo a $(nosuchfact) b");
    assert_eq!(response.message_text(), "a b");
}

#[test]
fn test_self_referential_fact_terminates() {
    let d = dispatcher();
    say(&d, "alice", "!learn bomb: $(~bomb)");
    // must come back (bounded), with the unexpandable span left literal
    let response = say(&d, "bob", "!echo $(~bomb)");
    assert_eq!(response.intention, Intention::Chat);
    assert!(response.message_text().contains("$(~bomb)"));
}

#[test]
fn test_mutually_recursive_facts_terminate() {
    let d = dispatcher();
    say(&d, "alice", "!learn ping: $(~pong)");
    say(&d, "alice", "!learn pong: $(~ping)");
    let response = say(&d, "bob", "!echo $(~ping)");
    assert_eq!(response.intention, Intention::Chat);
}

#[test]
fn test_substitution_skipped_for_raw_commands() {
    let d = dispatcher();
    say(&d, "alice", "!learn raw: keep $(echo this) intact");
    assert_eq!(
        d.context().store.fact_lookup("raw").as_deref(),
        Some("keep $(echo this) intact")
    );
    // and the lookup side does not expand sub-commands either
    let response = say(&d, "bob", "~raw");
    assert_eq!(response.message_text(), "keep $(echo this) intact");
}

#[test]
fn test_length_bound_fails_closed() {
    let d = dispatcher();
    let wide = "x".repeat(400);
    say(&d, "alice", &format!("!learn wide: {wide}"));
    // six copies would pass 2000 characters; expansion stops, extra spans
    // stay literal, and the dispatcher still answers
    let response = say(
        &d,
        "bob",
        "!echo $(~wide) $(~wide) $(~wide) $(~wide) $(~wide) $(~wide)",
    );
    assert_eq!(response.intention, Intention::Chat);
    assert!(response.message_text().contains("$(~wide)"));
}
