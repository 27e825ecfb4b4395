//! Game interception flows: guessing rounds, the regex puzzle, denylist
//! enforcement, and lazy timeout.

mod common;

use common::{dispatcher, dispatcher_with_config, say};
use quip::bot::Intention;
use quip::config::BotConfig;

#[test]
fn test_regex_puzzle_flow() {
    let d = dispatcher();
    let started = say(&d, "alice", "!regexgame cat dog");
    assert!(started.message_text().contains("cat"));

    // matches both strings: not a solution, round stays open
    assert!(say(&d, "bob", "!.*").is_no_reply());
    let still_open = say(&d, "carol", "!regexgame cat dog");
    assert_eq!(still_open.message_text(), "a game is already running");

    // matches "cat" and avoids "dog": solved
    let solved = say(&d, "bob", "!c.t");
    assert_eq!(solved.intention, Intention::Highlight);
    assert_eq!(solved.recipient.as_deref(), Some("bob"));
    assert!(solved.message_text().contains("solved"));

    // round is closed, a new one can start
    let restarted = say(&d, "carol", "!regexgame fish fowl");
    assert!(restarted.message_text().contains("fish"));
}

#[test]
fn test_regex_puzzle_does_not_consume_normal_commands() {
    let d = dispatcher();
    say(&d, "alice", "!regexgame cat dog");
    // a line that is no solution still dispatches normally
    assert_eq!(say(&d, "bob", "!echo hi").message_text(), "hi");
}

#[test]
fn test_guessing_round_flow() {
    let d = dispatcher();
    say(&d, "alice", "!learn capybara: the largest rodent");
    let started = say(&d, "alice", "!mystery");
    assert!(started.message_text().contains("the largest rodent"));

    // every fact-search alias is shut off while the round is open
    for alias in ["factfind", "factsearch", "fsearch", "ffind", "ff", "fs"] {
        let blocked = say(&d, "bob", &format!("!{alias} rodent"));
        assert_eq!(blocked.intention, Intention::Highlight);
        assert!(blocked.message_text().contains("disabled"));
    }

    // quote search is not part of the denylist
    assert_eq!(say(&d, "bob", "!qsearch rodent").message_text(), "nothing found");

    // a wrong unresolved token falls through to fact lookup
    assert!(say(&d, "bob", "~rodent").is_no_reply());

    // the exact answer form wins the round
    let won = say(&d, "bob", "~capybara");
    assert_eq!(won.intention, Intention::Highlight);
    assert_eq!(won.recipient.as_deref(), Some("bob"));
    assert_eq!(d.context().store.karma_get("bob"), 1);

    // round closed: searches work again, and the answer is a plain lookup
    let unblocked = say(&d, "bob", "!ff rodent");
    assert!(unblocked.message_text().contains("capybara"));
    assert_eq!(say(&d, "bob", "~capybara").message_text(), "the largest rodent");
}

#[test]
fn test_two_guessers_single_winner() {
    let d = dispatcher();
    say(&d, "alice", "!learn answer: the body");
    say(&d, "alice", "!mystery");

    let first = say(&d, "bob", "~answer");
    assert_eq!(first.intention, Intention::Highlight);
    // the round is already idle; the second guess is a plain fact lookup
    let second = say(&d, "carol", "~answer");
    assert_eq!(second.intention, Intention::Chat);
    assert_eq!(d.context().store.karma_get("bob"), 1);
    assert_eq!(d.context().store.karma_get("carol"), 0);
}

#[test]
fn test_game_lapses_after_timeout() {
    let mut config = BotConfig::default();
    config.limits.game_timeout_secs = 0;
    let d = dispatcher_with_config(config);

    say(&d, "alice", "!learn capybara: the largest rodent");
    say(&d, "alice", "!mystery");

    // the round expired before this line was handled, so nothing is blocked
    let response = say(&d, "bob", "!ff rodent");
    assert!(response.message_text().contains("capybara"));
}

#[test]
fn test_games_are_per_channel() {
    let d = dispatcher();
    say(&d, "alice", "!learn capybara: the largest rodent");
    say(&d, "alice", "!mystery");

    // a different channel is unaffected by #test's round
    let other = quip::bot::MessageEvent::new(
        "#elsewhere",
        quip::bot::Invoker::new("bob").verified(),
        "!ff rodent",
    );
    let response = d.handle(&other);
    assert!(response.message_text().contains("capybara"));
}
