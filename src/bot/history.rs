//! Per-channel record of recent chat lines.
//!
//! Fed by the transport's passive path (lines that are not commands); read
//! by the sed correction and quote `grab` capabilities.

use std::collections::VecDeque;

const HISTORY_CAP: usize = 200;

/// One recorded chat line.
#[derive(Debug, Clone)]
pub struct ChatLine {
    pub nick: String,
    pub text: String,
}

/// Bounded ring of the channel's recent chat lines.
#[derive(Debug, Default)]
pub struct RecentLines {
    lines: VecDeque<ChatLine>,
}

impl RecentLines {
    /// Record a line, dropping the oldest when the ring is full.
    pub fn record(&mut self, nick: &str, text: &str) {
        if self.lines.len() == HISTORY_CAP {
            self.lines.pop_front();
        }
        self.lines.push_back(ChatLine {
            nick: nick.to_string(),
            text: text.to_string(),
        });
    }

    /// The most recent line spoken by `nick`, if any is still in the ring.
    pub fn last_for(&self, nick: &str) -> Option<&str> {
        self.lines
            .iter()
            .rev()
            .find(|line| line.nick == nick)
            .map(|line| line.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_for_picks_most_recent() {
        let mut h = RecentLines::default();
        h.record("alice", "first");
        h.record("bob", "interleaved");
        h.record("alice", "second");
        assert_eq!(h.last_for("alice"), Some("second"));
        assert_eq!(h.last_for("bob"), Some("interleaved"));
        assert_eq!(h.last_for("carol"), None);
    }

    #[test]
    fn test_ring_is_bounded() {
        let mut h = RecentLines::default();
        h.record("alice", "early");
        for i in 0..HISTORY_CAP {
            h.record("bob", &i.to_string());
        }
        assert_eq!(h.last_for("alice"), None);
    }
}
