//! Response model: what the bot intends to send back to the channel.

/// How a response should be delivered by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intention {
    /// Broadcast to the whole channel.
    Chat,
    /// Addressed to a specific user (`nick: message`).
    Highlight,
    /// Sent as a third-person action (`* botnick message`).
    Action,
    /// Nothing is sent; the transport ignores the message field.
    NoReply,
}

/// A capability's answer to one inbound line.
#[derive(Debug, Clone)]
pub struct Response {
    /// Delivery mode.
    pub intention: Intention,
    /// Addressee for [`Intention::Highlight`] responses.
    pub recipient: Option<String>,
    /// The rendered text, absent for [`Intention::NoReply`].
    pub message: Option<String>,
}

impl Response {
    /// A broadcast message to the channel.
    pub fn chat(message: impl Into<String>) -> Self {
        Self {
            intention: Intention::Chat,
            recipient: None,
            message: Some(message.into()),
        }
    }

    /// A message addressed to `recipient`.
    pub fn highlight(recipient: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            intention: Intention::Highlight,
            recipient: Some(recipient.into()),
            message: Some(message.into()),
        }
    }

    /// A third-person action line.
    pub fn action(message: impl Into<String>) -> Self {
        Self {
            intention: Intention::Action,
            recipient: None,
            message: Some(message.into()),
        }
    }

    /// No reply at all.
    pub fn none() -> Self {
        Self {
            intention: Intention::NoReply,
            recipient: None,
            message: None,
        }
    }

    /// The message text as seen by the substitution engine: the empty string
    /// when the response carries no message.
    pub fn message_text(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }

    /// Whether the transport should stay silent.
    pub fn is_no_reply(&self) -> bool {
        self.intention == Intention::NoReply
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_response() {
        let r = Response::chat("hello");
        assert_eq!(r.intention, Intention::Chat);
        assert!(r.recipient.is_none());
        assert_eq!(r.message_text(), "hello");
    }

    #[test]
    fn test_highlight_carries_recipient() {
        let r = Response::highlight("bob", "usage: echo <text>");
        assert_eq!(r.intention, Intention::Highlight);
        assert_eq!(r.recipient.as_deref(), Some("bob"));
    }

    #[test]
    fn test_no_reply_has_empty_message_text() {
        let r = Response::none();
        assert!(r.is_no_reply());
        assert_eq!(r.message_text(), "");
    }
}
