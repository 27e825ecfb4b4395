//! Inbound event types exposed by the chat transport.

/// The user who sent a line.
#[derive(Debug, Clone)]
pub struct Invoker {
    /// Display name in the channel.
    pub nick: String,
    /// Whether the transport has verified the user's identity.
    pub verified: bool,
    /// Whether the user holds operator status in the channel.
    pub operator: bool,
}

/// One inbound chat line, as delivered by the transport.
#[derive(Debug, Clone)]
pub struct MessageEvent {
    /// Channel or session the line arrived on.
    pub channel: String,
    /// Who sent it.
    pub invoker: Invoker,
    /// The raw line text.
    pub text: String,
}

impl MessageEvent {
    pub fn new(channel: impl Into<String>, invoker: Invoker, text: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            invoker,
            text: text.into(),
        }
    }
}

impl Invoker {
    pub fn new(nick: impl Into<String>) -> Self {
        Self {
            nick: nick.into(),
            verified: false,
            operator: false,
        }
    }

    pub fn verified(mut self) -> Self {
        self.verified = true;
        self
    }

    pub fn operator(mut self) -> Self {
        self.operator = true;
        self
    }
}
