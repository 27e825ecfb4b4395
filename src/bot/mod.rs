//! The routing core: everything between an inbound chat line and the
//! [`Response`] handed back to the transport.

pub mod context;
pub mod dispatcher;
pub mod event;
pub mod game;
pub mod history;
pub mod more;
pub mod registry;
pub mod response;
pub mod substitution;
pub mod template;

pub use context::{BotContext, ChannelState};
pub use dispatcher::Dispatcher;
pub use event::{Invoker, MessageEvent};
pub use registry::{Capability, CommandRegistry, RegistryError};
pub use response::{Intention, Response};
