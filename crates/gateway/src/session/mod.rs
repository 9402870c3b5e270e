//! Session abstraction layer
//!
//! The protocol session engine (logon, sequencing, framing, socket) is
//! external. The `Session` trait is the seam the dispatcher talks to; the
//! channel implementation queues requests for an in-process consumer.

pub mod channel;
pub mod registry;

pub use channel::ChannelSession;
pub use registry::SessionRegistry;

use crate::messages::SubscriptionRequest;
use mdgate_core::SessionId;

/// A live protocol session addressed by its `SessionId`
pub trait Session: Send + Sync {
    /// Address of this session
    fn id(&self) -> &SessionId;

    /// Whether the session is currently logged on
    fn is_logged_on(&self) -> bool;

    /// Hand a request to the session for transmission
    ///
    /// Returns true if the session queued or sent it, false if the session
    /// refused it (e.g. not logged on). Never blocks on I/O.
    fn send(&self, request: SubscriptionRequest) -> bool;
}
