//! Tokio channel-based session for single-process mode
//!
//! Requests are queued on a bounded mpsc channel; whoever holds the
//! receiver plays the wire side.

use crate::messages::SubscriptionRequest;
use crate::session::Session;
use log::{debug, warn};
use mdgate_core::SessionId;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::mpsc::{self, error::TrySendError};

/// Channel-backed session with a logon flag
pub struct ChannelSession {
    id: SessionId,
    tx: mpsc::Sender<SubscriptionRequest>,
    logged_on: AtomicBool,
}

impl ChannelSession {
    /// Create a session/receiver pair with given outbound capacity
    ///
    /// The session starts logged out.
    pub fn pair(id: SessionId, capacity: usize) -> (Self, mpsc::Receiver<SubscriptionRequest>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        let session = Self {
            id,
            tx,
            logged_on: AtomicBool::new(false),
        };
        (session, rx)
    }

    /// Mark the session as logged on
    pub fn logon(&self) {
        self.logged_on.store(true, Ordering::SeqCst);
        debug!("Session {} logged on", self.id);
    }

    /// Mark the session as logged out; further sends are refused
    pub fn logout(&self) {
        self.logged_on.store(false, Ordering::SeqCst);
        debug!("Session {} logged out", self.id);
    }
}

impl Session for ChannelSession {
    fn id(&self) -> &SessionId {
        &self.id
    }

    fn is_logged_on(&self) -> bool {
        self.logged_on.load(Ordering::SeqCst)
    }

    fn send(&self, request: SubscriptionRequest) -> bool {
        if !self.is_logged_on() {
            warn!(
                "Session {} not logged on, refusing request {}",
                self.id,
                request.md_req_id()
            );
            return false;
        }

        match self.tx.try_send(request) {
            Ok(()) => true,
            Err(TrySendError::Full(request)) => {
                warn!(
                    "Session {} outbound queue full, refusing request {}",
                    self.id,
                    request.md_req_id()
                );
                false
            }
            Err(TrySendError::Closed(request)) => {
                warn!(
                    "Session {} outbound channel closed, refusing request {}",
                    self.id,
                    request.md_req_id()
                );
                false
            }
        }
    }
}
