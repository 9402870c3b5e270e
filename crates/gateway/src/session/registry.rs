//! Registry of live sessions keyed by `SessionId`

use crate::session::Session;
use dashmap::DashMap;
use log::info;
use mdgate_core::SessionId;
use std::sync::Arc;

/// Concurrent lookup table of live sessions
///
/// Owned by the session engine side; the dispatcher only reads from it.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: DashMap<SessionId, Arc<dyn Session>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a session under its own id, returning any session it replaced
    pub fn register(&self, session: Arc<dyn Session>) -> Option<Arc<dyn Session>> {
        let id = session.id().clone();
        info!("Registering session {}", id);
        self.sessions.insert(id, session)
    }

    /// Remove a session, returning it if present
    pub fn remove(&self, id: &SessionId) -> Option<Arc<dyn Session>> {
        self.sessions.remove(id).map(|(_, session)| session)
    }

    /// Find the session for an address
    pub fn lookup(&self, id: &SessionId) -> Option<Arc<dyn Session>> {
        self.sessions.get(id).map(|entry| Arc::clone(entry.value()))
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
