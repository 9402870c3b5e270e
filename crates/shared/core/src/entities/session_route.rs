use std::fmt;

use crate::values::{CompId, IdentifierError};

/// Routing identity stamped onto every outbound header
///
/// Loaded once from configuration and shared read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionRoute {
    sender: CompId,
    target: CompId,
}

impl SessionRoute {
    /// Build a route from raw configuration values
    ///
    /// Fails with `InvalidRoute` when either side is blank.
    pub fn new(sender: &str, target: &str) -> Result<Self, IdentifierError> {
        let sender = CompId::new(sender)
            .map_err(|_| IdentifierError::InvalidRoute("sender comp id is empty".to_string()))?;
        let target = CompId::new(target)
            .map_err(|_| IdentifierError::InvalidRoute("target comp id is empty".to_string()))?;
        Ok(Self::from_ids(sender, target))
    }

    pub fn from_ids(sender: CompId, target: CompId) -> Self {
        Self { sender, target }
    }

    pub fn sender(&self) -> &CompId {
        &self.sender
    }

    pub fn target(&self) -> &CompId {
        &self.target
    }

    /// Session address for this route under an optional qualifier
    pub fn session_id(&self, qualifier: Option<&str>) -> SessionId {
        SessionId::new(self.sender.clone(), self.target.clone(), qualifier)
    }
}

impl fmt::Display for SessionRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.sender, self.target)
    }
}

/// Address of a live protocol session
///
/// Two sessions between the same parties are told apart by the qualifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId {
    pub sender: CompId,
    pub target: CompId,
    pub qualifier: Option<String>,
}

impl SessionId {
    pub fn new(sender: CompId, target: CompId, qualifier: Option<&str>) -> Self {
        Self {
            sender,
            target,
            qualifier: qualifier
                .filter(|q| !q.trim().is_empty())
                .map(str::to_string),
        }
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.qualifier {
            Some(q) => write!(f, "{}->{}:{}", self.sender, self.target, q),
            None => write!(f, "{}->{}", self.sender, self.target),
        }
    }
}
