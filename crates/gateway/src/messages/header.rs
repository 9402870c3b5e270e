//! Standard header routing fields

use mdgate_core::{CompId, SessionId, SessionRoute};
use serde::{Deserialize, Serialize};

/// Envelope routing identity (SenderCompID / TargetCompID)
///
/// Freshly built requests carry an empty header; both sides must be set
/// before the request can be dispatched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub sender_comp_id: Option<CompId>,
    pub target_comp_id: Option<CompId>,
}

impl Header {
    /// Overwrite both identities from a route
    pub fn apply_route(&mut self, route: &SessionRoute) {
        self.sender_comp_id = Some(route.sender().clone());
        self.target_comp_id = Some(route.target().clone());
    }

    /// Check both identities are present
    pub fn is_routable(&self) -> bool {
        self.sender_comp_id.is_some() && self.target_comp_id.is_some()
    }

    /// Session address derived from the header, if routable
    pub fn session_id(&self, qualifier: Option<&str>) -> Option<SessionId> {
        match (&self.sender_comp_id, &self.target_comp_id) {
            (Some(sender), Some(target)) => {
                Some(SessionId::new(sender.clone(), target.clone(), qualifier))
            }
            _ => None,
        }
    }

    /// Name of the first missing identity, if any
    pub fn missing_identity(&self) -> Option<&'static str> {
        if self.sender_comp_id.is_none() {
            Some("SenderCompID")
        } else if self.target_comp_id.is_none() {
            Some("TargetCompID")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_header_is_not_routable() {
        let header = Header::default();
        assert!(!header.is_routable());
        assert_eq!(header.missing_identity(), Some("SenderCompID"));
        assert!(header.session_id(None).is_none());
    }

    #[test]
    fn test_missing_target_only() {
        let header = Header {
            sender_comp_id: Some(CompId::new("CLIENT1").unwrap()),
            target_comp_id: None,
        };
        assert!(!header.is_routable());
        assert_eq!(header.missing_identity(), Some("TargetCompID"));
        assert!(header.session_id(None).is_none());
    }

    #[test]
    fn test_apply_route() {
        let route = SessionRoute::new("CLIENT1", "LMAX").unwrap();
        let mut header = Header::default();
        header.apply_route(&route);

        assert!(header.is_routable());
        assert_eq!(header.missing_identity(), None);
        assert_eq!(header.session_id(None), Some(route.session_id(None)));
    }
}
