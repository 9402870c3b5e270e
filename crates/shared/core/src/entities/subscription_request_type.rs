use serde::{Deserialize, Serialize};

/// SubscriptionRequestType (tag 263)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubscriptionRequestType {
    /// Snapshot followed by streaming updates (`1`)
    SnapshotPlusUpdates,
    /// Cancel the subscription registered under the same MDReqID (`2`)
    DisablePrevious,
}

impl SubscriptionRequestType {
    /// Map a subscribe/unsubscribe intent onto the request type
    pub fn from_intent(subscribe: bool) -> Self {
        if subscribe {
            SubscriptionRequestType::SnapshotPlusUpdates
        } else {
            SubscriptionRequestType::DisablePrevious
        }
    }

    /// FIX wire value
    pub fn code(&self) -> &'static str {
        match self {
            SubscriptionRequestType::SnapshotPlusUpdates => "1",
            SubscriptionRequestType::DisablePrevious => "2",
        }
    }

    /// Returns true if this request starts (rather than stops) a stream
    pub fn is_subscribe(&self) -> bool {
        matches!(self, SubscriptionRequestType::SnapshotPlusUpdates)
    }
}
