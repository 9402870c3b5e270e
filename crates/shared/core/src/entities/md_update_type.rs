use serde::{Deserialize, Serialize};

/// MDUpdateType (tag 265)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MdUpdateType {
    /// Every update carries the whole book (`0`)
    FullRefresh,
    /// Updates carry deltas only (`1`)
    IncrementalRefresh,
}

impl MdUpdateType {
    /// FIX wire value
    pub fn code(&self) -> &'static str {
        match self {
            MdUpdateType::FullRefresh => "0",
            MdUpdateType::IncrementalRefresh => "1",
        }
    }
}
