use serde::{Deserialize, Serialize};

/// AggregatedBook (tag 266)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AggregatedBook {
    /// One entry per price level (`Y`)
    AggregateEntries,
    /// Multiple entries per price level allowed (`N`)
    SeparateEntries,
}

impl AggregatedBook {
    /// FIX wire value
    pub fn code(&self) -> &'static str {
        match self {
            AggregatedBook::AggregateEntries => "Y",
            AggregatedBook::SeparateEntries => "N",
        }
    }

    pub fn is_aggregated(&self) -> bool {
        matches!(self, AggregatedBook::AggregateEntries)
    }
}
