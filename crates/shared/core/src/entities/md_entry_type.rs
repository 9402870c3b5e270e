use serde::{Deserialize, Serialize};

/// MDEntryType (tag 269)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MdEntryType {
    Bid,
    Offer,
}

impl MdEntryType {
    /// Both sides of the book, in the order counterparties expect them
    pub const BOTH_SIDES: [MdEntryType; 2] = [MdEntryType::Bid, MdEntryType::Offer];

    /// FIX wire value
    pub fn code(&self) -> &'static str {
        match self {
            MdEntryType::Bid => "0",
            MdEntryType::Offer => "1",
        }
    }
}
