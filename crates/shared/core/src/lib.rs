//! Mdgate Core Domain
//!
//! Pure domain types for the market-data subscription gateway: validated
//! identifiers, FIX 4.4 MarketDataRequest field values and session routing.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod tags;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    AggregatedBook, MdEntryType, MdUpdateType, SecurityIdSource, SessionId, SessionRoute,
    SubscriptionRequestType,
};
pub use values::{CompId, IdentifierError, SecurityId, Ticker};
