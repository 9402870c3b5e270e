//! Outbound message types
//!
//! Only the logical field set is populated here. Framing (BodyLength,
//! MsgSeqNum, SendingTime, CheckSum) belongs to the session engine.

pub mod header;
pub mod market_data_request;

pub use header::Header;
pub use market_data_request::{RelatedSymbol, RequestBody, SubscriptionRequest, build};
