//! FIX 4.4 tag numbers used by the MarketDataRequest (`35=V`)

pub const MSG_TYPE: u32 = 35;
pub const SENDER_COMP_ID: u32 = 49;
pub const TARGET_COMP_ID: u32 = 56;

pub const MD_REQ_ID: u32 = 262;
pub const SUBSCRIPTION_REQUEST_TYPE: u32 = 263;
pub const MARKET_DEPTH: u32 = 264;
pub const MD_UPDATE_TYPE: u32 = 265;
pub const AGGREGATED_BOOK: u32 = 266;

/// Repeating group counter for entry types, followed by `MD_ENTRY_TYPE` members
pub const NO_MD_ENTRY_TYPES: u32 = 267;
pub const MD_ENTRY_TYPE: u32 = 269;

/// Repeating group counter for instruments, followed by `SECURITY_ID`/`SECURITY_ID_SOURCE`
pub const NO_RELATED_SYM: u32 = 146;
pub const SECURITY_ID: u32 = 48;
pub const SECURITY_ID_SOURCE: u32 = 22;

/// MsgType value for MarketDataRequest
pub const MARKET_DATA_REQUEST: &str = "V";
