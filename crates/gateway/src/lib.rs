//! Mdgate Gateway
//!
//! Gateway layer for FIX 4.4 market-data subscriptions. Provides:
//! - Ticker directory (ticker -> venue security id)
//! - MarketDataRequest (`35=V`) construction and header stamping
//! - Session seam with an in-process channel session and a registry
//! - Dispatcher handing finished requests to the addressed session
//!
//! ## Architecture
//!
//! ```text
//!  subscribe("EURUSD", true)
//!         │
//!    ┌────▼─────┐   ┌─────────┐   ┌─────────┐   ┌────────────┐
//!    │ Resolver ├──►│ Builder ├──►│ Stamper ├──►│ Dispatcher │
//!    └──────────┘   └─────────┘   └─────────┘   └─────┬──────┘
//!                                                     │ SessionId
//!                                             ┌───────▼─────────┐
//!                                             │ SessionRegistry │
//!                                             └───────┬─────────┘
//!                                                     │ send()
//!                                          External session engine
//! ```
//!
//! ## Sessions
//!
//! Logon, sequencing and framing live outside this crate. The `Session`
//! trait is the seam; `ChannelSession` queues requests on a tokio channel
//! for single-process operation and tests.

pub mod config;
pub mod directory;
pub mod dispatcher;
pub mod error;
pub mod messages;
pub mod service;
pub mod session;

// Re-export commonly used types
pub use config::{ConfigError, GatewayConfigFile, load_config, load_default_config};
pub use directory::TickerDirectory;
pub use dispatcher::Dispatcher;
pub use error::{DispatchError, GatewayError};
pub use messages::{
    header::Header,
    market_data_request::{RelatedSymbol, RequestBody, SubscriptionRequest, build},
};
pub use service::MarketDataService;
pub use session::{ChannelSession, Session, SessionRegistry};
