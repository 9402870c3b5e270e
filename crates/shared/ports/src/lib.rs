//! Mdgate Ports
//!
//! Port definitions (traits) for the market-data subscription gateway.
//! These define the boundaries between request construction and the
//! configuration-backed collaborators it consumes.

mod error;
mod resolver;

pub use error::{LookupError, LookupResult};
pub use resolver::SymbolResolver;
