//! Validated identifier values
//!
//! Empty identifiers are unrepresentable: every constructor rejects blank
//! input, so a request can never carry an empty security id or comp id.

mod identifiers;

pub use identifiers::{CompId, SecurityId};

use thiserror::Error;

/// Human-facing ticker as configured (e.g. "EURUSD")
pub type Ticker = String;

/// Errors raised when constructing identifiers or routes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("Security id must not be empty")]
    EmptySecurityId,

    #[error("Comp id must not be empty")]
    EmptyCompId,

    #[error("Invalid route: {0}")]
    InvalidRoute(String),
}
