//! Error types for the gateway crate

use crate::config::ConfigError;
use mdgate_core::{IdentifierError, SessionId};
use mdgate_ports::LookupError;
use thiserror::Error;

/// Dispatch-level errors (session hand-off)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Session not found: {0}")]
    SessionNotFound(SessionId),

    #[error("Invalid route: {0}")]
    InvalidRoute(String),
}

/// Gateway-level errors (subscribe operations)
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("Identifier error: {0}")]
    Identifier(#[from] IdentifierError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl GatewayError {
    /// True when the failure came from a missing session, which a caller may retry later
    pub fn is_session_not_found(&self) -> bool {
        matches!(
            self,
            GatewayError::Dispatch(DispatchError::SessionNotFound(_))
        )
    }
}
