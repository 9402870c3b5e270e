use thiserror::Error;

/// Errors raised while resolving a ticker to a security id
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Unknown ticker: {0}")]
    UnknownTicker(String),
}

pub type LookupResult<T> = std::result::Result<T, LookupError>;
