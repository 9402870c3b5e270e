use mdgate_core::{IdentifierError, SessionRoute};
use std::path::Path;
use thiserror::Error;

use super::types::GatewayConfigFile;
use crate::directory::TickerDirectory;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Invalid session identity: {0}")]
    InvalidSession(#[from] IdentifierError),
    #[error("No tickers configured")]
    NoTickers,
    #[error("Invalid ticker entry: {0}")]
    InvalidTicker(String),
}

/// Load gateway configuration from a JSON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<GatewayConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Load configuration from a JSON string
pub fn load_config_from_str(json: &str) -> Result<GatewayConfigFile, ConfigError> {
    let config: GatewayConfigFile = serde_json::from_str(json)?;
    Ok(config)
}

/// Load the default embedded configuration
pub fn load_default_config() -> Result<GatewayConfigFile, ConfigError> {
    let default_config = include_str!("gateway_config.json");
    load_config_from_str(default_config)
}

impl GatewayConfigFile {
    /// Routing identity stamped on every request
    pub fn route(&self) -> Result<SessionRoute, ConfigError> {
        let route = SessionRoute::new(&self.session.sender_comp_id, &self.session.target_comp_id)?;
        Ok(route)
    }

    /// Read-only ticker directory snapshot
    pub fn directory(&self) -> Result<TickerDirectory, ConfigError> {
        TickerDirectory::from_pairs(
            self.subscription
                .tickers
                .iter()
                .map(|(ticker, id)| (ticker.as_str(), id.as_str())),
        )
        .map_err(|e| ConfigError::InvalidTicker(e.to_string()))
    }

    /// Configured session qualifier, ignoring blanks
    pub fn session_qualifier(&self) -> Option<&str> {
        self.session
            .session_qualifier
            .as_deref()
            .filter(|q| !q.trim().is_empty())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.route()?;

        if self.subscription.tickers.is_empty() {
            return Err(ConfigError::NoTickers);
        }
        for (ticker, id) in &self.subscription.tickers {
            if ticker.trim().is_empty() {
                return Err(ConfigError::InvalidTicker(format!(
                    "empty ticker mapped to {}",
                    id
                )));
            }
            if id.trim().is_empty() {
                return Err(ConfigError::InvalidTicker(format!(
                    "{} has an empty security id",
                    ticker
                )));
            }
        }
        Ok(())
    }
}
