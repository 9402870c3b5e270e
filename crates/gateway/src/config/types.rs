use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfigFile {
    pub session: SessionConfig,
    #[serde(default)]
    pub subscription: SubscriptionConfig,
}

/// Session routing identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub sender_comp_id: String,
    pub target_comp_id: String,
    /// Distinguishes several sessions between the same parties
    #[serde(default)]
    pub session_qualifier: Option<String>,
    /// Outbound queue size for the in-process session
    #[serde(default = "default_outbound_queue_capacity")]
    pub outbound_queue_capacity: usize,
}

fn default_outbound_queue_capacity() -> usize {
    1000
}

/// Instruments available for subscription
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubscriptionConfig {
    /// Ticker -> venue security id
    #[serde(default)]
    pub tickers: BTreeMap<String, String>,
}
