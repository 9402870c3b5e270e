//! Bootstrap - wiring a gateway process from configuration
//!
//! Handles process setup:
//! - Building the session registry and the in-process session
//! - Creating the subscription service over the configured route
//! - Subscribing (or unsubscribing) every configured ticker

use log::{info, warn};
use mdgate_gateway::{
    ChannelSession, GatewayConfigFile, GatewayError, MarketDataService, Session,
    SessionRegistry, SubscriptionRequest,
};
use std::sync::Arc;
use tokio::sync::mpsc::Receiver;

/// Running gateway components
pub struct Bootstrap {
    pub service: MarketDataService,
    pub session: Arc<ChannelSession>,
    /// Outbound side of the session queue
    pub outbound: Receiver<SubscriptionRequest>,
    /// Tickers from configuration, sorted
    pub tickers: Vec<String>,
}

/// Wire the service to a logged-on channel session for the configured route
pub fn bootstrap(config: &GatewayConfigFile) -> Result<Bootstrap, GatewayError> {
    let route = config.route()?;
    let session_id = route.session_id(config.session_qualifier());

    let (session, outbound) =
        ChannelSession::pair(session_id, config.session.outbound_queue_capacity);
    let session = Arc::new(session);
    session.logon();

    let registry = Arc::new(SessionRegistry::new());
    registry.register(Arc::clone(&session) as Arc<dyn Session>);

    let service = MarketDataService::from_config(config, registry)?;
    let tickers = config.subscription.tickers.keys().cloned().collect();

    Ok(Bootstrap {
        service,
        session,
        outbound,
        tickers,
    })
}

/// Outcome of a bulk subscribe/unsubscribe pass
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SubscriptionSummary {
    pub accepted: Vec<String>,
    pub refused: Vec<String>,
    pub failed: Vec<String>,
}

/// Apply one intent to every ticker, logging each failure and carrying on
pub fn subscribe_all(
    service: &MarketDataService,
    tickers: &[String],
    subscribe: bool,
) -> SubscriptionSummary {
    let mut summary = SubscriptionSummary::default();

    for ticker in tickers {
        match service.subscribe(ticker, subscribe) {
            Ok(true) => summary.accepted.push(ticker.clone()),
            Ok(false) => {
                warn!("Session refused request for {}", ticker);
                summary.refused.push(ticker.clone());
            }
            Err(e) => {
                warn!("Request for {} failed: {}", ticker, e);
                summary.failed.push(ticker.clone());
            }
        }
    }

    info!(
        "{} pass: {} accepted, {} refused, {} failed",
        if subscribe { "Subscribe" } else { "Unsubscribe" },
        summary.accepted.len(),
        summary.refused.len(),
        summary.failed.len()
    );
    summary
}
