//! Market data subscription service
//!
//! Entry point for the application layer: resolve the ticker, build the
//! request, stamp the route and dispatch, strictly in that order. Holds no
//! subscription state; unsubscribe is just a different request.

use crate::config::GatewayConfigFile;
use crate::directory::TickerDirectory;
use crate::dispatcher::Dispatcher;
use crate::error::GatewayError;
use crate::messages::{SubscriptionRequest, build};
use crate::session::SessionRegistry;
use log::{debug, info};
use mdgate_core::SessionRoute;
use mdgate_ports::SymbolResolver;
use std::sync::Arc;

pub struct MarketDataService {
    resolver: Arc<dyn SymbolResolver>,
    route: SessionRoute,
    dispatcher: Dispatcher,
}

impl MarketDataService {
    /// Create with explicit collaborators
    pub fn new(
        resolver: Arc<dyn SymbolResolver>,
        route: SessionRoute,
        dispatcher: Dispatcher,
    ) -> Self {
        info!(
            "MarketDataService ready: route {}, resolver {}, qualifier {:?}",
            route,
            resolver.name(),
            dispatcher.qualifier()
        );
        Self {
            resolver,
            route,
            dispatcher,
        }
    }

    /// Create from validated configuration, dispatching into `registry`
    pub fn from_config(
        config: &GatewayConfigFile,
        registry: Arc<SessionRegistry>,
    ) -> Result<Self, GatewayError> {
        config.validate()?;
        info!("subscription config: {:?}", config.subscription);
        info!("session config: {:?}", config.session);

        let directory: TickerDirectory = config.directory()?;
        let mut dispatcher = Dispatcher::new(registry);
        if let Some(qualifier) = config.session_qualifier() {
            dispatcher = dispatcher.with_qualifier(qualifier);
        }

        Ok(Self::new(Arc::new(directory), config.route()?, dispatcher))
    }

    pub fn route(&self) -> &SessionRoute {
        &self.route
    }

    /// Subscribe to (or unsubscribe from) bid/offer updates for a ticker
    ///
    /// Returns whether the session accepted the request. Fails with
    /// `UnknownTicker` before anything is built, or with `SessionNotFound`
    /// when no live session matches the route.
    pub fn subscribe(&self, ticker: &str, subscribe: bool) -> Result<bool, GatewayError> {
        let request = self.create_request(ticker, subscribe)?;
        let action = if request.request_type().is_subscribe() {
            "Subscribing to"
        } else {
            "Unsubscribing from"
        };
        debug!(
            "{} {} as MDReqID {}",
            action,
            ticker,
            request.md_req_id()
        );
        Ok(self.dispatcher.dispatch(request)?)
    }

    /// Resolve, build and stamp without dispatching
    pub fn create_request(
        &self,
        ticker: &str,
        subscribe: bool,
    ) -> Result<SubscriptionRequest, GatewayError> {
        let security_id = self.resolver.resolve(ticker)?;
        Ok(build(&security_id, subscribe).stamped(&self.route))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DispatchError;
    use crate::session::ChannelSession;
    use mdgate_core::SubscriptionRequestType;
    use mdgate_ports::LookupError;

    fn service(registry: Arc<SessionRegistry>) -> MarketDataService {
        let directory = TickerDirectory::from_pairs([("EURUSD", "1001")]).unwrap();
        MarketDataService::new(
            Arc::new(directory),
            SessionRoute::new("CLIENT1", "LMAX").unwrap(),
            Dispatcher::new(registry),
        )
    }

    #[test]
    fn test_create_request_is_stamped() {
        let service = service(Arc::new(SessionRegistry::new()));
        let request = service.create_request("EURUSD", true).unwrap();

        assert!(request.header.is_routable());
        assert_eq!(request.md_req_id().as_str(), "1001");
        assert_eq!(
            request.request_type(),
            SubscriptionRequestType::SnapshotPlusUpdates
        );
    }

    #[test]
    fn test_route_matches_stamped_header() {
        let service = service(Arc::new(SessionRegistry::new()));
        let request = service.create_request("EURUSD", false).unwrap();

        assert_eq!(service.route().to_string(), "CLIENT1->LMAX");
        assert_eq!(
            request.header.session_id(None),
            Some(service.route().session_id(None))
        );
    }

    #[test]
    fn test_unknown_ticker() {
        let service = service(Arc::new(SessionRegistry::new()));

        let err = service.subscribe("UNKNOWN", true).unwrap_err();
        assert!(matches!(
            err,
            GatewayError::Lookup(LookupError::UnknownTicker(ref t)) if t == "UNKNOWN"
        ));
    }

    #[test]
    fn test_session_not_found() {
        let service = service(Arc::new(SessionRegistry::new()));

        let err = service.subscribe("EURUSD", true).unwrap_err();
        assert!(err.is_session_not_found());
        assert!(matches!(
            err,
            GatewayError::Dispatch(DispatchError::SessionNotFound(_))
        ));
    }

    #[test]
    fn test_subscribe_and_unsubscribe() {
        let registry = Arc::new(SessionRegistry::new());
        let route = SessionRoute::new("CLIENT1", "LMAX").unwrap();
        let (session, mut rx) = ChannelSession::pair(route.session_id(None), 10);
        session.logon();
        registry.register(Arc::new(session));
        let service = service(registry);

        assert!(service.subscribe("EURUSD", true).unwrap());
        assert!(service.subscribe("EURUSD", false).unwrap());

        let first = rx.try_recv().unwrap();
        let second = rx.try_recv().unwrap();
        assert_eq!(
            first.request_type(),
            SubscriptionRequestType::SnapshotPlusUpdates
        );
        assert_eq!(second.request_type(), SubscriptionRequestType::DisablePrevious);
        assert_eq!(first.md_req_id(), second.md_req_id());
    }
}
