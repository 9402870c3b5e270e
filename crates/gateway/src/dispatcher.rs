//! Dispatcher - hands stamped requests to the addressed session
//!
//! No buffering, retry or reconnect happens here. A missing session is
//! reported straight back to the caller.

use crate::error::DispatchError;
use crate::messages::SubscriptionRequest;
use crate::session::SessionRegistry;
use log::{debug, warn};
use mdgate_core::SessionId;
use std::sync::Arc;

pub struct Dispatcher {
    registry: Arc<SessionRegistry>,
    /// Extra session qualifier from configuration, appended to the header identities
    qualifier: Option<String>,
}

impl Dispatcher {
    pub fn new(registry: Arc<SessionRegistry>) -> Self {
        Self {
            registry,
            qualifier: None,
        }
    }

    /// Address sessions registered under a qualifier
    pub fn with_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        let qualifier = qualifier.into();
        self.qualifier = (!qualifier.trim().is_empty()).then_some(qualifier);
        self
    }

    pub fn qualifier(&self) -> Option<&str> {
        self.qualifier.as_deref()
    }

    /// Send to the session derived from the request header
    ///
    /// `Ok(true)` when the session accepted the request, `Ok(false)` when the
    /// session refused it.
    pub fn dispatch(&self, request: SubscriptionRequest) -> Result<bool, DispatchError> {
        let session_id = request
            .header
            .session_id(self.qualifier())
            .ok_or_else(|| unroutable(&request))?;
        self.dispatch_to(&session_id, request)
    }

    /// Send to an explicit session address
    ///
    /// The address must be the one derived from the request header under
    /// the address's own qualifier, otherwise `InvalidRoute`.
    pub fn dispatch_to(
        &self,
        session_id: &SessionId,
        request: SubscriptionRequest,
    ) -> Result<bool, DispatchError> {
        if !request.header.is_routable() {
            return Err(unroutable(&request));
        }
        let derived = request.header.session_id(session_id.qualifier.as_deref());
        if derived.as_ref() != Some(session_id) {
            return Err(DispatchError::InvalidRoute(format!(
                "request {} is not addressed to session {}",
                request.md_req_id(),
                session_id
            )));
        }

        let session = self
            .registry
            .lookup(session_id)
            .ok_or_else(|| DispatchError::SessionNotFound(session_id.clone()))?;

        debug!("Dispatching {} to session {}", request, session_id);
        let md_req_id = request.md_req_id().clone();
        let accepted = session.send(request);
        if !accepted {
            warn!("Session {} refused request {}", session_id, md_req_id);
        }
        Ok(accepted)
    }
}

fn unroutable(request: &SubscriptionRequest) -> DispatchError {
    let missing = request.header.missing_identity().unwrap_or("header identity");
    DispatchError::InvalidRoute(format!(
        "{} not set on request {}",
        missing,
        request.md_req_id()
    ))
}
