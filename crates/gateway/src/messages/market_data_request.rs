//! MarketDataRequest (`35=V`) construction

use super::header::Header;
use mdgate_core::{
    AggregatedBook, MdEntryType, MdUpdateType, SecurityId, SecurityIdSource, SessionRoute,
    SubscriptionRequestType, tags,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Market depth sent on every request: full book, no explicit depth limit
pub const FULL_BOOK_DEPTH: u32 = 0;

/// NoRelatedSym group member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedSymbol {
    pub security_id: SecurityId,
    pub security_id_source: SecurityIdSource,
}

impl RelatedSymbol {
    /// Instrument identified by its exchange symbol
    pub fn exchange_symbol(security_id: SecurityId) -> Self {
        Self {
            security_id,
            security_id_source: SecurityIdSource::ExchangeSymbol,
        }
    }
}

/// Body fields of the request, everything except the routing header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestBody {
    /// MDReqID, reused from the security id
    pub md_req_id: SecurityId,
    pub subscription_request_type: SubscriptionRequestType,
    pub market_depth: u32,
    pub md_update_type: MdUpdateType,
    pub aggregated_book: AggregatedBook,
    /// NoRelatedSym, always a single instrument
    pub related_symbols: Vec<RelatedSymbol>,
    /// NoMDEntryTypes, always bid then offer
    pub md_entry_types: Vec<MdEntryType>,
}

/// Outbound market-data subscription request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionRequest {
    pub header: Header,
    pub body: RequestBody,
}

/// Build a request for one instrument
///
/// `subscribe = false` produces the cancellation of an earlier subscription
/// keyed by the same MDReqID. Transport-shaping fields (depth, update type,
/// aggregation) are identical in both branches. The header is left empty.
pub fn build(security_id: &SecurityId, subscribe: bool) -> SubscriptionRequest {
    SubscriptionRequest::new(
        security_id.clone(),
        SubscriptionRequestType::from_intent(subscribe),
    )
}

impl SubscriptionRequest {
    /// Create an unstamped request of the given type
    pub fn new(security_id: SecurityId, request_type: SubscriptionRequestType) -> Self {
        Self {
            header: Header::default(),
            body: RequestBody {
                md_req_id: security_id.clone(),
                subscription_request_type: request_type,
                market_depth: FULL_BOOK_DEPTH,
                md_update_type: MdUpdateType::FullRefresh,
                aggregated_book: AggregatedBook::AggregateEntries,
                related_symbols: vec![RelatedSymbol::exchange_symbol(security_id)],
                md_entry_types: MdEntryType::BOTH_SIDES.to_vec(),
            },
        }
    }

    /// Subscribe to snapshot plus updates
    pub fn subscribe(security_id: SecurityId) -> Self {
        Self::new(security_id, SubscriptionRequestType::SnapshotPlusUpdates)
    }

    /// Disable a previous snapshot plus updates request
    pub fn unsubscribe(security_id: SecurityId) -> Self {
        Self::new(security_id, SubscriptionRequestType::DisablePrevious)
    }

    /// Stamp the routing identity onto the header; the body is not touched
    pub fn stamp(&mut self, route: &SessionRoute) {
        self.header.apply_route(route);
    }

    /// Builder-style variant of [`stamp`](Self::stamp)
    pub fn stamped(mut self, route: &SessionRoute) -> Self {
        self.stamp(route);
        self
    }

    pub fn md_req_id(&self) -> &SecurityId {
        &self.body.md_req_id
    }

    pub fn request_type(&self) -> SubscriptionRequestType {
        self.body.subscription_request_type
    }

    /// Tag/value view of the request in wire order
    ///
    /// Repeating groups are emitted as the counter tag followed by the
    /// members. Header tags are omitted while unset.
    pub fn fields(&self) -> Vec<(u32, String)> {
        let body = &self.body;
        let mut fields = vec![(tags::MSG_TYPE, tags::MARKET_DATA_REQUEST.to_string())];

        if let Some(sender) = &self.header.sender_comp_id {
            fields.push((tags::SENDER_COMP_ID, sender.to_string()));
        }
        if let Some(target) = &self.header.target_comp_id {
            fields.push((tags::TARGET_COMP_ID, target.to_string()));
        }

        fields.push((tags::MD_REQ_ID, body.md_req_id.to_string()));
        fields.push((
            tags::SUBSCRIPTION_REQUEST_TYPE,
            body.subscription_request_type.code().to_string(),
        ));
        fields.push((tags::MARKET_DEPTH, body.market_depth.to_string()));
        fields.push((tags::MD_UPDATE_TYPE, body.md_update_type.code().to_string()));
        fields.push((tags::AGGREGATED_BOOK, body.aggregated_book.code().to_string()));

        fields.push((tags::NO_MD_ENTRY_TYPES, body.md_entry_types.len().to_string()));
        for entry_type in &body.md_entry_types {
            fields.push((tags::MD_ENTRY_TYPE, entry_type.code().to_string()));
        }

        fields.push((tags::NO_RELATED_SYM, body.related_symbols.len().to_string()));
        for symbol in &body.related_symbols {
            fields.push((tags::SECURITY_ID, symbol.security_id.to_string()));
            fields.push((
                tags::SECURITY_ID_SOURCE,
                symbol.security_id_source.code().to_string(),
            ));
        }

        fields
    }
}

/// Pipe-delimited tag=value rendering, for logs
impl fmt::Display for SubscriptionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (tag, value)) in self.fields().iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{}={}", tag, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn security_id() -> SecurityId {
        SecurityId::new("1001").unwrap()
    }

    #[test]
    fn test_build_subscribe() {
        let request = build(&security_id(), true);

        assert_eq!(request.md_req_id().as_str(), "1001");
        assert_eq!(
            request.request_type(),
            SubscriptionRequestType::SnapshotPlusUpdates
        );
        assert_eq!(request.body.market_depth, 0);
        assert_eq!(request.body.md_update_type, MdUpdateType::FullRefresh);
        assert!(request.body.aggregated_book.is_aggregated());
        assert_eq!(
            request.body.related_symbols,
            vec![RelatedSymbol {
                security_id: security_id(),
                security_id_source: SecurityIdSource::ExchangeSymbol,
            }]
        );
        assert_eq!(
            request.body.md_entry_types,
            vec![MdEntryType::Bid, MdEntryType::Offer]
        );
        assert_eq!(request.header, Header::default());
    }

    #[test]
    fn test_unsubscribe_differs_only_in_request_type() {
        let subscribe = build(&security_id(), true);
        let mut unsubscribe = build(&security_id(), false);

        assert_eq!(
            unsubscribe.request_type(),
            SubscriptionRequestType::DisablePrevious
        );

        unsubscribe.body.subscription_request_type = SubscriptionRequestType::SnapshotPlusUpdates;
        assert_eq!(unsubscribe, subscribe);
    }

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(build(&security_id(), true), build(&security_id(), true));
        assert_eq!(build(&security_id(), false), build(&security_id(), false));
    }

    #[test]
    fn test_convenience_constructors_match_build() {
        assert_eq!(
            SubscriptionRequest::subscribe(security_id()),
            build(&security_id(), true)
        );
        assert_eq!(
            SubscriptionRequest::unsubscribe(security_id()),
            build(&security_id(), false)
        );
    }

    #[test]
    fn test_stamp_sets_header_and_keeps_body() {
        let route = SessionRoute::new("CLIENT1", "LMAX").unwrap();
        let mut request = build(&security_id(), true);
        let body_before = request.body.clone();

        request.stamp(&route);

        assert_eq!(request.header.sender_comp_id.as_ref(), Some(route.sender()));
        assert_eq!(request.header.target_comp_id.as_ref(), Some(route.target()));
        assert_eq!(request.body, body_before);
    }

    #[test]
    fn test_fields_wire_order() {
        let route = SessionRoute::new("CLIENT1", "LMAX").unwrap();
        let request = build(&security_id(), true).stamped(&route);

        let expected: Vec<(u32, String)> = [
            (35, "V"),
            (49, "CLIENT1"),
            (56, "LMAX"),
            (262, "1001"),
            (263, "1"),
            (264, "0"),
            (265, "0"),
            (266, "Y"),
            (267, "2"),
            (269, "0"),
            (269, "1"),
            (146, "1"),
            (48, "1001"),
            (22, "8"),
        ]
        .into_iter()
        .map(|(tag, value)| (tag, value.to_string()))
        .collect();

        assert_eq!(request.fields(), expected);
    }

    #[test]
    fn test_unstamped_fields_omit_header() {
        let request = build(&security_id(), false);
        let fields = request.fields();

        assert!(!fields.iter().any(|(tag, _)| *tag == tags::SENDER_COMP_ID));
        assert!(!fields.iter().any(|(tag, _)| *tag == tags::TARGET_COMP_ID));
        assert!(fields.contains(&(tags::SUBSCRIPTION_REQUEST_TYPE, "2".to_string())));
    }

    #[test]
    fn test_display() {
        let route = SessionRoute::new("CLIENT1", "LMAX").unwrap();
        let request = build(&security_id(), false).stamped(&route);

        assert_eq!(
            request.to_string(),
            "35=V|49=CLIENT1|56=LMAX|262=1001|263=2|264=0|265=0|266=Y|267=2|269=0|269=1|146=1|48=1001|22=8"
        );
    }
}
