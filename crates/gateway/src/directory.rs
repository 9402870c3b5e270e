//! Ticker directory - configuration-backed symbol resolution

use log::debug;
use mdgate_core::{IdentifierError, SecurityId, Ticker};
use mdgate_ports::{LookupError, LookupResult, SymbolResolver};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Immutable ticker -> security id map
///
/// Cloning is cheap; all clones share one snapshot.
#[derive(Debug, Clone, Default)]
pub struct TickerDirectory {
    entries: Arc<BTreeMap<Ticker, SecurityId>>,
}

impl TickerDirectory {
    /// Create from validated entries
    pub fn new(entries: BTreeMap<Ticker, SecurityId>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Create from raw (ticker, security id) pairs, rejecting blank ids
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, IdentifierError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(ticker, id)| Ok((ticker.into(), SecurityId::new(id)?)))
            .collect::<Result<BTreeMap<_, _>, IdentifierError>>()?;
        Ok(Self::new(entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Configured tickers in sorted order
    pub fn tickers(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn contains(&self, ticker: &str) -> bool {
        self.entries.contains_key(ticker)
    }
}

impl SymbolResolver for TickerDirectory {
    fn resolve(&self, ticker: &str) -> LookupResult<SecurityId> {
        match self.entries.get(ticker) {
            Some(id) => {
                debug!("Resolved ticker {} -> security id {}", ticker, id);
                Ok(id.clone())
            }
            None => Err(LookupError::UnknownTicker(ticker.to_string())),
        }
    }

    fn name(&self) -> &str {
        "TickerDirectory"
    }
}
