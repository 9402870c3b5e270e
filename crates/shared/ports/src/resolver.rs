use mdgate_core::SecurityId;

use crate::error::LookupResult;

/// Port for ticker to security id resolution
///
/// Implementations are read-only lookups over a snapshot loaded at startup:
/// - Static directory from configuration
/// - Fixed maps for deterministic tests
pub trait SymbolResolver: Send + Sync {
    /// Resolve a human ticker (e.g. "EURUSD") to the venue's security id
    fn resolve(&self, ticker: &str) -> LookupResult<SecurityId>;

    /// Get the resolver's name for debugging
    fn name(&self) -> &str {
        "SymbolResolver"
    }
}
