use serde::{Deserialize, Serialize};

/// SecurityIDSource (tag 22)
///
/// Only the exchange-symbol convention is used: the venue publishes its own
/// numeric instrument ids and expects them back verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecurityIdSource {
    /// Exchange symbol (`8`)
    ExchangeSymbol,
}

impl SecurityIdSource {
    /// FIX wire value
    pub fn code(&self) -> &'static str {
        match self {
            SecurityIdSource::ExchangeSymbol => "8",
        }
    }
}
