//! The fixed set of tracked equities and exchange conventions.
//!
//! The dashboard follows five Indian large-caps. Each entry carries its
//! logical symbol, display name, an optional provider ticker override
//! (Yahoo lists SBI as SBIN) and the lowercase aliases the entity tagger
//! matches headlines against. Alias lists mirror the upstream labeling
//! exactly; a bare symbol mention is the tagger's symbol match, not an
//! alias, so IRCTC carries only its long-form name.

/// A tracked equity, configured at startup and immutable at runtime.
#[derive(Debug, Clone, Copy)]
pub struct Equity {
    /// Logical symbol used across the service (e.g. "SBI").
    pub symbol: &'static str,
    /// Human-readable company name.
    pub name: &'static str,
    /// Provider ticker when it differs from the logical symbol.
    pub ticker_override: Option<&'static str>,
    /// Lowercase substrings that identify this company in free text.
    pub aliases: &'static [&'static str],
}

/// The five equities the service tracks.
pub const TRACKED_EQUITIES: &[Equity] = &[
    Equity {
        symbol: "SBI",
        name: "State Bank of India",
        ticker_override: Some("SBIN"),
        aliases: &["state bank of india", "sbi"],
    },
    Equity {
        symbol: "IRCTC",
        name: "IRCTC",
        ticker_override: None,
        aliases: &["indian railways catering"],
    },
    Equity {
        symbol: "TATAMOTORS",
        name: "Tata Motors",
        ticker_override: None,
        aliases: &["tata motors"],
    },
    Equity {
        symbol: "BEL",
        name: "Bharat Electronics",
        ticker_override: None,
        aliases: &["bharat electronics", "bel"],
    },
    Equity {
        symbol: "INDIGO",
        name: "IndiGo Airlines",
        ticker_override: None,
        aliases: &["indigo airlines"],
    },
];

/// Look up a tracked equity by its logical symbol (case-insensitive).
pub fn find_equity(symbol: &str) -> Option<&'static Equity> {
    TRACKED_EQUITIES
        .iter()
        .find(|e| e.symbol.eq_ignore_ascii_case(symbol))
}

/// Stock exchanges the service understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exchange {
    Nse,
    Bse,
}

impl Exchange {
    /// Parse an exchange token; anything but NSE/BSE is unknown.
    pub fn parse(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("NSE") {
            Some(Exchange::Nse)
        } else if token.eq_ignore_ascii_case("BSE") {
            Some(Exchange::Bse)
        } else {
            None
        }
    }

    /// Yahoo Finance ticker suffix for this exchange.
    pub fn suffix(&self) -> &'static str {
        match self {
            Exchange::Nse => ".NS",
            Exchange::Bse => ".BO",
        }
    }
}
