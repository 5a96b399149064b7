//! Maps logical equity symbols to provider tickers.

use common::{find_equity, Exchange};

/// Build the Yahoo Finance ticker for a logical symbol on an exchange.
///
/// Per-equity overrides apply first (SBI trades as SBIN), then the
/// exchange suffix: ".NS" for NSE, ".BO" for BSE. An unknown exchange
/// returns the logical symbol unchanged.
pub fn provider_ticker(symbol: &str, exchange: &str) -> String {
    let base = find_equity(symbol)
        .and_then(|e| e.ticker_override)
        .unwrap_or(symbol);

    match Exchange::parse(exchange) {
        Some(ex) => format!("{}{}", base, ex.suffix()),
        None => symbol.to_string(),
    }
}
