//! Entity tagging: decides whether a news item is about a stock.

use common::TRACKED_EQUITIES;

/// Return the target symbol when the text mentions it, or any tracked
/// equity's alias, case-insensitively.
///
/// The alias check deliberately spans all tracked equities, not just
/// the target: a headline about any of the five companies tags the
/// queried symbol. Kept for parity with the upstream labeling, a known
/// imprecision rather than a feature.
pub fn identify_ticker<'a>(text: &str, symbol: &'a str) -> Option<&'a str> {
    let text = text.to_lowercase();

    if text.contains(&symbol.to_lowercase()) {
        return Some(symbol);
    }

    let alias_hit = TRACKED_EQUITIES
        .iter()
        .flat_map(|e| e.aliases.iter())
        .any(|alias| text.contains(alias));

    alias_hit.then_some(symbol)
}
