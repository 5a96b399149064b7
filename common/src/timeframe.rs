//! Chart timeframe tokens used by the dashboard controls.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Timeframe selected on a stock page. Unknown tokens fall back to one
/// year rather than erroring, preserving the dashboard's behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "1w")]
    OneWeek,
    #[serde(rename = "1m")]
    OneMonth,
    #[serde(rename = "1y")]
    OneYear,
}

impl Timeframe {
    /// All supported tokens, in dashboard order.
    pub const ALL: [Timeframe; 5] = [
        Timeframe::FiveMinutes,
        Timeframe::OneDay,
        Timeframe::OneWeek,
        Timeframe::OneMonth,
        Timeframe::OneYear,
    ];

    /// Parse a timeframe token, defaulting unknown tokens to 1y.
    pub fn parse(token: &str) -> Self {
        match token {
            "5m" => Timeframe::FiveMinutes,
            "1d" => Timeframe::OneDay,
            "1w" => Timeframe::OneWeek,
            "1m" => Timeframe::OneMonth,
            "1y" => Timeframe::OneYear,
            _ => Timeframe::OneYear,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::FiveMinutes => "5m",
            Timeframe::OneDay => "1d",
            Timeframe::OneWeek => "1w",
            Timeframe::OneMonth => "1m",
            Timeframe::OneYear => "1y",
        }
    }
}

impl Default for Timeframe {
    fn default() -> Self {
        Timeframe::OneYear
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tokens() {
        for tf in Timeframe::ALL {
            assert_eq!(Timeframe::parse(tf.as_str()), tf);
        }
    }

    #[test]
    fn test_unknown_token_defaults_to_one_year() {
        assert_eq!(Timeframe::parse("6h"), Timeframe::OneYear);
        assert_eq!(Timeframe::parse(""), Timeframe::OneYear);
        assert_eq!(Timeframe::parse("1M"), Timeframe::OneYear);
    }
}
