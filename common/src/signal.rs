//! Sentiment and action labels plus the headline trading signal.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::news::AnnotatedArticle;

/// Sentiment label produced by the keyword scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recommended trading action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "SELL/SHORT")]
    SellShort,
    #[serde(rename = "HOLD")]
    Hold,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Buy => "BUY",
            Action::SellShort => "SELL/SHORT",
            Action::Hold => "HOLD",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The headline recommendation for an equity, derived from the first
/// article of a news batch.
///
/// `sentiment` and `event` are plain strings because the neutral default
/// uses the out-of-band "N/A" value the dashboard renders verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingSignal {
    pub ticker: String,
    pub sentiment: String,
    pub event: String,
    pub confidence: f64,
    pub recommended_action: Action,
    pub stop_loss: f64,
    pub take_profit: f64,
}

impl TradingSignal {
    /// The neutral default returned when no articles are available.
    pub fn neutral(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            sentiment: "N/A".to_string(),
            event: "N/A".to_string(),
            confidence: 0.00,
            recommended_action: Action::Hold,
            stop_loss: 0.00,
            take_profit: 0.00,
        }
    }
}

/// Output of the signal pipeline for one equity: the annotated article
/// batch in fetch order plus the headline signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsAnalysis {
    pub news: Vec<AnnotatedArticle>,
    pub trading_signal: TradingSignal,
}
