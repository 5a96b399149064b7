//! Maps a sentiment label to a recommended action with randomized
//! confidence, stop-loss, and take-profit ranges.

use std::ops::Range;

use common::{Action, Sentiment};
use serde::Serialize;

/// Action recommendation for one article.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeAdvice {
    pub recommended_action: Action,
    pub confidence: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
}

/// Draw an advice from the sentiment's ranges. Non-deterministic by
/// design; tests assert range membership with a seeded RNG.
///
/// | sentiment | action     | confidence   | stop-loss  | take-profit |
/// |-----------|------------|--------------|------------|-------------|
/// | positive  | BUY        | [0.70, 0.90] | [2.5, 3.5] | [5.0, 7.0]  |
/// | negative  | SELL/SHORT | [0.70, 0.90] | [3.0, 4.0] | [6.0, 8.0]  |
/// | neutral   | HOLD       | [0.40, 0.60] | [1.0, 2.0] | [2.0, 4.0]  |
pub fn map_action(sentiment: Sentiment, rng: &mut fastrand::Rng) -> TradeAdvice {
    let (action, confidence, stop_loss, take_profit) = match sentiment {
        Sentiment::Positive => (Action::Buy, 0.70..0.90, 2.5..3.5, 5.0..7.0),
        Sentiment::Negative => (Action::SellShort, 0.70..0.90, 3.0..4.0, 6.0..8.0),
        Sentiment::Neutral => (Action::Hold, 0.40..0.60, 1.0..2.0, 2.0..4.0),
    };

    TradeAdvice {
        recommended_action: action,
        confidence: round2(uniform(rng, confidence)),
        stop_loss: round2(uniform(rng, stop_loss)),
        take_profit: round2(uniform(rng, take_profit)),
    }
}

fn uniform(rng: &mut fastrand::Rng, range: Range<f64>) -> f64 {
    range.start + rng.f64() * (range.end - range.start)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
