//! Keyword-based sentiment scoring.
//!
//! Presence-per-keyword counting: a keyword contributes at most ±1 no
//! matter how often it repeats. Deterministic and side-effect free.

use common::Sentiment;

const POSITIVE_KEYWORDS: &[&str] = &[
    "profit",
    "soar",
    "jump",
    "rises",
    "invest",
    "contract",
    "boosts",
    "growth",
    "strong",
    "improves",
    "expands",
    "dividend",
    "bullish",
    "exceeding expectations",
    "robust",
    "healthy",
    "gains",
    "partnership",
    "collaboration",
    "launch",
];

const NEGATIVE_KEYWORDS: &[&str] = &[
    "loss",
    "headwinds",
    "rising fuel",
    "supply chain issues",
    "missed",
    "resigned",
    "downgrade",
    "decline",
    "fall",
    "struggle",
    "uncertainty",
    "volatility",
    "challenges",
];

/// Score free text as positive, negative, or neutral.
///
/// Announcement-style phrases ("board approves", "plans", "quarterly
/// results") carry no weight; any text that nets to zero is neutral.
pub fn analyze(text: &str) -> Sentiment {
    let text = text.to_lowercase();
    let mut score: i32 = 0;

    for keyword in POSITIVE_KEYWORDS {
        if text.contains(keyword) {
            score += 1;
        }
    }
    for keyword in NEGATIVE_KEYWORDS {
        if text.contains(keyword) {
            score -= 1;
        }
    }

    match score.cmp(&0) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    }
}
