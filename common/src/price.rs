//! Canonical OHLCV price representation.
//!
//! A [`PricePoint`] is vendor-agnostic; both the live Yahoo connector and
//! the mock generator produce them. Charting consumes them read-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timeframe::Timeframe;

/// A single OHLCV bar.
///
/// Invariant: `low <= min(open, close)` and `high >= max(open, close)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// An ordered price series for one symbol and timeframe.
///
/// Timestamps are strictly increasing with no duplicates. Constructed
/// fresh per request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    /// The provider ticker this series was fetched (or mocked) for.
    pub symbol: String,
    pub timeframe: Timeframe,
    pub points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Close of the most recent point, if any.
    pub fn last_close(&self) -> Option<f64> {
        self.points.last().map(|p| p.close)
    }
}
