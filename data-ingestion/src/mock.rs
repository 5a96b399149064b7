//! Synthetic OHLCV series generator.
//!
//! Used whenever the price provider is unavailable or returns no data.
//! The walk is a bounded random perturbation: each bar opens within ±1%
//! of the prior close, closes within ±1% of its open, and high/low widen
//! the open-close range by up to 1% on each side, so every bar satisfies
//! `low <= min(open, close) <= max(open, close) <= high`.

use chrono::{Duration, Utc};
use common::{PricePoint, Timeframe};

/// Sampling interval in seconds and default point count per timeframe.
fn profile(timeframe: Timeframe) -> (i64, usize) {
    match timeframe {
        // 5 minute bars covering 5 trading hours
        Timeframe::FiveMinutes => (5 * 60, 60),
        // hourly bars over one trading day
        Timeframe::OneDay => (60 * 60, 8),
        // daily bars over a trading week
        Timeframe::OneWeek => (24 * 60 * 60, 5),
        // ~20 trading days
        Timeframe::OneMonth => (24 * 60 * 60, 20),
        // ~250 trading days
        Timeframe::OneYear => (24 * 60 * 60, 250),
    }
}

/// Generator for synthetic price series.
#[derive(Debug, Clone)]
pub struct MockSeriesGenerator {
    /// Band the seed price is drawn from, uniformly.
    pub price_band: (f64, f64),
}

impl Default for MockSeriesGenerator {
    fn default() -> Self {
        Self {
            price_band: (980.0, 1020.0),
        }
    }
}

impl MockSeriesGenerator {
    pub fn new(price_band: (f64, f64)) -> Self {
        Self { price_band }
    }

    /// Generate a series for `timeframe`, ending at now.
    ///
    /// `num_points` overrides the timeframe's default count when given
    /// (the live-price fallback asks for a single bar). The RNG is
    /// injected so tests can seed it.
    pub fn generate(
        &self,
        timeframe: Timeframe,
        num_points: Option<usize>,
        rng: &mut fastrand::Rng,
    ) -> Vec<PricePoint> {
        let (interval_secs, default_points) = profile(timeframe);
        let num_points = num_points.unwrap_or(default_points);

        let (band_lo, band_hi) = self.price_band;
        let mut last_close = band_lo + rng.f64() * (band_hi - band_lo);

        let start = Utc::now() - Duration::seconds((num_points as i64 - 1) * interval_secs);

        let mut points = Vec::with_capacity(num_points);
        for i in 0..num_points {
            let open = last_close * (1.0 + (rng.f64() - 0.5) * 0.02);
            let close = open * (1.0 + (rng.f64() - 0.5) * 0.02);
            let high = open.max(close) * (1.0 + rng.f64() * 0.01);
            let low = open.min(close) * (1.0 - rng.f64() * 0.01);

            points.push(PricePoint {
                timestamp: start + Duration::seconds(i as i64 * interval_secs),
                open: round2(open),
                high: round2(high),
                low: round2(low),
                close: round2(close),
                volume: rng.u64(100_000..=5_000_000),
            });

            last_close = close;
        }

        points
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
