//! Price fetching with mock fallback.
//!
//! The fetcher masks every data-availability failure by substituting a
//! synthetic series, so dashboards always have something to chart. It
//! never returns `Err` to its caller.

use anyhow::Result;
use async_trait::async_trait;
use tracing::warn;

use common::{PricePoint, PriceSeries, Timeframe};

use crate::mock::MockSeriesGenerator;
use crate::symbols::provider_ticker;

/// Upstream price source. Implemented by [`crate::YahooFinanceClient`]
/// and by stubs in tests.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Current regular-market price, `None` when the provider has no quote.
    async fn live_price(&self, ticker: &str) -> Result<Option<f64>>;

    /// Historical OHLCV for a provider (period, interval) pair.
    async fn historical(&self, ticker: &str, period: &str, interval: &str)
        -> Result<Vec<PricePoint>>;
}

/// Provider (period, interval) pair for a timeframe. Distinct from the
/// mock generator's table: tuned to Yahoo's granularity constraints
/// (5m bars need a 1d window, hourly bars a 5d window, and so on).
fn provider_range(timeframe: Timeframe) -> (&'static str, &'static str) {
    match timeframe {
        Timeframe::FiveMinutes => ("1d", "5m"),
        Timeframe::OneDay => ("5d", "60m"),
        Timeframe::OneWeek => ("1mo", "1d"),
        Timeframe::OneMonth => ("3mo", "1d"),
        Timeframe::OneYear => ("1y", "1d"),
    }
}

/// Fetches live and historical prices, degrading to synthetic data.
pub struct PriceFetcher<P> {
    provider: P,
    mock: MockSeriesGenerator,
}

impl<P: PriceProvider> PriceFetcher<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            mock: MockSeriesGenerator::default(),
        }
    }

    pub fn with_mock_generator(mut self, mock: MockSeriesGenerator) -> Self {
        self.mock = mock;
        self
    }

    /// Current price for a symbol on an exchange. Falls back to the
    /// close of a single mock 5m bar when the provider has no quote.
    pub async fn live_price(&self, symbol: &str, exchange: &str) -> f64 {
        let ticker = provider_ticker(symbol, exchange);
        match self.provider.live_price(&ticker).await {
            Ok(Some(price)) => price,
            Ok(None) => {
                warn!("No live price for {}; generating mock", ticker);
                self.mock_close()
            }
            Err(e) => {
                warn!("Fallback: live price failed for {}: {}; generating mock", ticker, e);
                self.mock_close()
            }
        }
    }

    /// Historical series for a symbol and timeframe. An empty or failed
    /// provider response substitutes a full mock series.
    pub async fn historical(&self, symbol: &str, timeframe: Timeframe, exchange: &str) -> PriceSeries {
        let ticker = provider_ticker(symbol, exchange);
        let (period, interval) = provider_range(timeframe);

        let points = match self.provider.historical(&ticker, period, interval).await {
            Ok(points) if !points.is_empty() => points,
            Ok(_) => {
                warn!("No historical data for {} ({}); generating mock", ticker, timeframe);
                self.mock_series(timeframe)
            }
            Err(e) => {
                warn!(
                    "Fallback: historical fetch failed for {} ({}): {}; generating mock",
                    ticker, timeframe, e
                );
                self.mock_series(timeframe)
            }
        };

        PriceSeries {
            symbol: ticker,
            timeframe,
            points,
        }
    }

    fn mock_series(&self, timeframe: Timeframe) -> Vec<PricePoint> {
        let mut rng = fastrand::Rng::new();
        self.mock.generate(timeframe, None, &mut rng)
    }

    fn mock_close(&self) -> f64 {
        let mut rng = fastrand::Rng::new();
        let points = self.mock.generate(Timeframe::FiveMinutes, Some(1), &mut rng);
        // One point was requested, so last() always yields.
        points.last().map(|p| p.close).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use chrono::Utc;

    struct HealthyProvider;

    #[async_trait]
    impl PriceProvider for HealthyProvider {
        async fn live_price(&self, _ticker: &str) -> Result<Option<f64>> {
            Ok(Some(812.45))
        }

        async fn historical(
            &self,
            _ticker: &str,
            _period: &str,
            _interval: &str,
        ) -> Result<Vec<PricePoint>> {
            Ok(vec![PricePoint {
                timestamp: Utc::now(),
                open: 810.0,
                high: 815.0,
                low: 808.0,
                close: 812.45,
                volume: 1_000_000,
            }])
        }
    }

    struct DownProvider;

    #[async_trait]
    impl PriceProvider for DownProvider {
        async fn live_price(&self, _ticker: &str) -> Result<Option<f64>> {
            Err(anyhow!("connection refused"))
        }

        async fn historical(
            &self,
            _ticker: &str,
            _period: &str,
            _interval: &str,
        ) -> Result<Vec<PricePoint>> {
            Err(anyhow!("connection refused"))
        }
    }

    struct EmptyProvider;

    #[async_trait]
    impl PriceProvider for EmptyProvider {
        async fn live_price(&self, _ticker: &str) -> Result<Option<f64>> {
            Ok(None)
        }

        async fn historical(
            &self,
            _ticker: &str,
            _period: &str,
            _interval: &str,
        ) -> Result<Vec<PricePoint>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_live_price_passthrough() {
        let fetcher = PriceFetcher::new(HealthyProvider);
        assert_eq!(fetcher.live_price("SBI", "NSE").await, 812.45);
    }

    #[tokio::test]
    async fn test_live_price_falls_back_on_error() {
        let fetcher = PriceFetcher::new(DownProvider);
        let price = fetcher.live_price("SBI", "NSE").await;
        // Mock band plus the walk's 2% of headroom.
        assert!(price > 900.0 && price < 1100.0);
    }

    #[tokio::test]
    async fn test_live_price_falls_back_on_missing_quote() {
        let fetcher = PriceFetcher::new(EmptyProvider);
        assert!(fetcher.live_price("IRCTC", "NSE").await > 0.0);
    }

    #[tokio::test]
    async fn test_historical_passthrough() {
        let fetcher = PriceFetcher::new(HealthyProvider);
        let series = fetcher.historical("SBI", Timeframe::OneDay, "NSE").await;
        assert_eq!(series.symbol, "SBIN.NS");
        assert_eq!(series.len(), 1);
        assert_eq!(series.last_close(), Some(812.45));
    }

    #[tokio::test]
    async fn test_historical_mocks_on_failure_with_table_length() {
        let fetcher = PriceFetcher::new(DownProvider);
        let series = fetcher.historical("SBI", Timeframe::OneWeek, "NSE").await;
        assert_eq!(series.len(), 5);
        assert_eq!(series.timeframe, Timeframe::OneWeek);
    }

    #[tokio::test]
    async fn test_historical_mocks_on_empty_result() {
        let fetcher = PriceFetcher::new(EmptyProvider);
        let series = fetcher.historical("BEL", Timeframe::OneYear, "NSE").await;
        assert_eq!(series.len(), 250);
    }
}
