//! Yahoo Finance chart API connector.
//!
//! Yahoo needs no API key; a single chart endpoint serves both the
//! current regular-market price (from the result metadata) and the
//! historical OHLCV arrays.

use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use common::PricePoint;

use crate::price::PriceProvider;

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Client for the Yahoo Finance v8 chart endpoint.
pub struct YahooFinanceClient {
    base_url: String,
    client: Client,
    timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    meta: ChartMeta,
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    #[serde(rename = "regularMarketPrice")]
    regular_market_price: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<Quote>,
}

/// Parallel OHLCV arrays; Yahoo uses nulls for halted intervals.
#[derive(Debug, Default, Deserialize)]
struct Quote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<u64>>,
}

impl YahooFinanceClient {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            client: Client::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn chart(&self, ticker: &str, range: &str, interval: &str) -> Result<ChartResult> {
        let url = format!("{}/v8/finance/chart/{}", self.base_url, ticker);
        debug!("Requesting Yahoo chart: {} ({}, {})", ticker, range, interval);

        let response = self
            .client
            .get(&url)
            .query(&[("range", range), ("interval", interval)])
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!("Yahoo chart API error: {}", response.status()));
        }

        let body: ChartResponse = response.json().await?;

        if let Some(err) = body.chart.error {
            return Err(anyhow!("Yahoo chart error {}: {}", err.code, err.description));
        }

        body.chart
            .result
            .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
            .ok_or_else(|| anyhow!("Yahoo chart response carried no result for {}", ticker))
    }
}

impl Default for YahooFinanceClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceProvider for YahooFinanceClient {
    async fn live_price(&self, ticker: &str) -> Result<Option<f64>> {
        let result = self.chart(ticker, "1d", "5m").await?;
        Ok(result.meta.regular_market_price)
    }

    async fn historical(&self, ticker: &str, period: &str, interval: &str) -> Result<Vec<PricePoint>> {
        let result = self.chart(ticker, period, interval).await?;
        let points = points_from_chart(&result);
        info!("Fetched {} historical points for {}", points.len(), ticker);
        Ok(points)
    }
}

/// Zip Yahoo's parallel arrays into price points, skipping null rows.
fn points_from_chart(result: &ChartResult) -> Vec<PricePoint> {
    let quote = match result.indicators.quote.first() {
        Some(q) => q,
        None => return Vec::new(),
    };

    result
        .timestamp
        .iter()
        .enumerate()
        .filter_map(|(i, &ts)| {
            let timestamp = Utc.timestamp_opt(ts, 0).single()?;
            Some(PricePoint {
                timestamp,
                open: (*quote.open.get(i)?)?,
                high: (*quote.high.get(i)?)?,
                low: (*quote.low.get(i)?)?,
                close: (*quote.close.get(i)?)?,
                volume: quote.volume.get(i).copied().flatten().unwrap_or(0),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHART_FIXTURE: &str = r#"{
        "chart": {
            "result": [{
                "meta": {"regularMarketPrice": 812.45},
                "timestamp": [1717308000, 1717311600, 1717315200],
                "indicators": {
                    "quote": [{
                        "open": [810.0, 811.5, null],
                        "high": [812.0, 813.0, 814.0],
                        "low": [809.0, 810.5, 811.0],
                        "close": [811.5, 812.4, 813.2],
                        "volume": [120000, null, 98000]
                    }]
                }
            }],
            "error": null
        }
    }"#;

    #[test]
    fn test_parse_chart_fixture() {
        let body: ChartResponse = serde_json::from_str(CHART_FIXTURE).unwrap();
        let result = &body.chart.result.unwrap()[0];
        assert_eq!(result.meta.regular_market_price, Some(812.45));

        let points = points_from_chart(result);
        // Third row has a null open and is dropped.
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].open, 810.0);
        assert_eq!(points[0].volume, 120_000);
        // Null volume maps to zero rather than dropping the bar.
        assert_eq!(points[1].volume, 0);
    }

    #[test]
    fn test_parse_chart_error() {
        let json = r#"{
            "chart": {
                "result": null,
                "error": {"code": "Not Found", "description": "No data found, symbol may be delisted"}
            }
        }"#;
        let body: ChartResponse = serde_json::from_str(json).unwrap();
        let err = body.chart.error.unwrap();
        assert_eq!(err.code, "Not Found");
        assert!(err.description.contains("delisted"));
    }

    #[test]
    fn test_empty_quote_yields_no_points() {
        let json = r#"{
            "chart": {
                "result": [{
                    "meta": {},
                    "timestamp": [],
                    "indicators": {"quote": []}
                }],
                "error": null
            }
        }"#;
        let body: ChartResponse = serde_json::from_str(json).unwrap();
        let result = &body.chart.result.unwrap()[0];
        assert!(points_from_chart(result).is_empty());
        assert_eq!(result.meta.regular_market_price, None);
    }
}
