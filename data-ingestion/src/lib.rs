//! Data ingestion layer: provider connectors and fallback-masking fetchers.
//!
//! Upstream sources are the Yahoo Finance chart API (prices) and
//! NewsAPI.org (news). Both fetchers degrade to synthetic data when a
//! source is unavailable, so callers always receive a structurally valid
//! result.

pub mod connectors;
pub mod mock;
pub mod news;
pub mod price;
pub mod symbols;

pub use connectors::newsapi::{NewsApiClient, NewsApiError, NewsQuery};
pub use connectors::yahoo::YahooFinanceClient;
pub use mock::MockSeriesGenerator;
pub use news::NewsFetcher;
pub use price::{PriceFetcher, PriceProvider};
pub use symbols::provider_ticker;
