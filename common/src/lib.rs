//! Shared domain types for the equity trading-signal service.
//!
//! This crate defines the canonical data shapes exchanged between the
//! data-ingestion and signal-generation layers:
//! - The tracked equity table and exchange/ticker conventions
//! - Chart timeframes and OHLCV price series
//! - The provider-independent news article shape
//! - Sentiment/action labels and the headline trading signal

pub mod equity;
pub mod news;
pub mod price;
pub mod signal;
pub mod timeframe;

pub use equity::{find_equity, Equity, Exchange, TRACKED_EQUITIES};
pub use news::{AnnotatedArticle, NewsArticle, NewsSource};
pub use price::{PricePoint, PriceSeries};
pub use signal::{Action, NewsAnalysis, Sentiment, TradingSignal};
pub use timeframe::Timeframe;
