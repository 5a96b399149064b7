//! Signal generation: turns a news batch into per-article annotations
//! and one headline trading signal.
//!
//! Stages: entity tagging (is this article about the stock?), keyword
//! sentiment scoring, and sentiment-to-action mapping with randomized
//! confidence/stop-loss/take-profit ranges.

pub mod action;
pub mod pipeline;
pub mod sentiment;
pub mod tagger;

pub use action::{map_action, TradeAdvice};
pub use pipeline::{annotate_batch, SignalPipeline};
pub use sentiment::analyze;
pub use tagger::identify_ticker;
