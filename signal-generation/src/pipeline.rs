//! Orchestrates news fetching, tagging, scoring, and action mapping
//! into the per-equity analysis the dashboards consume.

use anyhow::Result;
use tracing::{debug, info};

use common::{AnnotatedArticle, NewsAnalysis, NewsArticle, NewsSource, TradingSignal};

use crate::action::map_action;
use crate::sentiment::analyze;
use crate::tagger::identify_ticker;

/// Signal pipeline for one equity query at a time.
///
/// Holds no cross-request state; safe to call from any number of
/// concurrent requests.
pub struct SignalPipeline<N> {
    news: N,
}

impl<N: NewsSource> SignalPipeline<N> {
    pub fn new(news: N) -> Self {
        Self { news }
    }

    /// Fetch news for `"<symbol> stock"` and derive annotations plus the
    /// headline signal.
    pub async fn analyze(&self, symbol: &str) -> Result<NewsAnalysis> {
        let query = format!("{} stock", symbol);
        let articles = self.news.fetch(&query).await?;

        if articles.is_empty() {
            debug!("No articles for '{}'; returning neutral signal", symbol);
            return Ok(NewsAnalysis {
                news: Vec::new(),
                trading_signal: TradingSignal::neutral(symbol),
            });
        }

        let mut rng = fastrand::Rng::new();
        let analysis = annotate_batch(symbol, articles, &mut rng);
        info!(
            "Annotated {} articles for '{}'; headline action {}",
            analysis.news.len(),
            symbol,
            analysis.trading_signal.recommended_action
        );
        Ok(analysis)
    }
}

/// Annotate a non-empty article batch in fetch order.
///
/// The headline signal is built from the first article only: its tagger
/// result becomes the signal ticker ("N/A" when untagged), its derived
/// sentiment and advice become the signal values. Order and length of
/// the input are preserved in the output.
pub fn annotate_batch(
    symbol: &str,
    articles: Vec<NewsArticle>,
    rng: &mut fastrand::Rng,
) -> NewsAnalysis {
    let mut annotated = Vec::with_capacity(articles.len());
    let mut trading_signal = TradingSignal::neutral(symbol);

    for (i, article) in articles.into_iter().enumerate() {
        let full_text = article.full_text();

        let ticker = identify_ticker(&full_text, symbol);
        let sentiment = analyze(&full_text);
        let advice = map_action(sentiment, rng);

        if i == 0 {
            trading_signal = TradingSignal {
                ticker: ticker.unwrap_or("N/A").to_string(),
                sentiment: sentiment.as_str().to_string(),
                event: article.event.clone(),
                confidence: advice.confidence,
                recommended_action: advice.recommended_action,
                stop_loss: advice.stop_loss,
                take_profit: advice.take_profit,
            };
        }

        annotated.push(AnnotatedArticle {
            article,
            sentiment,
            recommended_action: advice.recommended_action,
            confidence: advice.confidence,
        });
    }

    NewsAnalysis {
        news: annotated,
        trading_signal,
    }
}
