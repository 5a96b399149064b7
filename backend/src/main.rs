use anyhow::Result;
use tracing::{info, warn, Level};

mod config;

use common::{Timeframe, TRACKED_EQUITIES};
use data_ingestion::{NewsApiClient, NewsFetcher, PriceFetcher, YahooFinanceClient};
use signal_generation::SignalPipeline;

use config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("Starting equity trading-signal service");

    let config = AppConfig::from_env();
    if config.news_api_key.is_none() {
        warn!("NEWS_API_KEY not set; news feeds will degrade to mock articles");
    }

    let price_fetcher = PriceFetcher::new(
        YahooFinanceClient::new().with_timeout(config.price_timeout),
    );
    let pipeline = SignalPipeline::new(NewsFetcher::new(
        NewsApiClient::new(config.news_api_key.clone()).with_timeout(config.news_timeout),
    ));

    let mut ticker = tokio::time::interval(config.refresh_interval);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                refresh_all(&price_fetcher, &pipeline).await;
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down gracefully...");
                break;
            }
        }
    }

    Ok(())
}

async fn refresh_all(
    price_fetcher: &PriceFetcher<YahooFinanceClient>,
    pipeline: &SignalPipeline<NewsFetcher>,
) {
    for equity in TRACKED_EQUITIES {
        let series = price_fetcher
            .historical(equity.symbol, Timeframe::OneYear, "NSE")
            .await;
        info!(
            "{}: {} price points ({}), last close {:?}",
            equity.name,
            series.len(),
            series.timeframe,
            series.last_close()
        );

        match pipeline.analyze(equity.symbol).await {
            Ok(analysis) => {
                let signal = &analysis.trading_signal;
                info!(
                    "{}: {} articles; signal {} {} (confidence {:.2}, SL {:.2}, TP {:.2})",
                    equity.name,
                    analysis.news.len(),
                    signal.ticker,
                    signal.recommended_action,
                    signal.confidence,
                    signal.stop_loss,
                    signal.take_profit
                );
            }
            Err(e) => {
                warn!("News analysis failed for {}: {}", equity.symbol, e);
            }
        }
    }
}
