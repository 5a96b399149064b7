//! News fetching with mock-article fallback.
//!
//! Recoverable provider failures (missing key, rate limit, timeout,
//! transport) are masked with a single synthetic article whose title
//! names the failure, so the dashboard always has a feed to render.
//! An unclassified provider error is the one case that propagates.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tracing::warn;

use common::{NewsArticle, NewsSource};

use crate::connectors::newsapi::{NewsApiClient, NewsApiError, NewsQuery};

pub struct NewsFetcher {
    client: NewsApiClient,
    opts: NewsQuery,
}

impl NewsFetcher {
    pub fn new(client: NewsApiClient) -> Self {
        Self {
            client,
            opts: NewsQuery::default(),
        }
    }

    pub fn with_query_options(mut self, opts: NewsQuery) -> Self {
        self.opts = opts;
        self
    }

    pub async fn fetch(&self, query: &str) -> Result<Vec<NewsArticle>> {
        match self.client.everything(query, &self.opts).await {
            Ok(articles) => Ok(articles),
            Err(NewsApiError::MissingKey) => {
                warn!("Fallback: news API key not set; returning mock news for '{}'", query);
                Ok(vec![mock_article(
                    query,
                    "Key Missing",
                    "This is a mock news article because the NewsAPI key is not configured.",
                )])
            }
            Err(NewsApiError::RateLimited(msg)) => {
                warn!("Fallback: news API rate limit for '{}': {}", query, msg);
                Ok(vec![mock_article(
                    query,
                    "Rate Limit",
                    "This is a mock news article due to NewsAPI.org rate limits.",
                )])
            }
            Err(NewsApiError::Timeout) => {
                warn!("Fallback: news API timeout for '{}'", query);
                Ok(vec![mock_article(
                    query,
                    "Timeout",
                    "This is a mock news article due to NewsAPI.org timeout.",
                )])
            }
            Err(NewsApiError::Transport(e)) => {
                warn!("Fallback: news API request failed for '{}': {}", query, e);
                Ok(vec![mock_article(
                    query,
                    "Request Failed",
                    "This is a mock news article due to NewsAPI.org request failure.",
                )])
            }
            // No safe fallback for an unclassified provider error.
            Err(e @ NewsApiError::Api(_)) => Err(e.into()),
        }
    }
}

#[async_trait]
impl NewsSource for NewsFetcher {
    async fn fetch(&self, query: &str) -> Result<Vec<NewsArticle>> {
        NewsFetcher::fetch(self, query).await
    }
}

fn mock_article(query: &str, reason: &str, detail: &str) -> NewsArticle {
    NewsArticle {
        source: "Mock News".to_string(),
        title: format!("Mock News for {} - {}", query, reason),
        content: detail.to_string(),
        url: "#".to_string(),
        published_at: Utc::now().to_rfc3339(),
        event: "Mock Event".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_key_yields_single_mock_article() {
        let fetcher = NewsFetcher::new(NewsApiClient::new(None));
        let articles = fetcher.fetch("SBI stock").await.unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].source, "Mock News");
        assert_eq!(articles[0].title, "Mock News for SBI stock - Key Missing");
        assert_eq!(articles[0].event, "Mock Event");
    }

    #[tokio::test]
    async fn test_malformed_response_propagates() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let _ = socket
                .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 16\r\n\r\nthis is not json")
                .await;
        });

        let client = NewsApiClient::new(Some("test-key".to_string()))
            .with_base_url(format!("http://{}", addr));
        let fetcher = NewsFetcher::new(client);
        // No safe fallback for a body that matches no known shape.
        assert!(fetcher.fetch("SBI stock").await.is_err());
    }

    #[test]
    fn test_mock_article_encodes_reason() {
        let article = mock_article("IRCTC stock", "Timeout", "detail");
        assert_eq!(article.title, "Mock News for IRCTC stock - Timeout");
        assert_eq!(article.url, "#");
        assert!(!article.published_at.is_empty());
    }
}
