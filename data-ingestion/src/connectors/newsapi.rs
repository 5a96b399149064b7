//! NewsAPI.org connector.
//!
//! Calls the `/v2/everything` keyword-search endpoint and normalizes
//! responses to the canonical [`NewsArticle`] shape. Failures are
//! classified so the fetcher layer can pick the right fallback.

use std::time::Duration;

use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use common::NewsArticle;

const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2/everything";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Why a NewsAPI call failed. Everything except [`NewsApiError::Api`]
/// is masked with a mock article by the fetcher.
#[derive(Debug, Error)]
pub enum NewsApiError {
    #[error("news API key is not configured")]
    MissingKey,
    #[error("news API rate limit reached: {0}")]
    RateLimited(String),
    #[error("news API request timed out")]
    Timeout,
    #[error("news API transport failure: {0}")]
    Transport(reqwest::Error),
    #[error("news API error response: {0}")]
    Api(String),
}

/// Query parameters beyond the search string, with provider defaults.
#[derive(Debug, Clone)]
pub struct NewsQuery {
    pub language: String,
    pub sort_by: String,
    pub days_back: i64,
    pub page_size: u32,
}

impl Default for NewsQuery {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            sort_by: "relevancy".to_string(),
            days_back: 30,
            page_size: 20,
        }
    }
}

/// Client for the NewsAPI.org everything endpoint. The API key is an
/// explicit optional injected at construction; absence is reported as
/// [`NewsApiError::MissingKey`] instead of being read from the
/// environment mid-request.
pub struct NewsApiClient {
    base_url: String,
    client: Client,
    api_key: Option<String>,
    timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct NewsApiResponse {
    status: String,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Vec<RawArticle>,
}

#[derive(Debug, Deserialize)]
struct RawArticle {
    #[serde(default)]
    source: RawSource,
    title: Option<String>,
    description: Option<String>,
    content: Option<String>,
    url: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawSource {
    name: Option<String>,
}

impl NewsApiClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            client: Client::new(),
            api_key,
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

    /// Search recent articles, relevance-sorted and recency-bounded.
    pub async fn everything(
        &self,
        query: &str,
        opts: &NewsQuery,
    ) -> Result<Vec<NewsArticle>, NewsApiError> {
        let api_key = self.api_key.as_deref().ok_or(NewsApiError::MissingKey)?;

        let from_date = (Utc::now() - chrono::Duration::days(opts.days_back)).to_rfc3339();
        let page_size = opts.page_size.to_string();

        debug!("Requesting NewsAPI.org for query: '{}'", query);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", query),
                ("language", opts.language.as_str()),
                ("sortBy", opts.sort_by.as_str()),
                ("from", from_date.as_str()),
                ("apiKey", api_key),
                ("pageSize", page_size.as_str()),
            ])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(classify_transport)?;

        let body: NewsApiResponse = response.json().await.map_err(classify_transport)?;

        if body.status == "ok" {
            let articles: Vec<NewsArticle> = body.articles.into_iter().map(normalize).collect();
            info!("Fetched {} news articles for '{}'", articles.len(), query);
            Ok(articles)
        } else {
            Err(classify_api_error(
                body.code.as_deref(),
                body.message.unwrap_or_default(),
            ))
        }
    }
}

/// A response body that does not match any known shape has no safe
/// fallback and is reported as a hard API error; timeouts and true
/// transport failures stay recoverable.
fn classify_transport(err: reqwest::Error) -> NewsApiError {
    if err.is_timeout() {
        NewsApiError::Timeout
    } else if err.is_decode() {
        NewsApiError::Api(format!("malformed provider response: {}", err))
    } else {
        NewsApiError::Transport(err)
    }
}

/// Classify a well-formed `status: "error"` response. Rate-limit and
/// quota errors are recoverable; anything else is a hard API error.
fn classify_api_error(code: Option<&str>, message: String) -> NewsApiError {
    let rate_limited = matches!(code, Some("rateLimited") | Some("maximumResultsReached"))
        || message.contains("maximum results for free plan")
        || message.contains("too many requests");

    if rate_limited {
        NewsApiError::RateLimited(message)
    } else {
        NewsApiError::Api(message)
    }
}

/// Translate a provider article into the canonical shape. Missing
/// fields get the same placeholders the dashboard has always shown.
fn normalize(raw: RawArticle) -> NewsArticle {
    NewsArticle {
        source: raw.source.name.unwrap_or_else(|| "Unknown".to_string()),
        title: raw.title.unwrap_or_else(|| "No Title".to_string()),
        content: raw
            .description
            .or(raw.content)
            .unwrap_or_else(|| "No content available".to_string()),
        url: raw.url.unwrap_or_else(|| "#".to_string()),
        published_at: raw.published_at.unwrap_or_else(|| "N/A".to_string()),
        event: "General News".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_prefers_description_over_content() {
        let raw: RawArticle = serde_json::from_str(
            r#"{
                "source": {"name": "Reuters"},
                "title": "SBI profit soars",
                "description": "Short summary.",
                "content": "Long body.",
                "url": "https://example.com/a",
                "publishedAt": "2025-06-02T09:30:00Z"
            }"#,
        )
        .unwrap();
        let article = normalize(raw);
        assert_eq!(article.source, "Reuters");
        assert_eq!(article.content, "Short summary.");
        assert_eq!(article.event, "General News");
    }

    #[test]
    fn test_normalize_fills_placeholders() {
        let raw: RawArticle = serde_json::from_str("{}").unwrap();
        let article = normalize(raw);
        assert_eq!(article.source, "Unknown");
        assert_eq!(article.title, "No Title");
        assert_eq!(article.content, "No content available");
        assert_eq!(article.url, "#");
        assert_eq!(article.published_at, "N/A");
    }

    #[test]
    fn test_parse_ok_response() {
        let body: NewsApiResponse = serde_json::from_str(
            r#"{
                "status": "ok",
                "totalResults": 1,
                "articles": [{
                    "source": {"id": null, "name": "Mint"},
                    "title": "IRCTC expands catering partnership",
                    "description": "New contract announced.",
                    "url": "https://example.com/irctc",
                    "publishedAt": "2025-06-01T12:00:00Z"
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(body.status, "ok");
        assert_eq!(body.articles.len(), 1);
    }

    #[test]
    fn test_classify_rate_limit_by_code() {
        let err = classify_api_error(Some("rateLimited"), "Too many requests.".to_string());
        assert!(matches!(err, NewsApiError::RateLimited(_)));
    }

    #[test]
    fn test_classify_rate_limit_by_message() {
        let err = classify_api_error(
            None,
            "You have requested the maximum results for free plan.".to_string(),
        );
        assert!(matches!(err, NewsApiError::RateLimited(_)));
    }

    #[test]
    fn test_classify_other_errors_as_api() {
        let err = classify_api_error(Some("apiKeyInvalid"), "Your API key is invalid.".to_string());
        assert!(matches!(err, NewsApiError::Api(_)));
    }

    #[tokio::test]
    async fn test_malformed_body_is_hard_api_error() {
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
        let err = client
            .everything("SBI stock", &NewsQuery::default())
            .await
            .unwrap_err();
        assert!(matches!(err, NewsApiError::Api(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_missing_key_short_circuits() {
        let client = NewsApiClient::new(None);
        let err = client
            .everything("SBI stock", &NewsQuery::default())
            .await
            .unwrap_err();
        assert!(matches!(err, NewsApiError::MissingKey));
    }
}
