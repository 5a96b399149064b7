//! Provider-independent news article shapes and the news source seam.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::signal::{Action, Sentiment};

/// A news article in canonical form.
///
/// Both genuine provider articles and synthetic "Mock News" fallback
/// articles conform to this shape. `published_at` is carried as the
/// provider's ISO-8601 string ("N/A" when absent) rather than parsed,
/// since it is display-only downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub source: String,
    pub title: String,
    pub content: String,
    pub url: String,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    pub event: String,
}

impl NewsArticle {
    /// Title and content concatenated, the text the NLP stages run on.
    pub fn full_text(&self) -> String {
        format!("{} {}", self.title, self.content)
    }
}

/// A news article with derived sentiment and action annotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedArticle {
    #[serde(flatten)]
    pub article: NewsArticle,
    pub sentiment: Sentiment,
    pub recommended_action: Action,
    pub confidence: f64,
}

/// Source of news articles for a free-text query.
///
/// Implemented by the NewsAPI-backed fetcher in data-ingestion and by
/// stubs in pipeline tests.
#[async_trait]
pub trait NewsSource: Send + Sync {
    async fn fetch(&self, query: &str) -> Result<Vec<NewsArticle>>;
}
