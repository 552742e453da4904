use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One ranked hit returned by a search provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub content: String,
}

impl SearchResult {
    pub fn new<T: Into<String>, U: Into<String>, C: Into<String>>(
        title: T,
        url: U,
        content: C,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            content: content.into(),
        }
    }
}

/// Base trait for web search backends
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Search for `query`, returning at most `max_results` hits in rank order
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchResult>>;
}
