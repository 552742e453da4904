use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::base::{SearchProvider, SearchResult};

/// A mock search backend that returns the same results for every query
pub struct MockSearchProvider {
    results: Option<Vec<SearchResult>>,
    queries: Arc<Mutex<Vec<(String, usize)>>>,
}

impl MockSearchProvider {
    pub fn new(results: Vec<SearchResult>) -> Self {
        Self {
            results: Some(results),
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A backend where every search fails
    pub fn failing() -> Self {
        Self {
            results: None,
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queries received so far along with the requested result count
    pub fn queries(&self) -> Vec<(String, usize)> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchProvider for MockSearchProvider {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchResult>> {
        self.queries
            .lock()
            .unwrap()
            .push((query.to_string(), max_results));

        match &self.results {
            Some(results) => Ok(results.iter().take(max_results).cloned().collect()),
            None => Err(anyhow!("search backend unavailable")),
        }
    }
}
