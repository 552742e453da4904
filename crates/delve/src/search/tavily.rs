use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use super::base::{SearchProvider, SearchResult};

pub const TAVILY_HOST: &str = "https://api.tavily.com";

#[derive(Debug, Clone)]
pub struct TavilyConfig {
    pub host: String,
    pub api_key: String,
}

#[derive(Debug, Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

pub struct TavilyProvider {
    client: Client,
    config: TavilyConfig,
}

impl TavilyProvider {
    pub fn new(config: TavilyConfig) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl SearchProvider for TavilyProvider {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchResult>> {
        let url = format!("{}/search", self.config.host.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&json!({
                "query": query,
                "max_results": max_results,
            }))
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let body: TavilyResponse = response.json().await?;
                let mut results = body.results;
                results.truncate(max_results);
                Ok(results)
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(anyhow!("Search request failed: {}\nResponse: {}", status, body))
            }
        }
    }
}
