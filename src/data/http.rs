// HTTP source — thin reqwest wrapper over the aggregator's endpoints.
//
// The aggregator exposes two GET endpoints: the merged article collection
// and the trends snapshot. Plain JSON over HTTP, no auth.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::model::{Article, TrendsFeed};

use super::NewsSource;

/// Client for the aggregator's news and trends endpoints.
pub struct HttpNewsSource {
    client: reqwest::Client,
    news_url: String,
    trends_url: String,
}

impl HttpNewsSource {
    pub fn new(news_url: &str, trends_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("panorama/0.1 (news viewer)")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            news_url: news_url.to_string(),
            trends_url: trends_url.to_string(),
        })
    }

    /// GET a URL and deserialize the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url = url, "GET request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request failed: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            anyhow::bail!("{url} returned {status}");
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to deserialize response from {url}"))
    }
}

#[async_trait]
impl NewsSource for HttpNewsSource {
    async fn fetch_articles(&self) -> Result<Vec<Article>> {
        self.get_json(&self.news_url)
            .await
            .context("Failed to fetch the article collection")
    }

    async fn fetch_trends(&self) -> Result<TrendsFeed> {
        self.get_json(&self.trends_url)
            .await
            .context("Failed to fetch the trends snapshot")
    }
}
