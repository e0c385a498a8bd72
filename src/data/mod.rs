// Dataset loading — where the article and trend collections come from.
//
// The viewer runs in two modes: against the aggregator's HTTP endpoints, or
// against a local directory with the same JSON files (the static-bundle
// setup). The NewsSource trait is the seam between the two; everything
// downstream only sees in-memory collections.

pub mod bundled;
pub mod http;

use anyhow::Result;
use async_trait::async_trait;
use tracing::warn;

use crate::model::{Article, TrendsFeed};

pub use bundled::BundledNewsSource;
pub use http::HttpNewsSource;

/// A provider of the two live datasets.
///
/// Implementations fetch or read; they never filter, dedupe, or reorder —
/// collections arrive downstream exactly as the aggregator produced them.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// The merged article collection.
    async fn fetch_articles(&self) -> Result<Vec<Article>>;

    /// The current trends snapshot.
    async fn fetch_trends(&self) -> Result<TrendsFeed>;
}

/// Load both datasets, degrading gracefully when trends are unavailable.
///
/// Articles are required — without them there is nothing to show and the
/// error propagates. Trends are decoration: a dead trends endpoint logs a
/// warning and yields an empty feed, the article list stays usable.
pub async fn load_datasets(source: &dyn NewsSource) -> Result<(Vec<Article>, TrendsFeed)> {
    let articles = source.fetch_articles().await?;

    let trends = match source.fetch_trends().await {
        Ok(feed) => feed,
        Err(e) => {
            warn!(error = %e, "Trends unavailable, continuing without them");
            TrendsFeed::default()
        }
    };

    Ok((articles, trends))
}
