// Bundled source — the same dataset shapes read from a local directory.
//
// Useful offline and in development: point PANORAMA_DATA_DIR at a folder
// holding the aggregator's output files and the viewer behaves exactly as
// in server mode.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::model::{Article, TrendsFeed};

use super::NewsSource;

/// File name of the merged article collection.
pub const ARTICLES_FILE: &str = "merged_json.json";
/// File name of the trends snapshot.
pub const TRENDS_FILE: &str = "trends.json";

/// Reads the aggregator's JSON files from a data directory.
pub struct BundledNewsSource {
    data_dir: PathBuf,
}

impl BundledNewsSource {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
        }
    }

    fn read_json<T: DeserializeOwned>(&self, file_name: &str) -> Result<T> {
        let path = self.data_dir.join(file_name);
        debug!(path = %path.display(), "Reading bundled dataset");

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
    }
}

#[async_trait]
impl NewsSource for BundledNewsSource {
    async fn fetch_articles(&self) -> Result<Vec<Article>> {
        self.read_json(ARTICLES_FILE)
    }

    async fn fetch_trends(&self) -> Result<TrendsFeed> {
        self.read_json(TRENDS_FILE)
    }
}
