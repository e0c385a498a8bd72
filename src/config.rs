use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::data::{BundledNewsSource, HttpNewsSource, NewsSource};

/// Default aggregator endpoints, overridable per environment.
pub const DEFAULT_NEWS_URL: &str = "http://localhost:5000/news";
pub const DEFAULT_TRENDS_URL: &str = "http://localhost:5000/trends";

/// File name of the bundled analysis reports.
pub const ANALYSIS_FILE: &str = "analisis_historico.json";

/// Central configuration loaded from environment variables.
///
/// Nothing here is secret; the .env file is only a convenience for
/// pointing the viewer at a non-default aggregator or data directory.
pub struct Config {
    /// When true, articles and trends come from the aggregator's HTTP
    /// endpoints; otherwise from the bundled files in `data_dir`.
    pub use_server: bool,
    pub news_url: String,
    pub trends_url: String,
    /// Directory holding the bundled datasets and the analysis reports.
    pub data_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables. Every variable has a
    /// default: out of the box the viewer reads bundled files from ./data.
    pub fn load() -> Result<Self> {
        let use_server = matches!(
            env::var("PANORAMA_USE_SERVER").as_deref(),
            Ok("1") | Ok("true") | Ok("yes")
        );

        Ok(Self {
            use_server,
            news_url: env::var("PANORAMA_NEWS_URL")
                .unwrap_or_else(|_| DEFAULT_NEWS_URL.to_string()),
            trends_url: env::var("PANORAMA_TRENDS_URL")
                .unwrap_or_else(|_| DEFAULT_TRENDS_URL.to_string()),
            data_dir: env::var("PANORAMA_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
        })
    }

    /// Build the news source this configuration selects.
    pub fn news_source(&self) -> Result<Box<dyn NewsSource>> {
        if self.use_server {
            Ok(Box::new(HttpNewsSource::new(
                &self.news_url,
                &self.trends_url,
            )?))
        } else {
            self.require_data_dir()?;
            Ok(Box::new(BundledNewsSource::new(&self.data_dir)))
        }
    }

    /// Path of the bundled analysis reports. Analyses are always file-based;
    /// only articles and trends go through the server switch.
    pub fn analysis_path(&self) -> PathBuf {
        self.data_dir.join(ANALYSIS_FILE)
    }

    /// Check that the data directory exists before a bundled read.
    pub fn require_data_dir(&self) -> Result<()> {
        if !self.data_dir.is_dir() {
            anyhow::bail!(
                "Data directory {} not found.\n\
                 Set PANORAMA_DATA_DIR to the aggregator's output directory,\n\
                 or set PANORAMA_USE_SERVER=1 to fetch from the aggregator.",
                self.data_dir.display()
            );
        }
        Ok(())
    }
}
