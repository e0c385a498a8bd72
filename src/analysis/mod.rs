// Media-bias analysis — the drill-down dataset next to the article list.
//
// Each report covers one news topic across several outlets: a neutral
// summary, per-outlet bias scoring, sentiment, divergences and omissions.
// Reports are produced offline by the aggregator's analysis pipeline and
// shipped as a JSON file; this module only loads and navigates them.

pub mod headlines;
pub mod models;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::matching::normalize;
pub use models::AnalysisReport;

/// Load the bundled analysis reports from disk.
pub fn load_reports(path: &Path) -> Result<Vec<AnalysisReport>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read analysis file {}", path.display()))?;
    let reports: Vec<AnalysisReport> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse analysis file {}", path.display()))?;

    info!(count = reports.len(), "Loaded analysis reports");
    Ok(reports)
}

/// Find the first report whose topic contains the needle, accents and case
/// ignored. Used by the detail view to resolve a user-supplied topic name.
pub fn find_report<'a>(reports: &'a [AnalysisReport], topic: &str) -> Option<&'a AnalysisReport> {
    let needle = normalize(topic);
    if needle.is_empty() {
        return None;
    }
    reports
        .iter()
        .find(|r| normalize(&r.topic).contains(&needle))
}
