// Dataset status display — collection sizes, outlet breakdown, trends age.

use crate::analysis::headlines::articles_per_outlet;
use crate::analysis::models::AnalysisReport;
use crate::model::{Article, TrendsFeed};
use crate::output::format_timestamp;

/// Print a summary of everything currently loaded.
pub fn show(articles: &[Article], trends: &TrendsFeed, analyses: &[AnalysisReport]) {
    println!("Artículos: {}", articles.len());
    for (outlet, count) in articles_per_outlet(articles) {
        println!("  {:<24} {}", outlet, count);
    }

    if trends.trends.is_empty() {
        println!("Trends: ninguno cargado");
    } else {
        println!("Trends: {}", trends.trends.len());
        if let Some(summary) = &trends.summary {
            println!(
                "  {} únicos (Google: {}, X: {})",
                summary.unique_total, summary.google_total, summary.xtrends_total
            );
            if let Some(timestamp) = &summary.timestamp {
                println!("  Actualizado: {}", format_timestamp(timestamp));
            }
        }
    }

    if analyses.is_empty() {
        println!("Análisis: ninguno cargado");
        println!("  (se buscan en PANORAMA_DATA_DIR/analisis_historico.json)");
    } else {
        println!("Análisis: {}", analyses.len());
        for report in analyses {
            println!(
                "  {:<40} {}",
                report.topic,
                format_timestamp(&report.analyzed_at)
            );
        }
    }
}
