// Data models — the JSON shapes the aggregator produces.
//
// These are the types that flow through the application. They're separate
// from the loading code so the matching core and the terminal output can
// use them without depending on reqwest or the filesystem. Collections are
// supplied externally and never mutated; filtering builds new Vecs.

use serde::{Deserialize, Serialize};

/// A scraped newspaper article, as emitted by the aggregator's merge step.
///
/// The wire format keeps the scrapers' field names (`subtitles` is a single
/// string despite the plural). Everything beyond title/url is best-effort:
/// some scrapers miss authors or dates, and only the detail pass fills in
/// `body` and `image`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub date: String,
    pub title: String,
    #[serde(rename = "subtitles", default)]
    pub subtitle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub url: String,
    #[serde(default)]
    pub newspaper: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ArticleImage>,
}

/// Main image of an article with its credit line, when the scraper found one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleImage {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub credits: String,
}

/// A trending topic from the trends endpoint (Google Trends or X).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingTopic {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub source: String,
    /// Display volume like "500K" — absent for some sources, shown as "N/A".
    #[serde(default)]
    pub volume: Option<String>,
    #[serde(default)]
    pub timeframe: String,
    #[serde(rename = "newsCount", default)]
    pub news_count: Option<u32>,
}

/// The trends endpoint's envelope: the topic list plus aggregate counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrendsFeed {
    #[serde(default)]
    pub trends: Vec<TrendingTopic>,
    #[serde(default)]
    pub summary: Option<TrendsSummary>,
}

/// Aggregate counters the trends endpoint attaches to each snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendsSummary {
    #[serde(default)]
    pub unique_total: u32,
    #[serde(default)]
    pub google_total: u32,
    #[serde(default)]
    pub xtrends_total: u32,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_deserializes_from_aggregator_json() {
        let json = r#"{
            "author": "Ana Perez",
            "date": "2025-11-03",
            "title": "Crisis en Venezuela",
            "subtitles": "Analisis economico",
            "tags": ["Venezuela", "Economia"],
            "url": "https://elpais.com/x",
            "newspaper": "elpais.com",
            "image": {"url": "https://elpais.com/x.jpg", "credits": "EFE"}
        }"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.subtitle, "Analisis economico");
        assert_eq!(article.tags.len(), 2);
        assert_eq!(article.image.unwrap().credits, "EFE");
        assert!(article.body.is_none());
    }

    #[test]
    fn article_tolerates_sparse_records() {
        // Some scrapers only produce title + url on the list pass.
        let json = r#"{"title": "Titular", "url": "https://abc.es/y"}"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert!(article.author.is_empty());
        assert!(article.tags.is_empty());
        assert!(article.image.is_none());
    }

    #[test]
    fn trends_feed_deserializes_envelope() {
        let json = r#"{
            "trends": [
                {"id": 1, "title": "IBEX 35", "source": "google",
                 "volume": "200K", "timeframe": "4h", "newsCount": 12}
            ],
            "summary": {"unique_total": 40, "google_total": 25,
                        "xtrends_total": 15, "timestamp": "2025-11-03T09:00:00Z"}
        }"#;
        let feed: TrendsFeed = serde_json::from_str(json).unwrap();
        assert_eq!(feed.trends.len(), 1);
        assert_eq!(feed.trends[0].news_count, Some(12));
        assert_eq!(feed.summary.unwrap().unique_total, 40);
    }

    #[test]
    fn trends_feed_without_summary() {
        let feed: TrendsFeed = serde_json::from_str(r#"{"trends": []}"#).unwrap();
        assert!(feed.trends.is_empty());
        assert!(feed.summary.is_none());
    }
}
