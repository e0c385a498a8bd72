// Composition tests — verifying that the modules chain together correctly.
//
// These tests exercise the data flow the binary drives:
//   dataset JSON -> models -> tiered filter -> presentation helpers
// without any network calls. The bundled-source tests read from a scratch
// directory under the system temp dir.

use std::fs;
use std::path::PathBuf;

use panorama::analysis;
use panorama::data::{load_datasets, BundledNewsSource, NewsSource};
use panorama::matching::{filter_articles, MatchPolicy, Tokenizer};
use panorama::model::Article;
use panorama::output::truncate_chars;

const ARTICLES_JSON: &str = r#"[
    {"author": "Ana Pérez", "date": "2025-11-03",
     "title": "Crisis en Venezuela", "subtitles": "Análisis económico",
     "tags": ["venezuela", "economia"],
     "url": "https://elpais.com/1", "newspaper": "elpais.com"},
    {"author": "Luis Gómez", "date": "2025-11-03",
     "title": "El IBEX 35 cierra en máximos", "subtitles": "La banca tira del índice",
     "tags": ["bolsa", "ibex"],
     "url": "https://abc.es/2", "newspaper": "abc.es"},
    {"author": "Agencias", "date": "2025-11-03",
     "title": "Crisis en Venezuela", "subtitles": "Versión sindicada",
     "tags": ["venezuela"],
     "url": "https://eldiario.es/3", "newspaper": "eldiario.es"}
]"#;

const TRENDS_JSON: &str = r#"{
    "trends": [
        {"id": 1, "title": "Crisis en Venezuela", "source": "google",
         "volume": "500K", "timeframe": "24h", "newsCount": 8},
        {"id": 2, "title": "IBEX 35", "source": "xtrends",
         "timeframe": "4h"}
    ],
    "summary": {"unique_total": 2, "google_total": 1, "xtrends_total": 1,
                "timestamp": "2025-11-03T09:00:00Z"}
}"#;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("panorama-test-{name}"));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

// ============================================================
// Chain: bundled JSON -> filter -> display helpers
// ============================================================

#[tokio::test]
async fn bundled_datasets_flow_into_the_query_filter() {
    let dir = scratch_dir("query-flow");
    fs::write(dir.join("merged_json.json"), ARTICLES_JSON).unwrap();
    fs::write(dir.join("trends.json"), TRENDS_JSON).unwrap();

    let source = BundledNewsSource::new(&dir);
    let (articles, trends) = load_datasets(&source).await.unwrap();
    assert_eq!(articles.len(), 3);
    assert_eq!(trends.trends.len(), 2);

    // Query filter over the loaded collection: the syndicated duplicate
    // title from eldiario.es must collapse into the first copy.
    let results = filter_articles(
        &articles,
        "venezuela",
        &MatchPolicy::query(),
        &Tokenizer::default(),
    );
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].newspaper, "elpais.com");
}

#[tokio::test]
async fn trend_click_flow_matches_by_trend_title() {
    let dir = scratch_dir("trend-flow");
    fs::write(dir.join("merged_json.json"), ARTICLES_JSON).unwrap();
    fs::write(dir.join("trends.json"), TRENDS_JSON).unwrap();

    let source = BundledNewsSource::new(&dir);
    let (articles, trends) = load_datasets(&source).await.unwrap();

    // Clicking the first trend filters the list by its title.
    let trend_title = &trends.trends[0].title;
    let results = filter_articles(
        &articles,
        trend_title,
        &MatchPolicy::trend(),
        &Tokenizer::default(),
    );
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Crisis en Venezuela");
}

#[tokio::test]
async fn missing_trends_degrade_to_empty_feed() {
    let dir = scratch_dir("no-trends");
    fs::write(dir.join("merged_json.json"), ARTICLES_JSON).unwrap();
    // No trends.json on purpose.

    let source = BundledNewsSource::new(&dir);
    let (articles, trends) = load_datasets(&source).await.unwrap();
    assert_eq!(articles.len(), 3);
    assert!(trends.trends.is_empty());
    assert!(trends.summary.is_none());
}

#[tokio::test]
async fn missing_articles_are_a_hard_error() {
    let dir = scratch_dir("no-articles");
    fs::write(dir.join("trends.json"), TRENDS_JSON).unwrap();

    let source = BundledNewsSource::new(&dir);
    let err = load_datasets(&source).await.unwrap_err();
    assert!(err.to_string().contains("merged_json.json"));
}

#[tokio::test]
async fn malformed_articles_report_the_offending_file() {
    let dir = scratch_dir("bad-articles");
    fs::write(dir.join("merged_json.json"), "{not json").unwrap();

    let source = BundledNewsSource::new(&dir);
    let err = source.fetch_articles().await.unwrap_err();
    assert!(format!("{err:#}").contains("merged_json.json"));
}

// ============================================================
// Chain: analysis file -> lookup -> headline join
// ============================================================

#[test]
fn analysis_reports_load_and_join_against_articles() {
    let dir = scratch_dir("analysis");
    let analysis_json = r#"[{
        "tema": "Crisis en Venezuela",
        "fecha_analisis": "2025-11-03T10:30:00",
        "total_articulos": 2,
        "resumen_objetivo": "Cobertura dividida.",
        "lista_medios": ["elpais.com", "abc.es"],
        "total_medios": 2,
        "noticias_analizadas": 2,
        "puntos_comunes": ["Sanciones"],
        "estadisticas": {"distribucion_por_medio": {
            "elpais.com": {"num_articulos": 1, "porcentaje_cobertura": 50.0,
                           "urls": ["https://elpais.com/1"]},
            "abc.es": {"num_articulos": 1, "porcentaje_cobertura": 50.0}
        }}
    }]"#;
    let path = dir.join("analisis_historico.json");
    fs::write(&path, analysis_json).unwrap();

    let reports = analysis::load_reports(&path).unwrap();
    assert_eq!(reports.len(), 1);

    let report = analysis::find_report(&reports, "venezuela").unwrap();
    assert_eq!(report.outlet_total, 2);

    // The list view joins each covered outlet back to a current headline.
    let articles: Vec<Article> = serde_json::from_str(ARTICLES_JSON).unwrap();
    for outlet in &report.outlets {
        let headline = analysis::headlines::headline_for_outlet(&articles, outlet);
        assert!(headline.is_some(), "no headline for {outlet}");
    }
}

#[test]
fn analysis_loader_errors_name_the_path() {
    let path = std::env::temp_dir().join("panorama-test-missing-analysis.json");
    let _ = fs::remove_file(&path);
    let err = analysis::load_reports(&path).unwrap_err();
    assert!(format!("{err:#}").contains("panorama-test-missing-analysis.json"));
}

// ============================================================
// Presentation helpers on real data shapes
// ============================================================

#[test]
fn truncation_never_splits_accented_titles() {
    let articles: Vec<Article> = serde_json::from_str(ARTICLES_JSON).unwrap();
    for article in &articles {
        let short = truncate_chars(&article.subtitle, 10);
        assert!(short.chars().count() <= 13); // 10 + "..."
    }
}
