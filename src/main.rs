use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use indicatif::ProgressBar;
use tracing::{info, warn};

use panorama::analysis;
use panorama::config::Config;
use panorama::data;
use panorama::matching::{filter_articles, MatchPolicy, Tokenizer};
use panorama::model::{Article, TrendsFeed};
use panorama::output::terminal;
use panorama::status;

/// Panorama: terminal viewer for aggregated Spanish news.
///
/// Browses the aggregator's merged article collection, filters it by
/// free-text search or trending topic, and shows the cross-outlet
/// media-bias analyses.
#[derive(Parser)]
#[command(name = "panorama", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter articles by a free-text query
    Search {
        /// The search string (quote multi-word queries)
        query: String,
    },

    /// Filter articles by a trending-topic title
    Trend {
        /// The trend title, as shown by `trends`
        title: String,
    },

    /// Show the current trending topics
    Trends {
        /// Max topics to show
        #[arg(long, default_value = "25")]
        limit: usize,
    },

    /// List the available media-bias analyses
    Analyses,

    /// Show one analysis in full
    Analysis {
        /// Topic to look up (accent- and case-insensitive substring)
        topic: String,
    },

    /// Show dataset status (collection sizes, outlets, trends age)
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("panorama=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Search { query } => {
            let (articles, _) = load_datasets(&config).await?;
            let results = filter_articles(
                &articles,
                &query,
                &MatchPolicy::query(),
                &Tokenizer::default(),
            );
            terminal::display_articles(&results);
        }

        Commands::Trend { title } => {
            info!(trend = %title, "Filtering by trend");
            let (articles, _) = load_datasets(&config).await?;
            let results = filter_articles(
                &articles,
                &title,
                &MatchPolicy::trend(),
                &Tokenizer::default(),
            );
            terminal::display_articles(&results);
        }

        Commands::Trends { limit } => {
            let (_, trends) = load_datasets(&config).await?;
            terminal::display_trends(&trends.trends, limit);
        }

        Commands::Analyses => {
            let (articles, _) = load_datasets(&config).await?;
            let reports = analysis::load_reports(&config.analysis_path())?;
            terminal::display_analysis_list(&reports, &articles);
        }

        Commands::Analysis { topic } => {
            let reports = analysis::load_reports(&config.analysis_path())?;
            match analysis::find_report(&reports, &topic) {
                Some(report) => terminal::display_analysis_detail(report),
                None => {
                    println!("Ningún análisis coincide con \"{topic}\".");
                    println!("Ejecuta `panorama analyses` para ver los temas disponibles.");
                }
            }
        }

        Commands::Status => {
            let (articles, trends) = load_datasets(&config).await?;
            // Status stays useful without the analysis file.
            let reports = match analysis::load_reports(&config.analysis_path()) {
                Ok(reports) => reports,
                Err(e) => {
                    warn!(error = %e, "Analysis reports unavailable");
                    vec![]
                }
            };
            status::show(&articles, &trends, &reports);
        }
    }

    Ok(())
}

/// Fetch or read both datasets behind a spinner.
async fn load_datasets(config: &Config) -> Result<(Vec<Article>, TrendsFeed)> {
    let source = config.news_source()?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Cargando noticias y trends...");
    spinner.enable_steady_tick(Duration::from_millis(120));

    let result = data::load_datasets(source.as_ref()).await;
    spinner.finish_and_clear();

    let (articles, trends) = result?;
    info!(
        articles = articles.len(),
        trends = trends.trends.len(),
        "Datasets loaded"
    );
    Ok((articles, trends))
}
