// Colored terminal output for article lists, trends and analysis cards.
//
// All terminal-specific formatting lives here; main.rs delegates after
// filtering. The layouts follow the web viewer: result cards with tag
// badges, the trends sidebar, and the analysis drill-down.

use colored::Colorize;

use crate::analysis::headlines::headline_for_outlet;
use crate::analysis::models::AnalysisReport;
use crate::model::{Article, TrendingTopic};

use super::{format_timestamp, meter, truncate_chars};

/// Print a filtered article list the way the results column shows it.
pub fn display_articles(articles: &[Article]) {
    let n = articles.len();
    let plural = if n == 1 { "" } else { "s" };
    println!("\n{}", format!("{n} resultado{plural} encontrado{plural}").bold());
    println!();

    for article in articles {
        println!("  {}", article.title.bold());
        if !article.subtitle.is_empty() {
            println!("  {}", truncate_chars(&article.subtitle, 120));
        }

        if !article.tags.is_empty() {
            let badges: Vec<String> = article
                .tags
                .iter()
                .take(3)
                .map(|t| format!("[{}]", t).cyan().to_string())
                .collect();
            println!("  {}", badges.join(" "));
        }

        let mut byline = Vec::new();
        if !article.author.is_empty() {
            byline.push(format!("De {}", article.author.bold()));
        }
        if !article.date.is_empty() {
            byline.push(format!("a las {}", article.date.bold()));
        }
        if !byline.is_empty() {
            println!("  {}", byline.join(" · "));
        }

        println!(
            "  {}  {}",
            article.newspaper.bold(),
            truncate_chars(&article.url, 80).dimmed()
        );
        println!();
    }
}

/// Print the trending-topics sidebar.
pub fn display_trends(trends: &[TrendingTopic], limit: usize) {
    if trends.is_empty() {
        println!("No hay trends disponibles.");
        return;
    }

    println!("\n{}", "=== Trends populares ===".bold());
    println!();

    for (i, trend) in trends.iter().take(limit).enumerate() {
        let volume = trend.volume.as_deref().unwrap_or("N/A");
        println!("  {:>2}. {}", i + 1, trend.title.bold());
        print!(
            "      {} · {} · {}",
            trend.source.dimmed(),
            volume.yellow(),
            trend.timeframe.dimmed()
        );
        if let Some(count) = trend.news_count {
            print!("  ({count} noticias)");
        }
        println!();
    }

    if trends.len() > limit {
        println!("\n  {}", format!("+{} más", trends.len() - limit).dimmed());
    }
}

/// Print the analysis list: one row per report, with the headline each
/// covered outlet is running (when the article collection has one).
pub fn display_analysis_list(reports: &[AnalysisReport], articles: &[Article]) {
    if reports.is_empty() {
        println!("No hay análisis disponibles.");
        return;
    }

    println!("\n{}", "=== Análisis disponibles ===".bold());
    println!();

    for report in reports {
        println!("  {}", report.topic.bold());
        for outlet in &report.outlets {
            match headline_for_outlet(articles, outlet) {
                Some(headline) => {
                    println!("    {} {}", outlet.cyan(), truncate_chars(headline, 70))
                }
                None => println!("    {}", outlet.cyan()),
            }
        }
        println!(
            "    {}",
            format!(
                "{} artículos · {} medios · {}",
                report.article_total,
                report.outlet_total,
                format_timestamp(&report.analyzed_at)
            )
            .dimmed()
        );
        println!();
    }
}

/// Print the full drill-down card for one analysis report.
pub fn display_analysis_detail(report: &AnalysisReport) {
    println!("\n{}", format!("=== {} ===", report.topic).bold());

    println!("  Fecha de análisis: {}", format_timestamp(&report.analyzed_at));
    if let Some(model) = &report.model_used {
        println!("  Modelo: {model}");
    }
    if let Some(method) = &report.method {
        println!("  Método: {method}");
    }

    println!("\n{}", "Resumen objetivo".bold());
    println!("  {}", report.objective_summary);

    if let Some(w) = &report.five_w_one_h {
        println!("\n{}", "Análisis 5W+1H".bold());
        let entries = [
            ("¿Qué?", &w.what),
            ("¿Quién?", &w.who),
            ("¿Cuándo?", &w.when),
            ("¿Dónde?", &w.location),
            ("¿Por qué?", &w.why),
            ("¿Cómo?", &w.how),
        ];
        for (label, value) in entries {
            if let Some(v) = value {
                println!("  {:<10} {}", label.cyan(), v);
            }
        }
    }

    if !report.common_points.is_empty() {
        println!("\n{}", "Puntos clave".bold());
        for point in &report.common_points {
            println!("  - {point}");
        }
    }

    if let Some(sentiment) = &report.sentiment {
        println!("\n{}", "Sentimiento".bold());
        if let Some(tone) = &sentiment.overall_tone {
            println!("  Tono general: {tone}");
        }
        if let Some(level) = sentiment.sensationalism_level {
            println!("  Sensacionalismo: {} {:.0}%", meter(level, 20), level * 100.0);
        }
        if let Some(desc) = &sentiment.description {
            println!("  {}", desc.dimmed());
        }
    }

    if !report.detailed_bias.is_empty() {
        println!("\n{}", "Análisis detallado de sesgo".bold());
        for (outlet, bias) in &report.detailed_bias {
            println!("  {}", outlet.cyan().bold());
            if let Some(score) = bias.bias_score {
                let bar = meter(score / 100.0, 20);
                let colored_bar = if score > 60.0 {
                    bar.red()
                } else if score > 40.0 {
                    bar.yellow()
                } else {
                    bar.green()
                };
                println!("    Score de sesgo: {} {:.0}%", colored_bar, score);
            }
            if let Some(class) = &bias.classification {
                println!("    {class}");
            }
            if let Some(lang) = &bias.language {
                if let Some(emotiveness) = lang.emotiveness {
                    println!("    Emotividad: {emotiveness:.0}%");
                }
                if !lang.loaded_words.is_empty() {
                    println!("    Palabras cargadas: {}", lang.loaded_words.join(", "));
                }
            }
            if let Some(sources) = &bias.source_attribution {
                println!(
                    "    Citas directas: {}  indirectas: {}  sin fuente: {}",
                    sources.direct_quotes, sources.indirect_quotes, sources.unsourced_claims
                );
                if let Some(quality) = sources.source_quality_score {
                    println!("    Calidad de fuentes: {quality:.0}%");
                }
            }
        }
    }

    let ranked = report.outlets_by_volume();
    if !ranked.is_empty() {
        println!("\n{}", "Cobertura por medio".bold());
        for (outlet, dist) in ranked.iter().take(6) {
            println!(
                "  {:<24} {:>3}  {} {:.1}%",
                outlet,
                dist.article_count,
                meter(dist.coverage_percent / 100.0, 20),
                dist.coverage_percent
            );
        }

        let with_urls: Vec<_> = ranked.iter().filter(|(_, d)| !d.urls.is_empty()).collect();
        if !with_urls.is_empty() {
            println!("\n{}", "Artículos analizados".bold());
            for (outlet, dist) in with_urls {
                println!("  {} ({})", outlet.cyan(), dist.urls.len());
                for url in dist.urls.iter().take(3) {
                    println!("    {}", truncate_chars(url, 70).dimmed());
                }
                if dist.urls.len() > 3 {
                    println!("    {}", format!("+{} más", dist.urls.len() - 3).dimmed());
                }
            }
        }
    }

    if !report.coverage_by_outlet.is_empty() {
        println!("\n{}", "Enfoque por medio".bold());
        for (outlet, coverage) in &report.coverage_by_outlet {
            println!("  {}", outlet.cyan().bold());
            if let Some(focus) = &coverage.main_focus {
                println!("    Enfoque: {focus}");
            }
            if let Some(tone) = &coverage.tone {
                println!("    Tono: {tone}");
            }
            if !coverage.highlights.is_empty() {
                println!("    Destacados: {}", coverage.highlights.join(", "));
            }
        }
    }

    if !report.detected_bias.is_empty() {
        println!("\n{}", "Sesgo detectado".bold());
        for (outlet, bias) in &report.detected_bias {
            println!("  {}", outlet.cyan().bold());
            if let Some(orientation) = &bias.orientation {
                println!("    Orientación: {orientation}");
            }
            if let Some(level) = bias.level {
                let bar = meter(level, 20);
                let colored_bar = if level > 0.6 {
                    bar.red()
                } else if level > 0.4 {
                    bar.yellow()
                } else {
                    bar.green()
                };
                println!("    Nivel de sesgo: {} {:.0}%", colored_bar, level * 100.0);
            }
            for indicator in &bias.indicators {
                println!("    - {indicator}");
            }
        }
    }

    if let Some(matrix) = &report.comparative_matrix {
        println!("\n{}", "Matriz comparativa".bold());
        if let Some(outlet) = &matrix.most_objective_outlet {
            println!("  Más objetivo: {}", outlet.green());
        }
        if let Some(outlet) = &matrix.most_biased_outlet {
            println!("  Más sesgado: {}", outlet.red());
        }
        if let Some(level) = &matrix.consensus_level {
            println!("  Consenso: {level}");
        }
    }

    if !report.divergences.is_empty() {
        println!("\n{}", "Divergencias principales".bold());
        for divergence in &report.divergences {
            println!("  {}", divergence.aspect.bold());
            println!("    {}", divergence.difference);
            if let Some(impact) = &divergence.perception_impact {
                println!("    Impacto: {impact}");
            }
            for (outlet, perspective) in &divergence.outlet_perspectives {
                println!("    {}: {}", outlet.cyan(), perspective);
            }
        }
    }

    if !report.frequent_words.is_empty() {
        println!("\n{}", "Palabras más frecuentes".bold());
        for (outlet, words) in &report.frequent_words {
            println!("  {}", outlet.cyan().bold());
            if !words.positive.is_empty() {
                println!("    {} {}", "Positivas:".green(), words.positive.join(", "));
            }
            if !words.negative.is_empty() {
                println!("    {} {}", "Negativas:".red(), words.negative.join(", "));
            }
            if !words.neutral.is_empty() {
                println!("    Neutras: {}", words.neutral.join(", "));
            }
        }
    }

    let omissions = report.all_omissions();
    if !omissions.is_empty() {
        println!("\n{}", "Omisiones importantes".bold());
        for omission in omissions {
            println!("  {}: {}", omission.outlet.cyan(), omission.omitted_information);
        }
    }

    if let Some(recommendation) = &report.reader_recommendation {
        println!("\n{}", "Recomendación".bold());
        println!("  {recommendation}");
    }

    println!(
        "\n  {}",
        format!(
            "{} artículos · {} medios · analizado {}",
            report.article_total,
            report.outlet_total,
            format_timestamp(&report.analyzed_at)
        )
        .dimmed()
    );
}
