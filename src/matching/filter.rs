// Tiered article filtering — the consolidated query/trend matcher.
//
// Three decreasing-strictness tiers, evaluated in order; the first satisfied
// tier includes the article. Results keep the collection's order and are
// deduplicated by title, first occurrence wins.

use std::collections::HashSet;

use crate::model::Article;

use super::normalize::{normalize, Tokenizer};
use super::policy::{MatchPolicy, TitleRule};
use super::similarity::similarity;

/// Filter a collection against a raw search string under a policy.
///
/// The empty-token case (blank input, or every word a stopword or too
/// short) returns the collection unchanged — degenerate input means "no
/// filtering", not "no results". Zero matches is an empty Vec, never an
/// error.
pub fn filter_articles(
    articles: &[Article],
    raw: &str,
    policy: &MatchPolicy,
    tokenizer: &Tokenizer,
) -> Vec<Article> {
    let needle = normalize(raw);
    let tokens = tokenizer.tokens(&needle);

    if tokens.is_empty() {
        return articles.to_vec();
    }

    let mut seen_titles: HashSet<&str> = HashSet::new();
    let mut matched = Vec::new();

    for article in articles {
        if !matches_tiers(article, &needle, &tokens, policy) {
            continue;
        }
        // Dedup on the raw title: the same story syndicated under two URLs
        // shows up once, keeping the first-seen copy.
        if seen_titles.insert(article.title.as_str()) {
            matched.push(article.clone());
        }
    }

    matched
}

fn matches_tiers(article: &Article, needle: &str, tokens: &[String], policy: &MatchPolicy) -> bool {
    let title = normalize(&article.title);

    // Tier 1: the title itself.
    let title_hit = match policy.title_rule {
        TitleRule::AllTokens => tokens.iter().all(|t| title.contains(t.as_str())),
        TitleRule::Similarity { threshold } => similarity(needle, &title) > threshold,
    };
    if title_hit {
        return true;
    }

    // Tier 2: tags, guarded against over-broad matches on long inputs.
    if tokens.len() <= policy.tag_match_max_tokens {
        let tag_hit = article.tags.iter().any(|tag| {
            let tag = normalize(tag);
            tokens.iter().any(|t| tag == *t || tag.contains(t.as_str()))
        });
        if tag_hit {
            return true;
        }
    }

    // Tier 3: token coverage over title + subtitle.
    let combined = format!("{} {}", title, normalize(&article.subtitle));
    let found = tokens.iter().filter(|t| combined.contains(t.as_str())).count();
    found as f64 / tokens.len() as f64 >= policy.coverage_threshold
}
