// Outlet headline lookup for the analysis list view.
//
// The list shows, next to each outlet an analysis covered, one headline
// that outlet is currently running. The article collection is keyed by
// scraper domain ("elpais.com") while reports sometimes name outlets more
// loosely ("El País digital"), so the lookup falls back from exact match
// to partial containment in either direction.

use crate::model::Article;

/// Find a representative headline for an outlet in the article collection.
///
/// Exact `newspaper` match first; then case-insensitive containment either
/// way; `None` when the outlet has nothing in the collection.
pub fn headline_for_outlet<'a>(articles: &'a [Article], outlet: &str) -> Option<&'a str> {
    if let Some(article) = articles.iter().find(|a| a.newspaper == outlet) {
        return Some(&article.title);
    }

    let outlet_lower = outlet.to_lowercase();
    articles
        .iter()
        .find(|a| {
            let paper = a.newspaper.to_lowercase();
            paper.contains(&outlet_lower) || outlet_lower.contains(&paper)
        })
        .map(|a| a.title.as_str())
}

/// Count articles per outlet across the whole collection, most prolific
/// first. Feeds the status view's per-outlet breakdown.
pub fn articles_per_outlet(articles: &[Article]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for article in articles {
        match counts.iter_mut().find(|(name, _)| *name == article.newspaper) {
            Some((_, n)) => *n += 1,
            None => counts.push((article.newspaper.clone(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
