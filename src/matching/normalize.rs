// Text normalization and tokenization.
//
// Search strings and article fields are never compared raw: both sides go
// through `normalize` first, so "MADRID", "Madrid" and "mádrid" all produce
// the same matching key. The normalized form is only ever a key — the user
// always sees the original text.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};
use unicode_normalization::UnicodeNormalization;

/// Canonical matching key for a string: Unicode-decompose, drop combining
/// diacritical marks, lowercase, trim.
///
/// NFD splits accented letters into base + combining mark, so stripping the
/// combining ranges turns "á" into "a" and "ñ" into "n". Idempotent — the
/// output contains no decomposable characters the second pass could change.
pub fn normalize(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect::<String>()
        .trim()
        .to_string()
}

// https://en.wikipedia.org/wiki/Combining_character#Unicode_ranges
fn is_combining_mark(c: char) -> bool {
    matches!(
        c,
        '\u{0300}'..='\u{036F}'
            | '\u{1AB0}'..='\u{1AFF}'
            | '\u{1DC0}'..='\u{1DFF}'
            | '\u{20D0}'..='\u{20FF}'
            | '\u{FE20}'..='\u{FE2F}'
    )
}

/// Splits a search string into significant tokens: whitespace-delimited,
/// normalized, with Spanish stopwords and very short words removed.
///
/// Build one and reuse it — the stopword set is materialized up front from
/// the `stop-words` Spanish list, normalized with the same `normalize` so
/// "también" in the list matches the accent-stripped "tambien" token.
pub struct Tokenizer {
    stopwords: HashSet<String>,
    min_token_chars: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        let stopwords = get(LANGUAGE::Spanish)
            .iter()
            .map(|w| normalize(w))
            .collect();
        Self {
            stopwords,
            min_token_chars: 3,
        }
    }
}

impl Tokenizer {
    /// Tokenize an already-normalized string.
    ///
    /// Tokens shorter than three characters are dropped along with the
    /// stopwords — two-letter fragments match almost every Spanish title
    /// and would drown out the real terms.
    pub fn tokens(&self, normalized: &str) -> Vec<String> {
        normalized
            .split_whitespace()
            .filter(|w| w.chars().count() >= self.min_token_chars)
            .filter(|w| !self.stopwords.contains(*w))
            .map(str::to_string)
            .collect()
    }
}
