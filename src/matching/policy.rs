// Match policy — one matcher, two profiles.
//
// The viewer historically grew separate, slightly divergent filter
// implementations for user queries and trend clicks. Here there is a single
// tiered matcher (see `filter`) and the differences live in this value:
// which title rule applies and where the thresholds sit.

/// How Tier 1 (the title tier) decides a match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TitleRule {
    /// Every surviving token is a substring of the normalized title.
    /// The strict rule for hand-typed queries.
    AllTokens,
    /// Whole-string edit-distance similarity against the normalized title
    /// is strictly above `threshold`. The loose rule for trend titles,
    /// which are shorter and noisier than queries.
    Similarity { threshold: f64 },
}

/// Thresholds and tier parameters for one filter invocation.
///
/// All fields are public on purpose: the 0.6/0.7 values below are tuning
/// knobs, not invariants, and callers may ship their own profile.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchPolicy {
    /// Tier 1 rule.
    pub title_rule: TitleRule,
    /// Tier 2 only fires when the surviving-token count is at most this —
    /// a long query matching a single tag says very little.
    pub tag_match_max_tokens: usize,
    /// Tier 3 includes an article when the fraction of tokens found in
    /// title + subtitle reaches this.
    pub coverage_threshold: f64,
}

impl MatchPolicy {
    /// Profile for free-text user queries: exact token containment in the
    /// title, tag matches only for one- or two-token queries, 70% coverage.
    pub fn query() -> Self {
        Self {
            title_rule: TitleRule::AllTokens,
            tag_match_max_tokens: 2,
            coverage_threshold: 0.7,
        }
    }

    /// Profile for trending-topic titles: fuzzy title similarity above 0.7,
    /// same tag rule as queries, coverage relaxed to 60%. Trades precision
    /// for recall on noisy trend strings.
    pub fn trend() -> Self {
        Self {
            title_rule: TitleRule::Similarity { threshold: 0.7 },
            tag_match_max_tokens: 2,
            coverage_threshold: 0.6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_carry_the_documented_thresholds() {
        let query = MatchPolicy::query();
        assert_eq!(query.title_rule, TitleRule::AllTokens);
        assert_eq!(query.coverage_threshold, 0.7);

        let trend = MatchPolicy::trend();
        assert_eq!(trend.title_rule, TitleRule::Similarity { threshold: 0.7 });
        assert_eq!(trend.coverage_threshold, 0.6);
        assert_eq!(trend.tag_match_max_tokens, query.tag_match_max_tokens);
    }
}
