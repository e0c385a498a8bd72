// Matching core — normalization, tokenization, similarity, tiered filtering.
//
// Every function in here is pure and total: no I/O, no shared state, no
// error conditions. A filter invocation is an idempotent function of the
// article collection, the search string, and the policy.

pub mod filter;
pub mod normalize;
pub mod policy;
pub mod similarity;

pub use filter::filter_articles;
pub use normalize::{normalize, Tokenizer};
pub use policy::{MatchPolicy, TitleRule};
