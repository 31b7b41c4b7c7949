//! Swappable string-similarity metrics for fuzzy skill matching.
//!
//! The linear-ratio/threshold behavior in the matcher is the contract; the
//! metric behind it is not. Both implementations are pure functions into
//! `[0, 1]`.

/// A normalized string-similarity metric.
pub trait Similarity: Send + Sync {
    /// Similarity in `[0, 1]`, where 1.0 means equal.
    fn similarity(&self, a: &str, b: &str) -> f64;

    /// Short metric name for breakdown/debug output.
    fn name(&self) -> &'static str;
}

/// Jaro-Winkler similarity. Prefix-weighted, which suits skill tokens where
/// variants share a stem ("postgres" / "postgresql").
#[derive(Debug, Clone, Copy, Default)]
pub struct JaroWinkler;

impl Similarity for JaroWinkler {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        strsim::jaro_winkler(a, b)
    }

    fn name(&self) -> &'static str {
        "jaro_winkler"
    }
}

/// Dice coefficient over whitespace tokens. Order-insensitive, which suits
/// multi-word skills ("machine learning" / "learning, machine").
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenOverlap;

impl Similarity for TokenOverlap {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let a_tokens: Vec<&str> = a.split_whitespace().collect();
        let b_tokens: Vec<&str> = b.split_whitespace().collect();
        if a_tokens.is_empty() || b_tokens.is_empty() {
            return 0.0;
        }

        let shared = a_tokens.iter().filter(|t| b_tokens.contains(t)).count();
        (2.0 * shared as f64) / (a_tokens.len() + b_tokens.len()) as f64
    }

    fn name(&self) -> &'static str {
        "token_overlap"
    }
}
