//! Text-similarity scoring for duplicate bug detection.
//!
//! The engine normalizes both texts into token sets (lowercased, stopwords
//! removed, plural suffixes stripped) and computes their cosine similarity.
//! Scoring is synchronous and cheap; an optional in-process cache avoids
//! rescoring identical pairs when the triage pipeline batches reports.

use crate::config::{HunterConfig, SimilaritySettings};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Narrow contract through which callers score two texts.
///
/// The checkup engine depends on this trait rather than on the concrete
/// engine, so tests can substitute scorers with fixed or delayed answers.
pub trait SimilarityScorer: Send + Sync {
    /// Returns a similarity score in `[0, 1]` for the two texts.
    fn score(&self, a: &str, b: &str) -> anyhow::Result<f64>;
}

/// Words that carry no signal when comparing report texts.
const STOPWORDS: [&str; 16] = [
    "a", "an", "and", "are", "at", "by", "for", "in", "is", "it", "of", "on", "or", "the", "to",
    "with",
];

/// Token-set cosine similarity engine.
pub struct SimilarityEngine {
    settings: SimilaritySettings,
    cache: Option<Mutex<HashMap<(String, String), f64>>>,
}

impl SimilarityEngine {
    pub fn new(settings: SimilaritySettings, cache_enabled: bool) -> Self {
        let cache = cache_enabled.then(|| Mutex::new(HashMap::new()));
        Self { settings, cache }
    }

    /// Builds an engine from loaded settings, honoring the performance
    /// toggle for the score cache.
    pub fn from_config(config: &HunterConfig) -> Self {
        Self::new(
            config.similarity.clone(),
            config.performance.enable_similarity_cache,
        )
    }

    /// Scores two texts in `[0, 1]`. Empty or stopword-only texts score 0.
    pub fn score_pair(&self, a: &str, b: &str) -> f64 {
        let key = cache_key(a, b);
        if let Some(cache) = &self.cache
            && let Ok(cache) = cache.lock()
            && let Some(hit) = cache.get(&key)
        {
            return *hit;
        }

        let tokens_a = tokenize(a);
        let tokens_b = tokenize(b);
        let score = cosine(&tokens_a, &tokens_b);

        if let Some(cache) = &self.cache
            && let Ok(mut cache) = cache.lock()
            && cache.len() < self.settings.max_cache_entries
        {
            cache.insert(key, score);
        }

        score
    }

    /// Whether two reports read as duplicates under the configured floor.
    pub fn is_duplicate(&self, a: &str, b: &str) -> bool {
        self.score_pair(a, b) >= self.settings.min_score
    }
}

impl SimilarityScorer for SimilarityEngine {
    fn score(&self, a: &str, b: &str) -> anyhow::Result<f64> {
        Ok(self.score_pair(a, b))
    }
}

fn cache_key(a: &str, b: &str) -> (String, String) {
    // Scores are symmetric; one entry covers both orderings.
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

fn tokenize(text: &str) -> HashSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .map(str::to_lowercase)
        .filter(|token| !token.is_empty() && !STOPWORDS.contains(&token.as_str()))
        .map(|token| stem(&token))
        .collect()
}

/// Strips a trailing plural `s` so "errors" and "error" compare equal.
fn stem(token: &str) -> String {
    if token.len() > 3 && token.ends_with('s') && !token.ends_with("ss") {
        token[..token.len() - 1].to_string()
    } else {
        token.to_string()
    }
}

fn cosine(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let shared = a.intersection(b).count() as f64;
    shared / ((a.len() as f64) * (b.len() as f64)).sqrt()
}
