//! Bag-of-words TF-IDF cosine similarity between two texts.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];
const MIN_TOKEN_CHARS: usize = 3;

static NON_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

/// Lowercases, replaces punctuation with spaces, and drops stop words and
/// tokens shorter than three characters. The result is what gets vectorised.
pub fn preprocess_text(text: &str) -> String {
    let lower = text.to_lowercase();
    NON_WORD_RE
        .replace_all(&lower, " ")
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_TOKEN_CHARS && !STOP_WORDS.contains(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cosine similarity in [0, 1] of the smoothed TF-IDF vectors of `a` and `b`,
/// with the two texts as the whole corpus. Returns 0 when either side has no tokens.
pub fn tfidf_cosine(a: &str, b: &str) -> f64 {
    let (clean_a, clean_b) = (preprocess_text(a), preprocess_text(b));
    let docs = [term_counts(&clean_a), term_counts(&clean_b)];
    if docs.iter().any(HashMap::is_empty) {
        return 0.0;
    }

    let vocabulary: HashSet<&str> = docs.iter().flat_map(|d| d.keys().copied()).collect();
    let n_docs = docs.len() as f64;
    let idf: HashMap<&str, f64> = vocabulary
        .iter()
        .map(|term| {
            let df = docs.iter().filter(|d| d.contains_key(term)).count() as f64;
            (*term, ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0)
        })
        .collect();

    let weight = |doc: &HashMap<&str, usize>, term: &str| {
        doc.get(term).copied().unwrap_or(0) as f64 * idf[term]
    };

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for term in &vocabulary {
        let wa = weight(&docs[0], term);
        let wb = weight(&docs[1], term);
        dot += wa * wb;
        norm_a += wa * wa;
        norm_b += wb * wb;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(0.0, 1.0)
}

fn term_counts(preprocessed: &str) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for token in preprocessed.split_whitespace() {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}
