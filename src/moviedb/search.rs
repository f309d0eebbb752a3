//! Title search.
//!
//! A query yields two groups:
//!
//! 1. **Fuzzy matches**: titles whose [`similarity`] to the query is above
//!    [`FUZZY_THRESHOLD`], best first.
//! 2. **Substring matches**: titles containing the query (ignoring case) that
//!    are not already fuzzy matches, in catalog order.

use crate::model::Movie;
use serde::Serialize;

/// Scores must be strictly greater than this to count as a fuzzy match.
pub const FUZZY_THRESHOLD: u8 = 75;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuzzyMatch {
    pub title: String,
    pub score: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResults {
    pub query: String,
    pub fuzzy: Vec<FuzzyMatch>,
    pub substring: Vec<String>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.fuzzy.is_empty() && self.substring.is_empty()
    }
}

pub fn search(movies: &[Movie], query: &str) -> SearchResults {
    let query_lower = query.to_lowercase();

    let mut fuzzy: Vec<FuzzyMatch> = movies
        .iter()
        .map(|m| FuzzyMatch {
            title: m.title.clone(),
            score: similarity(query, &m.title),
        })
        .filter(|hit| hit.score > FUZZY_THRESHOLD)
        .collect();
    fuzzy.sort_by(|a, b| b.score.cmp(&a.score));

    let substring = movies
        .iter()
        .filter(|m| m.title.to_lowercase().contains(&query_lower))
        .filter(|m| !fuzzy.iter().any(|hit| hit.title == m.title))
        .map(|m| m.title.clone())
        .collect();

    SearchResults {
        query: query.to_string(),
        fuzzy,
        substring,
    }
}

/// Word similarity on a 0–100 scale, ignoring case.
///
/// The best of a plain edit-distance ratio, the same ratio over alphabetically
/// sorted words, and a best-window partial ratio. The partial ratio only
/// applies when one string is at least 1.5 times longer, and is damped by
/// 0.9 (or 0.6 beyond 8 times longer).
pub fn similarity(a: &str, b: &str) -> u8 {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let plain = strsim::normalized_levenshtein(&a, &b);
    let token_sorted = strsim::normalized_levenshtein(&sort_tokens(&a), &sort_tokens(&b));
    let partial = partial_ratio(&a, &b);

    let best = plain.max(token_sorted).max(partial);
    (best * 100.0).round().clamp(0.0, 100.0) as u8
}

fn sort_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let length_ratio = long.len() as f64 / short.len() as f64;
    if length_ratio < 1.5 {
        return 0.0;
    }
    let scale = if length_ratio <= 8.0 { 0.9 } else { 0.6 };

    let short: String = short.iter().collect();
    let best = long
        .windows(short.chars().count())
        .map(|window| {
            let window: String = window.iter().collect();
            strsim::normalized_levenshtein(&short, &window)
        })
        .fold(0.0, f64::max);
    best * scale
}
