// src/quiz/keywords.rs

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

static TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[a-z]{4,}\b").unwrap());

/// Maximum number of keywords reported per quiz.
pub const MAX_KEYWORDS: usize = 8;

/// Common words of four or more letters that never count as keywords.
pub const STOP_WORDS: &[&str] = &[
    "which", "this", "that", "there", "their", "about", "have", "would", "should", "these",
    "those", "other", "using",
];

/// Returns up to `max` of the most frequent alphabetic tokens in `text`.
///
/// Tokens are lower-cased, at least four letters long and not in
/// [`STOP_WORDS`]. Equal counts keep the order in which the tokens first
/// appeared.
pub fn extract(text: &str, max: usize) -> Vec<String> {
    let lowered = text.to_lowercase();

    // (token, count) in first-seen order, with an index for lookups
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for m in TOKEN.find_iter(&lowered) {
        let word = m.as_str();
        if STOP_WORDS.contains(&word) {
            continue;
        }
        let i = *index.entry(word).or_insert_with(|| {
            counts.push((word, 0));
            counts.len() - 1
        });
        counts[i].1 += 1;
    }

    // stable sort keeps first-seen order among ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(max)
        .map(|(word, _)| word.to_string())
        .collect()
}
