// src/quiz/sentences.rs

use std::sync::LazyLock;

use regex::Regex;

use super::text::take_chars;

/// Sentence-ending punctuation followed by whitespace.
static BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// Candidates must be strictly longer than this (in chars) once trimmed.
pub const MIN_CANDIDATE_CHARS: usize = 20;

/// Length of the single candidate synthesized when no sentence survives.
pub const FALLBACK_CANDIDATE_CHARS: usize = 200;

/// Splits `text` into sentence candidates.
///
/// Two tiers:
/// * primary: split after `.`, `!` or `?` followed by whitespace, keeping
///   trimmed fragments longer than [`MIN_CANDIDATE_CHARS`];
/// * fallback: if nothing survives, the first [`FALLBACK_CANDIDATE_CHARS`]
///   characters of the text become the only candidate.
///
/// The result is therefore never empty, even for empty text.
pub fn candidates(text: &str) -> Vec<String> {
    let primary = split_sentences(text);
    if !primary.is_empty() {
        return primary;
    }

    tracing::debug!("No sentence candidates survived filtering, using text prefix");
    vec![fallback_candidate(text)]
}

/// Primary tier: punctuation-delimited fragments that pass the length filter.
pub fn split_sentences(text: &str) -> Vec<String> {
    let text = text.trim();
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in BOUNDARY.find_iter(text) {
        // keep the punctuation mark, drop the whitespace after it
        push_candidate(&mut sentences, &text[start..m.start() + 1]);
        start = m.end();
    }
    push_candidate(&mut sentences, &text[start..]);

    sentences
}

fn push_candidate(out: &mut Vec<String>, fragment: &str) {
    let fragment = fragment.trim();
    if fragment.chars().count() > MIN_CANDIDATE_CHARS {
        out.push(fragment.to_string());
    }
}

fn fallback_candidate(text: &str) -> String {
    take_chars(text, FALLBACK_CANDIDATE_CHARS).to_string()
}

/// Picks up to `num_questions` candidates, evenly spaced across the pool.
///
/// Starts at the first candidate and advances by
/// `max(1, len / (num_questions + 1))`.
pub fn select_evenly(candidates: &[String], num_questions: usize) -> Vec<&str> {
    let step = (candidates.len() / num_questions.saturating_add(1)).max(1);

    candidates
        .iter()
        .step_by(step)
        .take(num_questions)
        .map(String::as_str)
        .collect()
}
