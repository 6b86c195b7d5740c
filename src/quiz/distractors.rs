// src/quiz/distractors.rs

use rand::{Rng, seq::SliceRandom};

use super::text::shorten;
use super::ANSWER_CHARS;

/// Number of wrong answers a question aims for.
pub const TARGET_DISTRACTORS: usize = 3;

/// Maximum number of draws from the pool per question.
pub const MAX_ATTEMPTS: usize = 20;

/// Draws distractors for `correct` from `pool`.
///
/// Each attempt picks a uniformly random candidate and shortens it. The
/// fragment is kept when it differs from `correct` and from every fragment
/// already kept. The loop ends after [`TARGET_DISTRACTORS`] are found or
/// [`MAX_ATTEMPTS`] draws, whichever comes first. Returning fewer than the
/// target is a normal outcome for small or repetitive pools.
pub fn sample<R: Rng + ?Sized>(pool: &[String], correct: &str, rng: &mut R) -> Vec<String> {
    sample_with(move || pool.choose(rng).map(String::as_str), correct)
}

/// Runs the bounded attempt loop over `draw`, which yields one random
/// candidate per call or `None` when the pool is empty.
fn sample_with<'p, F>(mut draw: F, correct: &str) -> Vec<String>
where
    F: FnMut() -> Option<&'p str>,
{
    let mut distractors: Vec<String> = Vec::with_capacity(TARGET_DISTRACTORS);

    for _ in 0..MAX_ATTEMPTS {
        if distractors.len() >= TARGET_DISTRACTORS {
            break;
        }
        let Some(candidate) = draw() else {
            break;
        };
        let fragment = shorten(candidate, ANSWER_CHARS);
        if fragment != correct && !distractors.contains(&fragment) {
            distractors.push(fragment);
        }
    }

    if distractors.len() < TARGET_DISTRACTORS {
        tracing::debug!(
            found = distractors.len(),
            "Distractor budget exhausted before reaching target"
        );
    }

    distractors
}

/// Shuffles the correct answer in among the distractors.
///
/// Returns the options and the index of the first option equal to `correct`.
pub fn assemble_options<R: Rng + ?Sized>(
    correct: &str,
    distractors: Vec<String>,
    rng: &mut R,
) -> (Vec<String>, usize) {
    let mut options = distractors;
    options.push(correct.to_string());
    options.shuffle(rng);

    // `correct` is always present, so the fallback is never taken
    let correct_index = options.iter().position(|o| o == correct).unwrap_or(0);
    (options, correct_index)
}
