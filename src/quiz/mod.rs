// src/quiz/mod.rs

//! Heuristic quiz synthesis.
//!
//! Turns a title and a body of prose into a [`Quiz`] using plain pattern
//! rules: sentence splitting, evenly spaced selection, ordered question
//! templates, random distractor sampling and frequency-ranked keywords.

pub mod distractors;
pub mod keywords;
pub mod sentences;
pub mod templates;
pub mod text;

use chrono::{SecondsFormat, Utc};
use rand::Rng;

use crate::models::quiz::{Question, Quiz};

use self::templates::{DEFAULT_TEMPLATES, QuestionTemplate};
use self::text::{shorten, take_chars, truncate_chars};

/// Truncation length for answer options.
pub const ANSWER_CHARS: usize = 120;

/// Length of the source sentence quoted in an explanation.
pub const EXPLANATION_CHARS: usize = 150;

/// Length of the summary before the ellipsis marker.
pub const SUMMARY_CHARS: usize = 800;

/// Question count used by [`synthesize`].
pub const DEFAULT_NUM_QUESTIONS: usize = 5;

/// Builds quizzes from an ordered set of question templates.
#[derive(Debug, Clone)]
pub struct QuizSynthesizer {
    templates: Vec<QuestionTemplate>,
}

impl Default for QuizSynthesizer {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATES.to_vec())
    }
}

impl QuizSynthesizer {
    pub fn new(templates: Vec<QuestionTemplate>) -> Self {
        Self { templates }
    }

    /// Synthesizes a quiz of at most `num_questions` questions.
    ///
    /// Never fails: thin text produces fewer questions, and text without a
    /// usable sentence still produces one question from its prefix.
    pub fn synthesize<R: Rng + ?Sized>(
        &self,
        title: &str,
        text: &str,
        num_questions: usize,
        rng: &mut R,
    ) -> Quiz {
        let pool = sentences::candidates(text);
        let chosen = sentences::select_evenly(&pool, num_questions);

        let questions: Vec<Question> = chosen
            .into_iter()
            .map(|sentence| self.build_question(sentence, &pool, rng))
            .collect();

        tracing::debug!(
            candidates = pool.len(),
            questions = questions.len(),
            "Synthesized quiz"
        );

        Quiz {
            title: Some(title.to_string()),
            summary: truncate_chars(text, SUMMARY_CHARS),
            keywords: keywords::extract(text, keywords::MAX_KEYWORDS),
            questions,
            source_url: None,
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }

    fn build_question<R: Rng + ?Sized>(&self, sentence: &str, pool: &[String], rng: &mut R) -> Question {
        let question = templates::render_question(&self.templates, sentence);
        let correct = shorten(sentence, ANSWER_CHARS);

        let wrong = distractors::sample(pool, &correct, rng);
        let (options, correct_index) = distractors::assemble_options(&correct, wrong, rng);

        Question {
            question,
            options,
            correct_index,
            explanation: Some(format!(
                "Answer derived from sentence: \"{}\"",
                take_chars(sentence, EXPLANATION_CHARS)
            )),
        }
    }
}

/// Synthesizes a quiz with the default templates and [`DEFAULT_NUM_QUESTIONS`].
pub fn synthesize<R: Rng + ?Sized>(title: &str, text: &str, rng: &mut R) -> Quiz {
    QuizSynthesizer::default().synthesize(title, text, DEFAULT_NUM_QUESTIONS, rng)
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    const ARTICLE: &str = "Paris is the capital of France. It has a population of over two million. \
        The Seine is a river that flows through the city. Many bridges cross the river in the centre. \
        The Louvre is the most visited museum in the world. Tourists arrive from every continent each year. \
        The Eiffel Tower was completed in 1889 for a world fair. It was initially criticised by artists.";

    #[test]
    fn every_correct_index_is_valid_and_points_at_answer() {
        let synth = QuizSynthesizer::default();
        for seed in 0..16 {
            let mut rng = StdRng::seed_from_u64(seed);
            let quiz = synth.synthesize("Paris", ARTICLE, 5, &mut rng);
            let pool = sentences::candidates(ARTICLE);
            let chosen = sentences::select_evenly(&pool, 5);

            assert_eq!(quiz.questions.len(), chosen.len());
            for (q, sentence) in quiz.questions.iter().zip(&chosen) {
                assert!(!q.options.is_empty());
                assert!(q.correct_index < q.options.len());
                assert!(q.options.len() <= 4);

                let answer = &q.options[q.correct_index];
                assert_eq!(answer, &shorten(sentence, ANSWER_CHARS));
                assert_eq!(q.options.iter().filter(|o| *o == answer).count(), 1);
            }
        }
    }

    #[test]
    fn is_clause_question_for_first_sentence() {
        let mut rng = StdRng::seed_from_u64(0);
        let text = "Paris is the capital of France. It has a population of over two million.";

        let quiz = QuizSynthesizer::default().synthesize("Paris", text, 1, &mut rng);

        assert_eq!(quiz.questions.len(), 1);
        let q = &quiz.questions[0];
        assert!(q.question.starts_with("According to the article, what is Paris"));
        assert_eq!(q.options[q.correct_index], "Paris is the capital of France.");
        assert_eq!(
            q.explanation.as_deref(),
            Some("Answer derived from sentence: \"Paris is the capital of France.\"")
        );
    }

    #[test]
    fn fewer_candidates_than_requested_is_not_an_error() {
        let mut rng = StdRng::seed_from_u64(5);
        let text = "Paris is the capital of France. It has a population of over two million.";

        let quiz = QuizSynthesizer::default().synthesize("Paris", text, 5, &mut rng);

        assert!(quiz.questions.len() <= 2);
        assert!(!quiz.questions.is_empty());
    }

    #[test]
    fn empty_text_still_yields_one_question() {
        let mut rng = StdRng::seed_from_u64(9);

        let quiz = QuizSynthesizer::default().synthesize("", "", 5, &mut rng);

        assert_eq!(quiz.questions.len(), 1);
        let q = &quiz.questions[0];
        assert_eq!(q.options, vec![String::new()]);
        assert_eq!(q.correct_index, 0);
        assert!(quiz.keywords.is_empty());
        assert_eq!(quiz.summary, "");
    }

    #[test]
    fn summary_is_truncated_only_when_long() {
        let mut rng = StdRng::seed_from_u64(1);
        let short = QuizSynthesizer::default().synthesize("t", ARTICLE, 3, &mut rng);
        assert_eq!(short.summary, ARTICLE);

        let long_text = "a".repeat(SUMMARY_CHARS + 1);
        let long = QuizSynthesizer::default().synthesize("t", &long_text, 3, &mut rng);
        assert_eq!(long.summary.chars().count(), SUMMARY_CHARS + 3);
        assert!(long.summary.ends_with("..."));
    }

    #[test]
    fn keywords_are_bounded_and_filtered() {
        let mut rng = StdRng::seed_from_u64(2);
        let quiz = synthesize("Paris", ARTICLE, &mut rng);

        assert!(quiz.keywords.len() <= keywords::MAX_KEYWORDS);
        for k in &quiz.keywords {
            assert!(k.chars().count() >= 4);
            assert!(!keywords::STOP_WORDS.contains(&k.as_str()));
        }
        assert_eq!(quiz.keywords[0], "river");
    }

    #[test]
    fn unbounded_question_count_does_not_panic() {
        let mut rng = StdRng::seed_from_u64(4);
        let text = "Paris is the capital of France. It has a population of over two million.";

        let quiz = QuizSynthesizer::default().synthesize("t", text, usize::MAX, &mut rng);

        assert_eq!(quiz.questions.len(), 2);
    }

    #[test]
    fn same_seed_gives_same_questions() {
        let synth = QuizSynthesizer::default();
        let a = synth.synthesize("Paris", ARTICLE, 4, &mut StdRng::seed_from_u64(11));
        let b = synth.synthesize("Paris", ARTICLE, 4, &mut StdRng::seed_from_u64(11));
        assert_eq!(a.questions, b.questions);
    }

    #[test]
    fn metadata_fields_are_filled() {
        let mut rng = StdRng::seed_from_u64(3);
        let quiz = synthesize("Paris", ARTICLE, &mut rng);

        assert_eq!(quiz.title.as_deref(), Some("Paris"));
        assert_eq!(quiz.source_url, None);
        assert!(quiz.generated_at.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&quiz.generated_at).is_ok());
    }
}
