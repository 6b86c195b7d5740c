// src/quiz/templates.rs

use std::sync::LazyLock;

use regex::Regex;

use super::text::shorten;

static LEADING_ARTICLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[Tt]he\s").unwrap());

/// Truncation length for a sentence quoted inside a question.
pub const QUESTION_SENTENCE_CHARS: usize = 80;

/// A rule that turns a source sentence into question text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionTemplate {
    /// `"<subject> is ..."` becomes `According to the article, what is <subject>?`
    IsClause,
    /// Catch-all: quotes the shortened sentence.
    TrueAbout,
}

/// Templates in priority order. The first one that applies wins, and the
/// last one always applies.
pub const DEFAULT_TEMPLATES: &[QuestionTemplate] =
    &[QuestionTemplate::IsClause, QuestionTemplate::TrueAbout];

impl QuestionTemplate {
    /// Renders the question, or `None` if this template does not apply.
    pub fn render(&self, sentence: &str) -> Option<String> {
        let sentence = sentence.trim();
        match self {
            QuestionTemplate::IsClause => {
                let (subject, _) = sentence.split_once(" is ")?;
                let subject = LEADING_ARTICLE.replace(subject, "");
                Some(format!(
                    "According to the article, what is {}?",
                    subject.trim()
                ))
            }
            QuestionTemplate::TrueAbout => Some(format!(
                "Which of the following is true about: {}?",
                shorten(sentence, QUESTION_SENTENCE_CHARS)
            )),
        }
    }
}

/// Applies `templates` in order and returns the first rendering.
///
/// Falls back to [`QuestionTemplate::TrueAbout`] if the list has no
/// template that applies, so a question is always produced.
pub fn render_question(templates: &[QuestionTemplate], sentence: &str) -> String {
    templates
        .iter()
        .find_map(|t| t.render(sentence))
        .or_else(|| QuestionTemplate::TrueAbout.render(sentence))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_clause_uses_text_before_first_is() {
        let q = render_question(DEFAULT_TEMPLATES, "Paris is the capital of France, which is big.");
        assert_eq!(q, "According to the article, what is Paris?");
    }

    #[test]
    fn is_clause_strips_leading_article() {
        let q = QuestionTemplate::IsClause.render("The Seine is a river in France.");
        assert_eq!(q.as_deref(), Some("According to the article, what is Seine?"));

        let q = QuestionTemplate::IsClause.render("the Loire is longer than the Seine.");
        assert_eq!(q.as_deref(), Some("According to the article, what is Loire?"));
    }

    #[test]
    fn is_clause_keeps_words_starting_with_the() {
        let q = QuestionTemplate::IsClause.render("Theodore is a given name.");
        assert_eq!(q.as_deref(), Some("According to the article, what is Theodore?"));
    }

    #[test]
    fn is_clause_requires_surrounding_spaces() {
        assert_eq!(QuestionTemplate::IsClause.render("This island was settled early."), None);
    }

    #[test]
    fn true_about_shortens_long_sentences() {
        let sentence = "word ".repeat(40);
        let q = render_question(DEFAULT_TEMPLATES, &sentence);
        assert!(q.starts_with("Which of the following is true about: word word"));
        assert!(q.ends_with("...?"));
    }

    #[test]
    fn empty_template_list_still_renders() {
        let q = render_question(&[], "Rivers were used for trade.");
        assert_eq!(q, "Which of the following is true about: Rivers were used for trade.?");
    }
}
