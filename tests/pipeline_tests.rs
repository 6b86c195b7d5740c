// tests/pipeline_tests.rs

use rand::{SeedableRng, rngs::StdRng};
use wiki_quiz::{
    QuizSynthesizer, extract,
    quiz::{ANSWER_CHARS, keywords::STOP_WORDS, sentences, text::shorten},
};

const PARIS_PAGE: &str = include_str!("fixtures/paris.html");

#[test]
fn article_page_becomes_quiz() {
    // Arrange
    let (title, text) = extract(PARIS_PAGE).expect("fixture should extract");
    let mut rng = StdRng::seed_from_u64(2024);

    // Act
    let quiz = QuizSynthesizer::default().synthesize(&title, &text, 6, &mut rng);

    // Assert
    assert_eq!(title, "Paris");
    assert!(!text.contains("[1]"), "citation markers must be stripped");
    assert!(!text.contains("Population 2,102,650"), "infobox content must be stripped");
    assert!(!text.contains("See also"), "side content must be stripped");
    assert!(!text.contains("licence"), "content outside the container must be ignored");
    assert_eq!(text.split("\n\n").count(), 5);

    assert!(!quiz.questions.is_empty());
    assert!(quiz.questions.len() <= 6);
    let pool = sentences::candidates(&text);
    let chosen = sentences::select_evenly(&pool, 6);
    assert_eq!(quiz.questions.len(), chosen.len());
    for (q, sentence) in quiz.questions.iter().zip(&chosen) {
        assert!(q.correct_index < q.options.len());
        assert_eq!(q.options[q.correct_index], shorten(sentence, ANSWER_CHARS));
    }

    assert_eq!(
        quiz.questions[0].question,
        "According to the article, what is Paris?"
    );
    assert!(quiz.keywords.len() <= 8);
    assert!(quiz.keywords.iter().all(|k| k.len() >= 4 && !STOP_WORDS.contains(&k.as_str())));
    assert_eq!(quiz.summary, text);
}

#[test]
fn extraction_is_idempotent() {
    assert_eq!(extract(PARIS_PAGE).unwrap(), extract(PARIS_PAGE).unwrap());
}

#[test]
fn page_without_paragraphs_still_yields_one_question() {
    // Arrange
    let html = r#"<html><body><h1 id="firstHeading">Stub</h1><div id="mw-content-text">
        <div>Loose text without any paragraph element.</div></div></body></html>"#;
    let mut rng = StdRng::seed_from_u64(1);

    // Act
    let (title, text) = extract(html).unwrap();
    let quiz = QuizSynthesizer::default().synthesize(&title, &text, 5, &mut rng);

    // Assert
    assert_eq!(title, "Stub");
    assert_eq!(text, "");
    assert_eq!(quiz.questions.len(), 1);
    assert_eq!(quiz.questions[0].correct_index, 0);
}

#[test]
fn two_sentences_cap_question_count() {
    let text = "Paris is the capital of France. It has a population of over two million.";
    let mut rng = StdRng::seed_from_u64(8);

    let quiz = QuizSynthesizer::default().synthesize("Paris", text, 5, &mut rng);

    assert!(quiz.questions.len() <= 2);
    assert!(quiz.questions[0].question.starts_with("According to the article, what is Paris"));
    assert_eq!(quiz.summary, text);
}
