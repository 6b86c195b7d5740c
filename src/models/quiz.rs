// src/models/quiz.rs

use serde::{Deserialize, Serialize};
use url::Url;
use validator::Validate;

/// A generated multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,

    /// Correct answer and distractors in shuffled order.
    pub options: Vec<String>,

    /// 0-based index into `options`.
    pub correct_index: usize,

    /// Cites the sentence the question was built from.
    pub explanation: Option<String>,
}

/// A complete quiz synthesized from one article.
/// Serialized as-is into the `full_quiz_data` column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub title: Option<String>,
    pub summary: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub questions: Vec<Question>,
    #[serde(default)]
    pub source_url: Option<String>,
    /// ISO-8601 UTC timestamp, e.g. `2024-05-01T12:00:00.000000Z`.
    pub generated_at: String,
}

/// Quiz as returned by the API: the stored payload plus its record id and url.
#[derive(Debug, Serialize, Deserialize)]
pub struct QuizResponse {
    pub id: i64,
    pub url: String,
    #[serde(flatten)]
    pub quiz: Quiz,
}

/// DTO for requesting a new quiz.
#[derive(Debug, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    #[validate(length(min = 1, max = 2000), custom(function = validate_source_url))]
    pub url: String,
}

/// Only absolute http(s) URLs can be fetched.
fn validate_source_url(url: &str) -> Result<(), validator::ValidationError> {
    match Url::parse(url) {
        Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => Ok(()),
        Ok(_) => Err(validator::ValidationError::new("unsupported_url_scheme")),
        Err(_) => Err(validator::ValidationError::new("invalid_url")),
    }
}
