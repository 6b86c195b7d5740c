// src/models/quiz_record.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Represents the 'quizzes' table in the database.
#[derive(Debug, Clone, FromRow)]
pub struct QuizRecord {
    pub id: i64,
    pub url: String,
    pub title: Option<String>,
    pub date_generated: DateTime<Utc>,

    /// Cleaned article text the quiz was generated from.
    pub scraped_content: Option<String>,

    /// The full `Quiz` serialized as JSON.
    pub full_quiz_data: String,
}

/// Row of the history listing. Excludes the text and the quiz payload.
#[derive(Debug, Serialize, FromRow)]
pub struct HistoryEntry {
    pub id: i64,
    pub url: String,
    pub title: Option<String>,
    pub date_generated: DateTime<Utc>,
}
