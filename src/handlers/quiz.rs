// src/handlers/quiz.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use rand::{SeedableRng, rngs::StdRng};
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    config::Config,
    error::AppError,
    models::{
        quiz::{GenerateQuizRequest, Quiz, QuizResponse},
        quiz_record::{HistoryEntry, QuizRecord},
    },
    quiz::QuizSynthesizer,
    utils::{fetch::PageFetcher, html},
};

/// Fetches the page and extracts `(title, clean_text)`.
/// Failures are logged with the offending URL before being surfaced.
async fn scrape(fetcher: &PageFetcher, url: &str) -> Result<(String, String), AppError> {
    let markup = fetcher.fetch(url).await.map_err(|e| {
        tracing::error!(url = %url, error = ?e, "Failed to fetch source page");
        AppError::from(e)
    })?;

    html::extract(&markup).map_err(|e| {
        tracing::error!(url = %url, error = ?e, "Failed to extract article content");
        AppError::from(e)
    })
}

/// Generates a quiz for the given article URL.
///
/// * Fetches the page and extracts its prose.
/// * Synthesizes `config.num_questions` questions.
/// * Persists the record and returns the quiz with its new id.
pub async fn generate_quiz(
    State(pool): State<SqlitePool>,
    State(config): State<Config>,
    State(fetcher): State<PageFetcher>,
    Json(req): Json<GenerateQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let url = req.url;
    let (title, clean_text) = scrape(&fetcher, &url).await?;

    let quiz = {
        let mut rng = StdRng::from_entropy();
        let generated = QuizSynthesizer::default().synthesize(
            &title,
            &clean_text,
            config.num_questions,
            &mut rng,
        );
        Quiz {
            source_url: Some(url.clone()),
            ..generated
        }
    };

    let blob = serde_json::to_string(&quiz)?;

    let id = sqlx::query(
        r#"
        INSERT INTO quizzes (url, title, date_generated, scraped_content, full_quiz_data)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&url)
    .bind(&title)
    .bind(Utc::now())
    .bind(&clean_text)
    .bind(&blob)
    .execute(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to persist quiz for {}: {:?}", url, e);
        AppError::InternalServerError(e.to_string())
    })?
    .last_insert_rowid();

    tracing::info!(id, url = %url, questions = quiz.questions.len(), "Quiz generated");

    Ok((StatusCode::CREATED, Json(QuizResponse { id, url, quiz })))
}

/// Lists all generated quizzes, newest first.
pub async fn list_history(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let entries = sqlx::query_as::<_, HistoryEntry>(
        r#"
        SELECT id, url, title, date_generated
        FROM quizzes
        ORDER BY date_generated DESC, id DESC
        "#,
    )
    .fetch_all(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to list quiz history: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok(Json(entries))
}

/// Retrieves a stored quiz by ID, with its id and source url reattached.
pub async fn get_quiz(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let record = sqlx::query_as::<_, QuizRecord>(
        r#"
        SELECT id, url, title, date_generated, scraped_content, full_quiz_data
        FROM quizzes
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::NotFound("Quiz not found".to_string()))?;

    let quiz: Quiz = serde_json::from_str(&record.full_quiz_data).map_err(|e| {
        tracing::error!("Stored quiz {} has a corrupt payload: {:?}", record.id, e);
        AppError::from(e)
    })?;

    Ok(Json(QuizResponse {
        id: record.id,
        url: record.url,
        quiz,
    }))
}

/// Liveness probe.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "message": "Wiki quiz generator is running"
    }))
}
