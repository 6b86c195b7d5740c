// src/config.rs

use std::env;
use dotenvy::dotenv;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,
    pub port: u16,
    /// Questions requested per generated quiz.
    pub num_questions: usize,
    /// Timeout for fetching a source page.
    pub fetch_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://quiz_history.db?mode=rwc".to_string());

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .expect("PORT must be a valid port number");

        let num_questions = env::var("QUIZ_NUM_QUESTIONS")
            .unwrap_or_else(|_| "6".to_string())
            .parse()
            .expect("QUIZ_NUM_QUESTIONS must be a non-negative integer");

        let fetch_timeout_secs = env::var("FETCH_TIMEOUT_SECS")
            .unwrap_or_else(|_| "15".to_string())
            .parse()
            .expect("FETCH_TIMEOUT_SECS must be a number of seconds");

        Self {
            database_url,
            rust_log,
            port,
            num_questions,
            fetch_timeout_secs,
        }
    }
}
