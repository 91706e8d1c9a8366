// src/config.rs

use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub rust_log: String,

    /// Base URL of the external trivia source (Open Trivia DB compatible).
    pub trivia_api_url: String,

    /// How many questions to request per daily refresh.
    pub question_count: u32,

    /// Optional category id / difficulty passed through to the source.
    pub trivia_category: Option<u32>,
    pub trivia_difficulty: Option<String>,

    /// Timeout for the external fetch, in seconds.
    pub fetch_timeout_secs: u64,

    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let trivia_api_url = env::var("TRIVIA_API_URL")
            .unwrap_or_else(|_| "https://opentdb.com/api.php".to_string());

        let question_count = env::var("QUESTION_COUNT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let trivia_category = env::var("TRIVIA_CATEGORY").ok().and_then(|v| v.parse().ok());

        let trivia_difficulty = env::var("TRIVIA_DIFFICULTY").ok();

        let fetch_timeout_secs = env::var("FETCH_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let port = env::var("PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(3000);

        Self {
            rust_log,
            trivia_api_url,
            question_count,
            trivia_category,
            trivia_difficulty,
            fetch_timeout_secs,
            port,
        }
    }
}
