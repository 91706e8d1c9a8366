// src/models/leaderboard.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A row on the daily leaderboard.
///
/// Entries are never mutated after insertion, only inserted and re-sorted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// Opaque identifier, unique within the store, generated at insertion.
    pub id: String,

    /// Visitor-supplied display name, 1-20 characters after trimming.
    pub name: String,

    pub score: u32,

    #[serde(rename = "totalQuestions")]
    pub total_questions: u32,

    /// Integer 0-100, `round(100 * score / total_questions)`.
    pub percentage: u32,

    /// Seconds per question; smaller wins percentage ties.
    #[serde(rename = "averageTime")]
    pub average_time: f64,

    /// Calendar day the entry was created, `YYYY-MM-DD` (server-local).
    pub date: String,
}

/// DTO for submitting a completed score.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitScoreRequest {
    /// The 20-character cap applies to the trimmed name and is enforced by
    /// the store after trimming; validating it here would reject padded but
    /// valid names.
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    pub score: u32,

    #[serde(rename = "totalQuestions")]
    pub total_questions: u32,

    pub percentage: u32,

    #[serde(rename = "averageTime")]
    pub average_time: f64,
}

/// DTO for the leaderboard read: today's ranked entries plus the caller's
/// own entry id (from the `quizUserId` cookie) for highlighting.
#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub entries: Vec<LeaderboardEntry>,
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}
