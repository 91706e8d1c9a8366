// src/models/question.rs

use serde::{Deserialize, Serialize};

/// A single trivia question as served to the client.
///
/// Built once per day by the fetch-or-fallback path and immutable afterwards;
/// the whole set is replaced wholesale when a new day begins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuizQuestion {
    /// Question text. HTML entities from the external source are decoded
    /// before storage.
    pub question: String,

    /// Ordered answer choices. No fixed count; the correct answer is always
    /// one of them, exactly once.
    pub options: Vec<String>,

    /// Must equal exactly one element of `options`.
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,

    /// Optional rationale shown after answering (fallback bank only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}
