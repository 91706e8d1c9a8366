// src/store.rs
//
// The in-memory core: today's question set and the ranked leaderboard.
// Both structures are process-wide, single-instance state owned by
// `AppState` and reset to empty on boot; there is no persistence.

use uuid::Uuid;

use crate::{
    error::AppError,
    models::{
        leaderboard::{LeaderboardEntry, SubmitScoreRequest},
        question::QuizQuestion,
    },
};

/// Holds the active question set and the day it was fetched.
#[derive(Debug, Default)]
pub struct QuestionCache {
    questions: Vec<QuizQuestion>,
    last_fetch_date: String,
}

impl QuestionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the stored set is missing or was fetched on a different day.
    pub fn needs_refresh(&self, today: &str) -> bool {
        self.last_fetch_date != today || self.questions.is_empty()
    }

    /// Replaces the stored set wholesale and stamps the fetch date.
    /// Rejects an empty set, leaving the current state untouched.
    pub fn set_daily(
        &mut self,
        questions: Vec<QuizQuestion>,
        today: &str,
    ) -> Result<(), AppError> {
        if questions.is_empty() {
            return Err(AppError::BadRequest(
                "Question set must not be empty".to_string(),
            ));
        }
        self.questions = questions;
        self.last_fetch_date = today.to_string();
        Ok(())
    }

    /// The currently stored set; empty if never set.
    pub fn daily(&self) -> &[QuizQuestion] {
        &self.questions
    }
}

/// Ordered collection of score entries, insert + re-rank on every write.
///
/// Entries for past days are retained (no expiry) but reads are always
/// filtered to today.
#[derive(Debug, Default)]
pub struct LeaderboardStore {
    entries: Vec<LeaderboardEntry>,
}

impl LeaderboardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the submission, appends a new entry stamped with a fresh
    /// opaque id and today's date, then re-sorts the whole store in place.
    ///
    /// Rank order: `percentage` descending, ties broken by `average_time`
    /// ascending (faster wins). `sort_by` is stable, so fully equal keys
    /// keep insertion order.
    pub fn add_entry(
        &mut self,
        req: &SubmitScoreRequest,
        today: &str,
    ) -> Result<LeaderboardEntry, AppError> {
        let name = req.name.trim();
        if name.is_empty() || name.chars().count() > 20 {
            return Err(AppError::BadRequest(
                "Name must be 1-20 characters".to_string(),
            ));
        }
        if req.score > req.total_questions {
            return Err(AppError::BadRequest(
                "Score cannot exceed total questions".to_string(),
            ));
        }

        let entry = LeaderboardEntry {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            score: req.score,
            total_questions: req.total_questions,
            percentage: req.percentage,
            average_time: req.average_time,
            date: today.to_string(),
        };

        self.entries.push(entry.clone());
        self.entries.sort_by(|a, b| {
            b.percentage
                .cmp(&a.percentage)
                .then(a.average_time.total_cmp(&b.average_time))
        });

        Ok(entry)
    }

    /// Today's entries in the store's current sorted order. Empty store or
    /// no entries for today yields an empty vec, never an error.
    pub fn daily_entries(&self, today: &str) -> Vec<LeaderboardEntry> {
        self.entries
            .iter()
            .filter(|e| e.date == today)
            .cloned()
            .collect()
    }
}
