// src/handlers/questions.rs

use axum::{Json, extract::State, response::IntoResponse};

use crate::{
    error::AppError,
    state::AppState,
    trivia::{fallback_questions, fetch_questions},
    utils::date,
};

/// Serves today's question set, refreshing it first if a new day has begun
/// (or nothing was stored yet).
///
/// Refresh failures are absorbed: any transport or API failure downgrades to
/// the bundled fallback bank and is never user-visible.
///
/// The lock is not held across the network call, so two simultaneous first
/// loads on a new day may both fetch and store; the second write wins
/// silently. Last-write-wins is the intended behavior here.
pub async fn get_daily_questions(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let today = date::today();

    let needs_refresh = state.questions.read().await.needs_refresh(&today);
    if needs_refresh {
        let questions = match fetch_questions(&state.http, &state.config).await {
            Ok(questions) if !questions.is_empty() => {
                tracing::info!("Fetched {} questions for {}", questions.len(), today);
                questions
            }
            Ok(_) => {
                tracing::warn!("Trivia source returned no questions, using fallback bank");
                fallback_questions()
            }
            Err(e) => {
                tracing::warn!("Trivia source unavailable ({}), using fallback bank", e);
                fallback_questions()
            }
        };

        state.questions.write().await.set_daily(questions, &today)?;
    }

    let cache = state.questions.read().await;
    Ok(Json(cache.daily().to_vec()))
}
