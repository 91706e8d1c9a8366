// src/handlers/leaderboard.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use validator::Validate;

use crate::{
    error::AppError,
    models::leaderboard::{LeaderboardResponse, SubmitScoreRequest},
    state::AppState,
    utils::date,
};

/// Cookie binding a visitor to their own leaderboard row. Deliberately weak
/// correlation, not authentication: it is never validated against the store.
const USER_ID_COOKIE: &str = "quizUserId";

const COOKIE_MAX_AGE_DAYS: i64 = 30;

/// Returns today's ranked entries plus the caller's own entry id (if the
/// cookie is present) so the client can highlight "my" row.
pub async fn get_leaderboard(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let today = date::today();
    let entries = state.leaderboard.read().await.daily_entries(&today);
    let user_id = jar.get(USER_ID_COOKIE).map(|c| c.value().to_string());

    Ok(Json(LeaderboardResponse { entries, user_id }))
}

/// Submits a completed score.
///
/// * Validates the payload (name length, score consistency).
/// * Inserts and re-ranks the entry.
/// * Binds the visitor to the new entry via the `quizUserId` cookie.
///
/// Returns 201 Created with the new entry.
pub async fn submit_score(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<SubmitScoreRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let today = date::today();
    let entry = state
        .leaderboard
        .write()
        .await
        .add_entry(&payload, &today)?;

    tracing::info!(
        "Leaderboard entry added: {} ({}%, {:.1}s avg)",
        entry.name,
        entry.percentage,
        entry.average_time
    );

    let cookie = Cookie::build((USER_ID_COOKIE, entry.id.clone()))
        .path("/")
        .max_age(time::Duration::days(COOKIE_MAX_AGE_DAYS))
        .http_only(true)
        .build();

    Ok((StatusCode::CREATED, jar.add(cookie), Json(entry)))
}
