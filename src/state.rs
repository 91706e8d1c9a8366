// src/state.rs

use std::sync::Arc;

use axum::extract::FromRef;
use tokio::sync::RwLock;

use crate::{
    config::Config,
    store::{LeaderboardStore, QuestionCache},
};

/// Shared application state, constructed once at startup and injected into
/// every handler. Both stores are in-memory only and reset on restart.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub http: reqwest::Client,
    pub questions: Arc<RwLock<QuestionCache>>,
    pub leaderboard: Arc<RwLock<LeaderboardStore>>,
}

impl AppState {
    pub fn new(config: Config, http: reqwest::Client) -> Self {
        Self {
            config,
            http,
            questions: Arc::new(RwLock::new(QuestionCache::new())),
            leaderboard: Arc::new(RwLock::new(LeaderboardStore::new())),
        }
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
