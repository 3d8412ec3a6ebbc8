use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    admin::admin_refresh,
    prediction::{predict_match, predict_score},
    squad::{generate_squad, rank_squad},
    stats::player_stats,
    teams::{get_team, get_teams, health},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/ipl-teams", get(get_teams))
        .route("/api/teams/:id", get(get_team))
        .route("/api/generate-squad", post(generate_squad))
        .route("/api/squad", post(rank_squad))
        .route("/api/predict-match", post(predict_match))
        .route("/api/predict-score", post(predict_score))
        .route("/api/player-stats", post(player_stats))
        .route("/api/admin/refresh", post(admin_refresh))
        .with_state(state)
}
