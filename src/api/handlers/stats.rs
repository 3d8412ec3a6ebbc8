use axum::{extract::State, response::Json};
use std::sync::Arc;

use super::AppState;
use crate::api::models::{PlayerStatsRequest, PlayerStatsResponse};
use crate::errors::{AppError, AppResult};
use crate::sheets::stats::{filter_by_name, load_stats, parse_player_type, Season};

pub async fn player_stats(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PlayerStatsRequest>,
) -> AppResult<Json<PlayerStatsResponse>> {
    let role = parse_player_type(&request.player_type)?;
    let season = Season::parse(&request.season)?;

    let dir = state.config.data.stats_dir.clone();
    let home = state.config.data.home_nationality.clone();
    let rows = tokio::task::spawn_blocking(move || load_stats(&dir, role, season, &home))
        .await
        .map_err(|e| AppError::unavailable("stats loader", e))??;

    Ok(Json(PlayerStatsResponse {
        stats: filter_by_name(rows, request.query.as_deref()),
    }))
}
