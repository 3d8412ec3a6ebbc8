use axum::{
    extract::{Path, State},
    response::Json,
};
use std::sync::Arc;

use super::AppState;
use crate::api::models::HealthResponse;
use crate::domain::TeamRoster;
use crate::errors::AppResult;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn get_teams(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<TeamRoster>>> {
    let rosters = state.rosters.rosters().await?;
    Ok(Json(rosters.as_ref().clone()))
}

pub async fn get_team(
    State(state): State<Arc<AppState>>,
    Path(team_id): Path<String>,
) -> AppResult<Json<TeamRoster>> {
    let roster = state.rosters.roster(&team_id).await?;
    Ok(Json(roster))
}
