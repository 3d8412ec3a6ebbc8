use axum::{extract::State, response::Json};
use std::sync::Arc;

use super::AppState;
use crate::api::models::{GenerateSquadRequest, GenerateSquadResponse, RankSquadRequest, RankedRoster};
use crate::errors::AppResult;

pub async fn generate_squad(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateSquadRequest>,
) -> AppResult<Json<GenerateSquadResponse>> {
    request.validate()?;
    let roster = state.rosters.roster(&request.team_name).await?;
    let response = state.analysis.generate_squad(
        &roster,
        request.consistency_weight,
        request.form_weight,
    )?;
    Ok(Json(response))
}

pub async fn rank_squad(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RankSquadRequest>,
) -> AppResult<Json<RankedRoster>> {
    let roster = state.rosters.roster(&request.team_name).await?;
    let ranked = state.analysis.rank_roster(
        &roster,
        request.consistency_weight,
        request.form_weight,
    )?;
    Ok(Json(ranked))
}
