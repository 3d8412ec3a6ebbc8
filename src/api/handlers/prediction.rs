use axum::{extract::State, response::Json};
use std::sync::Arc;

use super::AppState;
use crate::api::models::{PredictMatchRequest, ScorePredictionRequest, ScorePredictionResponse};
use crate::domain::{PredictionResult, TeamRoster};
use crate::errors::AppResult;

pub async fn predict_match(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PredictMatchRequest>,
) -> AppResult<Json<PredictionResult>> {
    let team_a = chosen_players(
        state.rosters.roster(&request.team_a).await?,
        request.team_a_players.as_deref(),
    );
    let team_b = chosen_players(
        state.rosters.roster(&request.team_b).await?,
        request.team_b_players.as_deref(),
    );

    let result = state.analysis.predict_match(&team_a, &team_b, request.seed)?;
    Ok(Json(result))
}

pub async fn predict_score(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ScorePredictionRequest>,
) -> AppResult<Json<ScorePredictionResponse>> {
    request.validate()?;
    let prediction = state.predictor.predict(&request).await?;
    Ok(Json(prediction))
}

fn chosen_players(roster: TeamRoster, names: Option<&[String]>) -> TeamRoster {
    match names {
        Some(names) if !names.is_empty() => roster.restricted_to(names),
        _ => roster,
    }
}
