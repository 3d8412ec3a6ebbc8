use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use std::sync::Arc;

use super::AppState;

pub async fn admin_refresh(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let expected = format!("Bearer {}", state.config.admin_token);
    let auth_header = headers.get("Authorization").and_then(|h| h.to_str().ok());
    if auth_header != Some(expected.as_str()) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    tokio::spawn(async move {
        log::info!("Admin triggered roster refresh");
        match state.rosters.refresh().await {
            Ok(count) => log::info!("Admin refresh loaded {} teams", count),
            Err(e) => log::error!("Admin refresh failed: {}", e),
        }
    });

    (StatusCode::ACCEPTED, "Refresh triggered").into_response()
}
