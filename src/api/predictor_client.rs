use log::{info, warn};
use serde_json::Value;

use crate::api::models::{ScorePredictionRequest, ScorePredictionResponse};
use crate::api::parsers;
use crate::config::settings::UpstreamSettings;
use crate::errors::{AppError, AppResult};
use crate::http::JsonClient;

const SOURCE: &str = "score predictor";

/// Client for the external first-innings score model
#[derive(Clone)]
pub struct ScorePredictorClient {
    client: JsonClient,
    url: String,
}

impl ScorePredictorClient {
    pub fn new(settings: &UpstreamSettings) -> anyhow::Result<Self> {
        let client = JsonClient::new(settings.user_agent, settings.timeout_secs)?;
        Ok(Self {
            client,
            url: settings.predictor_url.clone(),
        })
    }

    /// Forward a validated innings state and parse the predicted total
    pub async fn predict(
        &self,
        request: &ScorePredictionRequest,
    ) -> AppResult<ScorePredictionResponse> {
        info!(
            "Requesting score prediction for {} vs {} at {}",
            request.batting_team, request.bowling_team, request.venue
        );

        let response = self
            .client
            .post_json(&self.url, request)
            .await
            .map_err(|e| AppError::unavailable(SOURCE, format!("{:#}", e)))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Score predictor returned status {}", status);
            return Err(AppError::unavailable(SOURCE, format!("status {}", status)));
        }

        let data: Value = response
            .json()
            .await
            .map_err(|e| AppError::MalformedResponse(format!("{}: {}", SOURCE, e)))?;

        parsers::parse_score_prediction(&data, request)
    }
}
