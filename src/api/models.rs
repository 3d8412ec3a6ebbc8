use serde::{Deserialize, Serialize};

use crate::config::is_known_venue;
use crate::domain::{ScoredPlayer, SquadComposition};
use crate::errors::{AppError, AppResult};
use crate::sheets::StatsRow;

fn default_form_weight() -> f64 {
    0.7
}

fn default_consistency_weight() -> f64 {
    0.3
}

fn default_season() -> String {
    "overall".to_string()
}

/// Body of `POST /api/generate-squad`; weights are 0-1 slider values
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateSquadRequest {
    #[serde(default = "default_form_weight")]
    pub form_weight: f64,
    #[serde(default = "default_consistency_weight")]
    pub consistency_weight: f64,
    pub team_name: String,
}

impl GenerateSquadRequest {
    pub fn validate(&self) -> AppResult<()> {
        let in_range = |w: f64| (0.0..=1.0).contains(&w);
        if !in_range(self.form_weight) || !in_range(self.consistency_weight) {
            return Err(AppError::InvalidWeights {
                consistency: self.consistency_weight,
                form: self.form_weight,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSquad {
    pub id: usize,
    /// Sum of player scores, 4 decimals
    pub score: f64,
    pub players: Vec<ScoredPlayer>,
    pub remaining_players: Vec<ScoredPlayer>,
    pub stats: SquadComposition,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateSquadResponse {
    pub squads: Vec<GeneratedSquad>,
}

/// Body of `POST /api/squad`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankSquadRequest {
    pub team_name: String,
    pub form_weight: f64,
    pub consistency_weight: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedRoster {
    pub team_name: String,
    pub players: Vec<ScoredPlayer>,
    pub composition: SquadComposition,
}

/// Body of `POST /api/predict-match`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictMatchRequest {
    pub team_a: String,
    pub team_b: String,
    #[serde(default)]
    pub team_a_players: Option<Vec<String>>,
    #[serde(default)]
    pub team_b_players: Option<Vec<String>>,
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Innings state forwarded to the external score predictor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorePredictionRequest {
    pub players: Vec<String>,
    pub venue: String,
    pub batting_team: String,
    pub bowling_team: String,
    pub innings: u8,
    #[serde(default)]
    pub current_score: u32,
    #[serde(default = "ScorePredictionRequest::full_innings_balls")]
    pub balls_left: u32,
    #[serde(default = "ScorePredictionRequest::all_wickets")]
    pub wickets_left: u32,
    #[serde(default)]
    pub current_run_rate: f64,
    #[serde(default)]
    pub last_five: f64,
}

impl ScorePredictionRequest {
    pub const PLAYING_XI: usize = 11;

    fn full_innings_balls() -> u32 {
        120
    }

    fn all_wickets() -> u32 {
        10
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.players.len() != Self::PLAYING_XI {
            return Err(AppError::InvalidRequest(format!(
                "Exactly {} players required, got {}",
                Self::PLAYING_XI,
                self.players.len()
            )));
        }
        if !matches!(self.innings, 1 | 2) {
            return Err(AppError::InvalidRequest(format!(
                "Innings must be 1 or 2, got {}",
                self.innings
            )));
        }
        if !is_known_venue(&self.venue) {
            return Err(AppError::InvalidRequest(format!("Unknown venue: {}", self.venue)));
        }
        if self.batting_team.trim().eq_ignore_ascii_case(self.bowling_team.trim()) {
            return Err(AppError::InvalidRequest(
                "Batting and bowling team must differ".to_string(),
            ));
        }
        if self.balls_left > Self::full_innings_balls() || self.wickets_left > Self::all_wickets() {
            return Err(AppError::InvalidRequest(format!(
                "Innings state out of range: {} balls, {} wickets left",
                self.balls_left, self.wickets_left
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorePredictionResponse {
    pub predicted_score: f64,
    pub batting_team: String,
    pub bowling_team: String,
    pub venue: String,
    pub innings: u8,
}

/// Body of `POST /api/player-stats`
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerStatsRequest {
    pub player_type: String,
    #[serde(default = "default_season")]
    pub season: String,
    #[serde(default)]
    pub query: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerStatsResponse {
    pub stats: Vec<StatsRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::venues::VENUES;

    fn score_request() -> ScorePredictionRequest {
        ScorePredictionRequest {
            players: (1..=11).map(|i| format!("Player {i}")).collect(),
            venue: VENUES[0].to_string(),
            batting_team: "CSK".into(),
            bowling_team: "MI".into(),
            innings: 1,
            current_score: 0,
            balls_left: 120,
            wickets_left: 10,
            current_run_rate: 0.0,
            last_five: 0.0,
        }
    }

    #[test]
    fn squad_request_uses_slider_defaults() {
        let req: GenerateSquadRequest = serde_json::from_str(r#"{"team_name": "RCB"}"#).unwrap();
        assert_eq!(req.form_weight, 0.7);
        assert_eq!(req.consistency_weight, 0.3);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn squad_weights_outside_unit_range_are_rejected() {
        let req: GenerateSquadRequest =
            serde_json::from_str(r#"{"team_name": "RCB", "form_weight": 70, "consistency_weight": 30}"#).unwrap();
        assert!(matches!(req.validate(), Err(AppError::InvalidWeights { .. })));
    }

    #[test]
    fn valid_score_request_passes() {
        assert!(score_request().validate().is_ok());
    }

    #[test]
    fn score_request_needs_a_full_eleven() {
        let mut req = score_request();
        req.players.pop();
        let err = req.validate().unwrap_err();
        assert!(err.to_string().contains("got 10"));
    }

    #[test]
    fn score_request_checks_innings_and_venue() {
        let mut req = score_request();
        req.innings = 3;
        assert!(req.validate().is_err());

        let mut req = score_request();
        req.venue = "The Oval".into();
        assert!(req.validate().is_err());

        let mut req = score_request();
        req.bowling_team = "csk".into();
        assert!(req.validate().is_err());
    }

    #[test]
    fn pre_match_request_defaults_innings_state() {
        let body = serde_json::json!({
            "players": (1..=11).map(|i| format!("P{i}")).collect::<Vec<_>>(),
            "venue": VENUES[3],
            "batting_team": "KKR",
            "bowling_team": "SRH",
            "innings": 2,
        });
        let req: ScorePredictionRequest = serde_json::from_value(body).unwrap();
        assert_eq!(req.balls_left, 120);
        assert_eq!(req.wickets_left, 10);
        assert!(req.validate().is_ok());
    }
}
