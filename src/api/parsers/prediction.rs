use serde_json::Value;

use crate::api::models::{ScorePredictionRequest, ScorePredictionResponse};
use crate::errors::{AppError, AppResult};

/// Read `predicted_score` out of a predictor reply.
///
/// Only the score is required; team, venue and innings fall back to the
/// request when the upstream leaves them out.
pub fn parse_score_prediction(
    data: &Value,
    request: &ScorePredictionRequest,
) -> AppResult<ScorePredictionResponse> {
    let object = data
        .as_object()
        .ok_or_else(|| AppError::MalformedResponse("expected a JSON object".to_string()))?;

    let predicted_score = object
        .get("predicted_score")
        .and_then(score_value)
        .ok_or_else(|| AppError::MalformedResponse("missing numeric predicted_score".to_string()))?;

    let text_or = |key: &str, fallback: &str| {
        object
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or(fallback)
            .to_string()
    };

    let innings = object
        .get("innings")
        .and_then(Value::as_u64)
        .and_then(|v| u8::try_from(v).ok())
        .unwrap_or(request.innings);

    Ok(ScorePredictionResponse {
        predicted_score,
        batting_team: text_or("batting_team", &request.batting_team),
        bowling_team: text_or("bowling_team", &request.bowling_team),
        venue: text_or("venue", &request.venue),
        innings,
    })
}

// Some model servers serialise numpy floats as strings
fn score_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
    .filter(|score| score.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request() -> ScorePredictionRequest {
        ScorePredictionRequest {
            players: Vec::new(),
            venue: "Wankhede Stadium, Mumbai".into(),
            batting_team: "MI".into(),
            bowling_team: "CSK".into(),
            innings: 1,
            current_score: 0,
            balls_left: 120,
            wickets_left: 10,
            current_run_rate: 0.0,
            last_five: 0.0,
        }
    }

    #[test]
    fn parses_full_reply() {
        let data = json!({
            "predicted_score": 187.4,
            "batting_team": "MI",
            "bowling_team": "CSK",
            "venue": "Wankhede Stadium, Mumbai",
            "innings": 1
        });
        let parsed = parse_score_prediction(&data, &request()).unwrap();
        assert_eq!(parsed.predicted_score, 187.4);
        assert_eq!(parsed.batting_team, "MI");
        assert_eq!(parsed.innings, 1);
    }

    #[test]
    fn echoes_request_fields_missing_from_reply() {
        let data = json!({ "predicted_score": "172" });
        let parsed = parse_score_prediction(&data, &request()).unwrap();
        assert_eq!(parsed.predicted_score, 172.0);
        assert_eq!(parsed.bowling_team, "CSK");
        assert_eq!(parsed.venue, "Wankhede Stadium, Mumbai");
    }

    #[test]
    fn missing_score_is_malformed() {
        for data in [json!({ "score": 170 }), json!([170]), json!({ "predicted_score": null })] {
            let err = parse_score_prediction(&data, &request()).unwrap_err();
            assert!(matches!(err, AppError::MalformedResponse(_)), "{data}");
        }
    }
}
