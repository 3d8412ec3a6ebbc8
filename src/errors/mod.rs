use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use thiserror::Error;

/// Recoverable failures surfaced to API and CLI callers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("weights must be finite, non-negative and sum above zero (consistency {consistency}, form {form})")]
    InvalidWeights { consistency: f64, form: f64 },

    #[error("{0}")]
    InvalidRequest(String),

    #[error("team {0} has no players")]
    EmptyRoster(String),

    #[error("overall strengths of {team_a} and {team_b} do not give a win probability")]
    DegenerateStrength { team_a: String, team_b: String },

    #[error("sheet for team {0} not found")]
    MissingSheet(String),

    #[error("source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("malformed upstream response: {0}")]
    MalformedResponse(String),
}

pub type AppResult<T> = Result<T, AppError>;

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    details: String,
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::InvalidWeights { .. } => "invalid_weights",
            AppError::InvalidRequest(_) => "invalid_request",
            AppError::EmptyRoster(_) => "empty_roster",
            AppError::DegenerateStrength { .. } => "degenerate_strength",
            AppError::MissingSheet(_) => "missing_sheet",
            AppError::SourceUnavailable(_) => "source_unavailable",
            AppError::MalformedResponse(_) => "malformed_response",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidWeights { .. }
            | AppError::InvalidRequest(_)
            | AppError::EmptyRoster(_)
            | AppError::DegenerateStrength { .. } => StatusCode::BAD_REQUEST,
            AppError::MissingSheet(_) => StatusCode::NOT_FOUND,
            AppError::SourceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Wrap a lower-level failure reading `source` as `SourceUnavailable`
    pub fn unavailable<E: std::fmt::Display>(source: &str, err: E) -> Self {
        AppError::SourceUnavailable(format!("{}: {}", source, err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        log::warn!("Request failed ({}): {}", self.kind(), self);
        let body = ErrorBody {
            error: self.kind(),
            details: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(
            AppError::InvalidWeights { consistency: 0.0, form: 0.0 }.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::MissingSheet("XYZ".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::SourceUnavailable("down".into()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::MalformedResponse("no score".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn messages_name_the_offending_input() {
        assert_eq!(AppError::MissingSheet("XYZ".into()).to_string(), "sheet for team XYZ not found");
        assert_eq!(AppError::EmptyRoster("MI".into()).to_string(), "team MI has no players");

        let err = AppError::unavailable("ipl-teams.xlsx", "No such file");
        assert_eq!(err.kind(), "source_unavailable");
        assert!(err.to_string().contains("ipl-teams.xlsx: No such file"));
    }
}
