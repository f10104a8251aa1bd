use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

/// Error types for the analyzer service.
/// The payoff core itself is total and never produces one of these;
/// they come from request decoding, validation, config and startup.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    #[error("{0}")]
    BadRequest(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for AnalyzerError {
    fn from(e: serde_json::Error) -> Self {
        AnalyzerError::BadRequest(e.to_string())
    }
}

impl From<std::io::Error> for AnalyzerError {
    fn from(e: std::io::Error) -> Self {
        AnalyzerError::Io(e.to_string())
    }
}

impl IntoResponse for AnalyzerError {
    fn into_response(self) -> Response {
        let status = match self {
            AnalyzerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AnalyzerError::Config(_) | AnalyzerError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

pub type AnalyzerResult<T> = Result<T, AnalyzerError>;
