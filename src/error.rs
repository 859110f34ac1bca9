use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde_json::json;

use crate::validation::ValidationError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{}", first_message(.0))]
    Validation(Vec<ValidationError>),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Vec<ValidationError>> for Error {
    fn from(errors: Vec<ValidationError>) -> Self {
        Error::Validation(errors)
    }
}

fn first_message(errors: &[ValidationError]) -> String {
    errors
        .first()
        .map(|e| e.message.clone())
        .unwrap_or_else(|| "invalid input".into())
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            Error::Validation(_) | Error::Json(_) => StatusCode::BAD_REQUEST,
            Error::Io(_) | Error::Toml(_) | Error::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &self {
            Error::Validation(errors) => json!({
                "error": self.to_string(),
                "details": errors.iter().map(|e| e.message.as_str()).collect::<Vec<_>>(),
            }),
            _ => json!({ "error": self.to_string() }),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }
        (status, Json(body)).into_response()
    }
}
