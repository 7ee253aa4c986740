// Request-level errors, rendered as `{error, details}` JSON
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

use super::endpoint::Endpoint;

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Missing authentication headers")]
    MissingCredentials,

    #[error(
        "{} error: {} {}",
        .endpoint.upstream_label(),
        .status.as_u16(),
        .status.canonical_reason().unwrap_or("")
    )]
    Upstream {
        endpoint: Endpoint,
        status: StatusCode,
        details: String,
    },

    #[error("{}: {}", .endpoint.internal_error_message(), .message)]
    Internal { endpoint: Endpoint, message: String },

    #[error("{0}")]
    InvalidRequest(String),
}

impl ProxyError {
    pub fn internal(endpoint: Endpoint, err: impl std::fmt::Display) -> Self {
        ProxyError::Internal {
            endpoint,
            message: err.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::MissingCredentials => StatusCode::UNAUTHORIZED,
            ProxyError::Upstream { status, .. } => *status,
            ProxyError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();

        let body = match &self {
            ProxyError::Upstream { details, .. } => json!({
                "error": self.to_string(),
                "details": details,
            }),
            ProxyError::Internal { endpoint, message } => json!({
                "error": endpoint.internal_error_message(),
                "details": message,
            }),
            ProxyError::MissingCredentials | ProxyError::InvalidRequest(_) => json!({
                "error": self.to_string(),
            }),
        };

        (status, Json(body)).into_response()
    }
}
