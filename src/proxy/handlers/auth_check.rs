// GET /api/leetcode-auth-check
use axum::{extract::State, http::StatusCode, Extension, Json};
use serde_json::{json, Value};

use crate::models::SubmissionsPage;
use crate::proxy::common::{Credentials, Endpoint, ProxyError};
use crate::proxy::server::AppState;
use crate::proxy::upstream::read_json;

use super::submissions::{DEFAULT_LIMIT, DEFAULT_OFFSET};

const AUTH_FAILED_MESSAGE: &str =
    "Authentication failed. Please check your CSRF token and session cookie.";

/// Check the credentials with a first-page submissions fetch
pub async fn handle_auth_check(
    State(state): State<AppState>,
    Extension(credentials): Extension<Credentials>,
) -> Json<Value> {
    match fetch_first_page(&state, &credentials).await {
        Ok(data) => {
            let page: SubmissionsPage = serde_json::from_value(data).unwrap_or_default();
            Json(json!({
                "success": true,
                "submissionsCount": page.submissions_count,
                "hasNext": page.has_next,
            }))
        }
        Err(e) => {
            tracing::warn!("Authentication check failed: {}", e);
            Json(json!({
                "success": false,
                "error": failure_message(&e),
            }))
        }
    }
}

async fn fetch_first_page(
    state: &AppState,
    credentials: &Credentials,
) -> Result<Value, ProxyError> {
    let response = state
        .upstream
        .fetch_submissions(credentials, DEFAULT_OFFSET, DEFAULT_LIMIT)
        .await?;
    read_json(Endpoint::Submissions, response).await
}

fn failure_message(err: &ProxyError) -> String {
    match err {
        ProxyError::Upstream { status, .. }
            if *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN =>
        {
            AUTH_FAILED_MESSAGE.to_string()
        }
        other => other.to_string(),
    }
}
