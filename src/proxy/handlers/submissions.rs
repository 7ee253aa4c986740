// Submission Proxy: GET /api/leetcode-proxy
use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::proxy::common::{Credentials, Endpoint, ProxyError};
use crate::proxy::server::AppState;
use crate::proxy::upstream::read_json;

pub const DEFAULT_OFFSET: &str = "0";
pub const DEFAULT_LIMIT: &str = "20";

#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub offset: Option<String>,
    pub limit: Option<String>,
}

impl PaginationParams {
    fn offset(&self) -> &str {
        non_empty_or(self.offset.as_deref(), DEFAULT_OFFSET)
    }

    fn limit(&self) -> &str {
        non_empty_or(self.limit.as_deref(), DEFAULT_LIMIT)
    }
}

fn non_empty_or<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default,
    }
}

/// Relay one page of the caller's submissions, body untouched
pub async fn handle_list_submissions(
    State(state): State<AppState>,
    Extension(credentials): Extension<Credentials>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Value>, ProxyError> {
    let response = state
        .upstream
        .fetch_submissions(&credentials, params.offset(), params.limit())
        .await
        .inspect_err(|e| tracing::error!("Proxy error: {}", e))?;

    let data = read_json(Endpoint::Submissions, response).await?;
    Ok(Json(data))
}
