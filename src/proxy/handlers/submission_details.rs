// GET /api/submission-details?id=<n> | ?url=<submission url>
use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::proxy::common::{Credentials, Endpoint, ProxyError};
use crate::proxy::mappers::submission_details::{
    extract_submission_id, parse_memory_distribution, parse_runtime_distribution,
    submission_details_request,
};
use crate::proxy::server::AppState;
use crate::proxy::upstream::read_json;

#[derive(Debug, Default, Deserialize)]
pub struct SubmissionDetailsParams {
    pub id: Option<String>,
    pub url: Option<String>,
}

impl SubmissionDetailsParams {
    /// `id` wins over `url`
    fn submission_id(&self) -> Option<u64> {
        if let Some(id) = self.id.as_deref().and_then(|s| s.trim().parse().ok()) {
            return Some(id);
        }
        self.url.as_deref().and_then(extract_submission_id)
    }
}

pub async fn handle_submission_details(
    State(state): State<AppState>,
    Extension(credentials): Extension<Credentials>,
    Query(params): Query<SubmissionDetailsParams>,
) -> Result<Json<Value>, ProxyError> {
    let endpoint = Endpoint::GraphQl;

    let submission_id = params.submission_id().ok_or_else(|| {
        ProxyError::InvalidRequest("Missing or invalid submission id".to_string())
    })?;

    let envelope = serde_json::to_value(submission_details_request(submission_id))
        .map_err(|e| ProxyError::internal(endpoint, e))?;

    let response = state
        .upstream
        .post_graphql(&credentials, &envelope)
        .await?;
    let data = read_json(endpoint, response).await?;

    let details = data
        .get("data")
        .and_then(|d| d.get("submissionDetails"))
        .cloned()
        .unwrap_or(Value::Null);
    let errors = data.get("errors").cloned().unwrap_or(Value::Null);

    if !errors.is_null() {
        tracing::warn!(
            "GraphQL errors for submission {}: {}",
            submission_id,
            errors
        );
    }

    let runtime = details
        .get("runtimeDistribution")
        .and_then(Value::as_str)
        .map(parse_runtime_distribution)
        .unwrap_or_default();
    let memory = details
        .get("memoryDistribution")
        .and_then(Value::as_str)
        .map(parse_memory_distribution)
        .unwrap_or_default();

    Ok(Json(json!({
        "details": details,
        "runtimeDistribution": runtime,
        "memoryDistribution": memory,
        "errors": errors,
    })))
}
