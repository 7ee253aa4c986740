// Query Proxy: POST /api/leetcode-graphql-proxy
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Extension, Json,
};
use serde_json::Value;

use crate::proxy::common::{Credentials, Endpoint, ProxyError};
use crate::proxy::server::AppState;
use crate::proxy::upstream::read_json;

/// Forward an arbitrary GraphQL envelope verbatim
///
/// Body read and parse failures are 500s like any other failure, so neither
/// goes through axum's default rejections.
pub async fn handle_graphql(
    State(state): State<AppState>,
    Extension(credentials): Extension<Credentials>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Value>, ProxyError> {
    let endpoint = Endpoint::GraphQl;

    let body = body.map_err(|e| {
        tracing::error!("GraphQL proxy error: failed to read request body: {}", e);
        ProxyError::internal(endpoint, e.body_text())
    })?;

    let envelope: Value = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!("GraphQL proxy error: invalid request body: {}", e);
        ProxyError::internal(endpoint, e)
    })?;

    let response = state
        .upstream
        .post_graphql(&credentials, &envelope)
        .await
        .inspect_err(|e| tracing::error!("GraphQL proxy error: {}", e))?;

    let data = read_json(endpoint, response).await?;
    Ok(Json(data))
}
