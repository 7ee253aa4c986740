// Permissive cross-origin headers, stamped on every response of a route
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

pub const ALLOW_HEADERS: &str = "Content-Type, x-csrf-token, x-session-cookie";

/// Apply `Access-Control-Allow-*` headers to every route already on `router`
pub fn with_cors<S>(router: Router<S>, allow_methods: &'static str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .route_layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .route_layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(allow_methods),
        ))
        .route_layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        ))
}

/// Preflight: 200 with an empty body, the CORS layer adds the headers
pub async fn preflight() -> Response {
    StatusCode::OK.into_response()
}
