// Credential header middleware
use axum::{
    extract::Request,
    http::Method,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::proxy::common::{Credentials, ProxyError};

/// Reject requests without both credential headers before any upstream call.
///
/// Preflight requests pass through untouched. Accepted credentials are
/// stored as a request extension for the handlers.
pub async fn credentials_middleware(mut request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return next.run(request).await;
    }

    match Credentials::from_headers(request.headers()) {
        Some(credentials) => {
            request.extensions_mut().insert(credentials);
            next.run(request).await
        }
        None => {
            tracing::warn!(
                "Rejected {} {}: missing authentication headers",
                request.method(),
                request.uri().path()
            );
            ProxyError::MissingCredentials.into_response()
        }
    }
}
