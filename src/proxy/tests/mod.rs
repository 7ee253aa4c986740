mod graphql_routes;

use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use crate::proxy::{build_router, AppState, ProxyConfig};

pub const TOKEN: &str = "tok123";
pub const SESSION: &str = "LEETCODE_SESSION=abc";
pub const EXPECTED_COOKIE: &str = "csrftoken=tok123; LEETCODE_SESSION=abc";

/// Router whose upstream is `base_url`
pub fn app_for(base_url: &str) -> Router {
    let config = ProxyConfig {
        upstream_base_url: base_url.to_string(),
        ..ProxyConfig::default()
    };
    build_router(AppState::new(&config))
}

/// Nothing listens on port 1
pub fn unreachable_app() -> Router {
    app_for("http://127.0.0.1:1")
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.body).unwrap()
    }

    pub fn header(&self, name: &str) -> &str {
        self.headers
            .get(name)
            .unwrap_or_else(|| panic!("missing header {}", name))
            .to_str()
            .unwrap()
    }

    pub fn assert_cors(&self, methods: &str) {
        assert_eq!(self.header("access-control-allow-origin"), "*");
        assert_eq!(self.header("access-control-allow-methods"), methods);
        assert_eq!(
            self.header("access-control-allow-headers"),
            "Content-Type, x-csrf-token, x-session-cookie"
        );
    }
}

pub async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();
    TestResponse {
        status,
        headers,
        body,
    }
}

/// Request carrying both credential headers
pub fn authed(method: &str, uri: &str, body: Body) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("x-csrf-token", TOKEN)
        .header("x-session-cookie", SESSION)
        .header("content-type", "application/json")
        .body(body)
        .unwrap()
}

#[tokio::test]
async fn test_healthz() {
    let res = send(
        unreachable_app(),
        Request::builder()
            .uri("/healthz")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["status"], "ok");
}
