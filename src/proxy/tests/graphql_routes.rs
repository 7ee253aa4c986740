use axum::{
    body::{Body, Bytes},
    http::{Request, StatusCode},
};
use httpmock::prelude::*;
use serde_json::json;

use super::{app_for, authed, send, unreachable_app, EXPECTED_COOKIE, TOKEN};

const GRAPHQL_METHODS: &str = "POST, OPTIONS";

#[tokio::test]
async fn test_envelope_forwarded_verbatim() {
    let envelope = json!({
        "query": "query userProfile($username: String!) { matchedUser(username: $username) { username } }",
        "variables": { "username": "alice" },
        "operationName": "userProfile"
    });

    let server = MockServer::start_async().await;
    let expected = envelope.clone();
    let mock = server
        .mock_async(move |when, then| {
            when.method(POST)
                .path("/graphql/")
                .header("x-csrftoken", TOKEN)
                .header("cookie", EXPECTED_COOKIE)
                .header("referer", "https://leetcode.com/")
                .json_body(expected);
            then.status(200)
                .json_body(json!({ "data": { "matchedUser": { "username": "alice" } } }));
        })
        .await;

    let res = send(
        app_for(&server.base_url()),
        authed(
            "POST",
            "/api/leetcode-graphql-proxy",
            Body::from(envelope.to_string()),
        ),
    )
    .await;

    mock.assert_async().await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.json(),
        json!({ "data": { "matchedUser": { "username": "alice" } } })
    );
    res.assert_cors(GRAPHQL_METHODS);
}

#[tokio::test]
async fn test_key_order_kept_both_ways() {
    let envelope = r#"{"query":"query q($z: Int, $a: Int) { x }","variables":{"z":1,"a":2}}"#;
    let upstream_body = r#"{"data":{"zeta":1,"alpha":{"y":true,"b":null}}}"#;

    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/graphql/").body(envelope);
            then.status(200).body(upstream_body);
        })
        .await;

    let res = send(
        app_for(&server.base_url()),
        authed("POST", "/api/leetcode-graphql-proxy", Body::from(envelope)),
    )
    .await;

    mock.assert_async().await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.text(), upstream_body);
}

#[tokio::test]
async fn test_large_envelope_forwarded() {
    let envelope = json!({
        "query": "query big { x }",
        "variables": { "blob": "a".repeat(11 * 1024 * 1024) }
    });

    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/graphql/");
            then.status(200).body(r#"{"data":{}}"#);
        })
        .await;

    let res = send(
        app_for(&server.base_url()),
        authed(
            "POST",
            "/api/leetcode-graphql-proxy",
            Body::from(envelope.to_string()),
        ),
    )
    .await;

    mock.assert_async().await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json(), json!({ "data": {} }));
}

#[tokio::test]
async fn test_body_read_failure_is_500() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.path("/graphql/");
            then.status(200).body("{}");
        })
        .await;

    let chunks: Vec<Result<Bytes, std::io::Error>> = vec![
        Ok(Bytes::from_static(b"{\"query\":")),
        Err(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "client went away",
        )),
    ];
    let body = Body::from_stream(futures::stream::iter(chunks));

    let res = send(
        app_for(&server.base_url()),
        authed("POST", "/api/leetcode-graphql-proxy", body),
    )
    .await;

    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    let body = res.json();
    assert_eq!(body["error"], "GraphQL proxy server error");
    assert!(!body["details"].as_str().unwrap().is_empty());
    res.assert_cors(GRAPHQL_METHODS);
    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn test_missing_credentials_checked_before_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.path("/graphql/");
            then.status(200).body("{}");
        })
        .await;

    let res = send(
        app_for(&server.base_url()),
        Request::builder()
            .method("POST")
            .uri("/api/leetcode-graphql-proxy")
            .header("x-csrf-token", TOKEN)
            .body(Body::from("{ not json"))
            .unwrap(),
    )
    .await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.json()["error"], "Missing authentication headers");
    res.assert_cors(GRAPHQL_METHODS);
    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn test_malformed_body_is_500() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.path("/graphql/");
            then.status(200).body("{}");
        })
        .await;

    let res = send(
        app_for(&server.base_url()),
        authed(
            "POST",
            "/api/leetcode-graphql-proxy",
            Body::from("{ not json"),
        ),
    )
    .await;

    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    let body = res.json();
    assert_eq!(body["error"], "GraphQL proxy server error");
    assert!(!body["details"].as_str().unwrap().is_empty());
    res.assert_cors(GRAPHQL_METHODS);
    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn test_upstream_error_relayed() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/graphql/");
            then.status(400).body(r#"{"errors":[{"message":"bad query"}]}"#);
        })
        .await;

    let res = send(
        app_for(&server.base_url()),
        authed(
            "POST",
            "/api/leetcode-graphql-proxy",
            Body::from(r#"{"query":"{ broken"}"#),
        ),
    )
    .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    let body = res.json();
    assert_eq!(body["error"], "LeetCode GraphQL API error: 400 Bad Request");
    assert_eq!(body["details"], r#"{"errors":[{"message":"bad query"}]}"#);
    res.assert_cors(GRAPHQL_METHODS);
}

#[tokio::test]
async fn test_unreachable_upstream_is_500() {
    let res = send(
        unreachable_app(),
        authed(
            "POST",
            "/api/leetcode-graphql-proxy",
            Body::from(r#"{"query":"{ a }"}"#),
        ),
    )
    .await;

    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.json()["error"], "GraphQL proxy server error");
    res.assert_cors(GRAPHQL_METHODS);
}

#[tokio::test]
async fn test_preflight_ignores_credentials() {
    for with_credentials in [false, true] {
        let mut builder = Request::builder()
            .method("OPTIONS")
            .uri("/api/leetcode-graphql-proxy");
        if with_credentials {
            builder = builder.header("x-csrf-token", TOKEN);
        }

        let res = send(unreachable_app(), builder.body(Body::empty()).unwrap()).await;

        assert_eq!(res.status, StatusCode::OK);
        assert!(res.body.is_empty());
        res.assert_cors(GRAPHQL_METHODS);
    }
}
