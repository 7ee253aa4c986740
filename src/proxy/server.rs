use axum::{
    extract::DefaultBodyLimit,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

use crate::error::{AppError, AppResult};
use crate::proxy::common::Endpoint;
use crate::proxy::config::ProxyConfig;
use crate::proxy::upstream::UpstreamClient;

/// Axum application state
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<UpstreamClient>,
}

impl AppState {
    pub fn new(config: &ProxyConfig) -> Self {
        Self {
            upstream: Arc::new(UpstreamClient::new(config)),
        }
    }
}

/// Build the full route table
pub fn build_router(state: AppState) -> Router {
    use crate::proxy::handlers;
    use crate::proxy::middleware::{
        credentials_middleware, logging_middleware, preflight, with_cors,
    };

    // Routes relaying to the REST submissions API (GET)
    let rest_routes = with_cors(
        Router::new()
            .route(
                "/api/leetcode-proxy",
                get(handlers::submissions::handle_list_submissions).options(preflight),
            )
            .route(
                "/api/leetcode-auth-check",
                get(handlers::auth_check::handle_auth_check).options(preflight),
            )
            .route(
                "/api/submission-details",
                get(handlers::submission_details::handle_submission_details).options(preflight),
            )
            .route_layer(axum::middleware::from_fn(credentials_middleware)),
        Endpoint::Submissions.allow_methods(),
    );

    // Routes relaying to the GraphQL API (POST)
    let graphql_routes = with_cors(
        Router::new()
            .route(
                "/api/leetcode-graphql-proxy",
                post(handlers::graphql::handle_graphql).options(preflight),
            )
            .route_layer(axum::middleware::from_fn(credentials_middleware)),
        Endpoint::GraphQl.allow_methods(),
    );

    Router::new()
        .route("/healthz", get(health_check_handler))
        .merge(rest_routes)
        .merge(graphql_routes)
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(logging_middleware))
        .with_state(state)
}

/// Axum server instance
pub struct AxumServer {
    shutdown_tx: Option<oneshot::Sender<()>>,
    local_addr: SocketAddr,
}

impl AxumServer {
    /// Start Axum server
    pub async fn start(config: &ProxyConfig) -> AppResult<(Self, tokio::task::JoinHandle<()>)> {
        let app = build_router(AppState::new(config));

        // Bind address
        let addr = format!("{}:{}", config.get_bind_address(), config.port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| AppError::Server(format!("Failed to bind address {}: {}", addr, e)))?;
        let local_addr = listener.local_addr()?;

        tracing::info!(
            "LeetCode proxy started at http://{} (upstream: {})",
            local_addr,
            config.upstream_base_url
        );

        // Create shutdown channel
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        let server_instance = Self {
            shutdown_tx: Some(shutdown_tx),
            local_addr,
        };

        // Start server in new task
        let handle = tokio::spawn(async move {
            use hyper::server::conn::http1;
            use hyper_util::rt::TokioIo;
            use hyper_util::service::TowerToHyperService;

            loop {
                tokio::select! {
                    res = listener.accept() => {
                        match res {
                            Ok((stream, _)) => {
                                let io = TokioIo::new(stream);
                                let service = TowerToHyperService::new(app.clone());

                                tokio::task::spawn(async move {
                                    if let Err(err) = http1::Builder::new()
                                        .serve_connection(io, service)
                                        .await
                                    {
                                        debug!("Connection handling finished or errored: {:?}", err);
                                    }
                                });
                            }
                            Err(e) => {
                                error!("Failed to accept connection: {:?}", e);
                            }
                        }
                    }
                    _ = &mut shutdown_rx => {
                        tracing::info!("LeetCode proxy stopped listening");
                        break;
                    }
                }
            }
        });

        Ok((server_instance, handle))
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stop server
    pub fn stop(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Health check handler
async fn health_check_handler() -> Response {
    Json(serde_json::json!({
        "status": "ok"
    }))
    .into_response()
}
