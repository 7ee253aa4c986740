// Middleware module - Axum middleware

pub mod auth;
pub mod cors;
pub mod logging;

pub use auth::credentials_middleware;
pub use cors::{preflight, with_cors};
pub use logging::logging_middleware;
