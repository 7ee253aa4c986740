// proxy module - LeetCode credential-forwarding proxy

pub mod config;
pub mod server;

pub mod common; // Credentials, endpoints, errors
pub mod handlers; // API endpoint handlers
pub mod mappers; // Upstream payload builders/parsers
pub mod middleware; // Axum middleware
pub mod upstream; // Upstream client

pub use config::ProxyConfig;
pub use server::{build_router, AppState, AxumServer};

#[cfg(test)]
pub mod tests;
