// Common tools shared by handlers, middleware and the upstream client
pub mod credentials;
pub mod endpoint;
pub mod error;

pub use credentials::Credentials;
pub use endpoint::Endpoint;
pub use error::ProxyError;
