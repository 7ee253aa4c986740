/// Which upstream API a request is relayed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// REST `/api/submissions/`
    Submissions,
    /// `/graphql/`
    GraphQl,
}

impl Endpoint {
    /// Prefix for upstream error messages
    pub fn upstream_label(self) -> &'static str {
        match self {
            Endpoint::Submissions => "LeetCode API",
            Endpoint::GraphQl => "LeetCode GraphQL API",
        }
    }

    /// `error` field of internal failures
    pub fn internal_error_message(self) -> &'static str {
        match self {
            Endpoint::Submissions => "Proxy server error",
            Endpoint::GraphQl => "GraphQL proxy server error",
        }
    }

    /// `Access-Control-Allow-Methods` for routes relaying to this endpoint
    pub fn allow_methods(self) -> &'static str {
        match self {
            Endpoint::Submissions => "GET, OPTIONS",
            Endpoint::GraphQl => "POST, OPTIONS",
        }
    }
}
