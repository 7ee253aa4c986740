// Caller-supplied upstream credentials
use axum::http::HeaderMap;

pub const CSRF_TOKEN_HEADER: &str = "x-csrf-token";
pub const SESSION_COOKIE_HEADER: &str = "x-session-cookie";

/// Anti-forgery token and session cookie for one request. Never stored.
#[derive(Clone)]
pub struct Credentials {
    pub csrf_token: String,
    pub session_cookie: String,
}

impl Credentials {
    /// Both headers must be present and non-empty
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let read = |name: &str| {
            headers
                .get(name)
                .and_then(|h| h.to_str().ok())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        Some(Self {
            csrf_token: read(CSRF_TOKEN_HEADER)?,
            session_cookie: read(SESSION_COOKIE_HEADER)?,
        })
    }

    /// `Cookie` header value expected by the upstream
    pub fn cookie_header(&self) -> String {
        format!("csrftoken={}; {}", self.csrf_token, self.session_cookie)
    }
}

// Secrets stay out of logs
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("csrf_token", &"<redacted>")
            .field("session_cookie", &"<redacted>")
            .finish()
    }
}
