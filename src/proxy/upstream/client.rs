// Upstream client for the judge platform's REST and GraphQL APIs

use reqwest::{header, Client, Response};
use serde_json::Value;

use crate::proxy::common::{Credentials, Endpoint, ProxyError};
use crate::proxy::config::ProxyConfig;
use crate::utils::http::create_client_with_proxy;

// The upstream rejects requests without a same-site referer and a browser user agent
const REFERER: &str = "https://leetcode.com/";
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

const SUBMISSIONS_PATH: &str = "/api/submissions/";
const GRAPHQL_PATH: &str = "/graphql/";

pub struct UpstreamClient {
    http_client: Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(config: &ProxyConfig) -> Self {
        let http_client = create_client_with_proxy(
            config.request_timeout,
            Some(config.upstream_proxy.clone()),
        );

        Self {
            http_client,
            base_url: config.upstream_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build upstream URL
    fn build_url(base_url: &str, path: &str, query_string: Option<&str>) -> String {
        if let Some(qs) = query_string {
            format!("{}{}?{}", base_url, path, qs)
        } else {
            format!("{}{}", base_url, path)
        }
    }

    /// Header set shared by both upstream APIs
    fn build_headers(credentials: &Credentials) -> Result<header::HeaderMap, String> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(header::REFERER, header::HeaderValue::from_static(REFERER));
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(BROWSER_USER_AGENT),
        );
        headers.insert(
            "x-csrftoken",
            header::HeaderValue::from_str(&credentials.csrf_token).map_err(|e| e.to_string())?,
        );
        headers.insert(
            header::COOKIE,
            header::HeaderValue::from_str(&credentials.cookie_header())
                .map_err(|e| e.to_string())?,
        );
        Ok(headers)
    }

    /// GET one page of the caller's submissions
    ///
    /// `offset` and `limit` are interpolated as given.
    pub async fn fetch_submissions(
        &self,
        credentials: &Credentials,
        offset: &str,
        limit: &str,
    ) -> Result<Response, ProxyError> {
        let endpoint = Endpoint::Submissions;
        let query = format!("offset={}&limit={}", offset, limit);
        let url = Self::build_url(&self.base_url, SUBMISSIONS_PATH, Some(&query));
        let headers =
            Self::build_headers(credentials).map_err(|e| ProxyError::internal(endpoint, e))?;

        tracing::debug!("Forwarding submissions request: {}", url);

        self.http_client
            .get(&url)
            .headers(headers)
            .send()
            .await
            .map_err(|e| ProxyError::internal(endpoint, e))
    }

    /// POST a GraphQL envelope verbatim
    pub async fn post_graphql(
        &self,
        credentials: &Credentials,
        body: &Value,
    ) -> Result<Response, ProxyError> {
        let endpoint = Endpoint::GraphQl;
        let url = Self::build_url(&self.base_url, GRAPHQL_PATH, None);
        let headers =
            Self::build_headers(credentials).map_err(|e| ProxyError::internal(endpoint, e))?;

        tracing::debug!("Forwarding GraphQL request: {}", url);

        self.http_client
            .post(&url)
            .headers(headers)
            .json(body)
            .send()
            .await
            .map_err(|e| ProxyError::internal(endpoint, e))
    }
}

/// Translate an upstream response into its JSON body or a relayable error
pub async fn read_json(endpoint: Endpoint, response: Response) -> Result<Value, ProxyError> {
    let status = response.status();

    if !status.is_success() {
        let details = response
            .text()
            .await
            .map_err(|e| ProxyError::internal(endpoint, e))?;
        tracing::error!(
            "{} error: {} {}",
            endpoint.upstream_label(),
            status.as_u16(),
            details
        );
        return Err(ProxyError::Upstream {
            endpoint,
            status,
            details,
        });
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| ProxyError::internal(endpoint, e))
}
