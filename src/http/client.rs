//! HTTP client for the Hypothesis API
//!
//! Handles URL construction, default headers, bearer authentication and
//! response classification. Every request is a single round trip; the
//! per-request timeout is the only transport concern managed here.

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};
use reqwest::{Client, Method, StatusCode};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL for all requests (e.g. `https://hypothes.is/api`)
    pub base_url: String,
    /// Bearer token (Hypothesis API key)
    pub token: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl HttpClientConfig {
    /// Create a config for the given base URL and API key
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("hypothesis-api/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }
}

/// Configuration for a single request
#[derive(Debug, Clone)]
pub struct RequestConfig {
    /// Query parameters as ordered pairs; repeated keys are sent repeated
    pub query: Vec<(String, String)>,
    /// Request body (JSON)
    pub body: Option<JsonValue>,
    /// Whether to send the Authorization header
    pub authenticated: bool,
    /// Override timeout for this request
    pub timeout: Option<Duration>,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            query: Vec::new(),
            body: None,
            authenticated: true,
            timeout: None,
        }
    }
}

impl RequestConfig {
    /// Create a new request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Append query parameters, keeping their order
    #[must_use]
    pub fn queries(mut self, params: impl IntoIterator<Item = (String, String)>) -> Self {
        self.query.extend(params);
        self
    }

    /// Set JSON body
    #[must_use]
    pub fn json(mut self, body: JsonValue) -> Self {
        self.body = Some(body);
        self
    }

    /// Skip the Authorization header for this request
    #[must_use]
    pub fn unauthenticated(mut self) -> Self {
        self.authenticated = false;
        self
    }

    /// Set timeout for this request
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// HTTP client bound to one API base URL and one API key
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client.
    ///
    /// Fails if the base URL does not parse or the underlying client
    /// cannot be constructed.
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        // Validate the base URL up front so endpoint() can't fail later
        // on a malformed base.
        Url::parse(&config.base_url)?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client, config })
    }

    /// The configured base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Build a URL under the base from already-safe path segments
    pub fn url(&self, path: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{}", path.trim_start_matches('/'))
        }
    }

    /// Build a URL under the base, percent-encoding each segment.
    ///
    /// Used for caller-supplied identifiers that may contain reserved
    /// characters (`acct:user@authority` user ids, group pubids).
    pub fn endpoint(&self, segments: &[&str]) -> Result<String> {
        let mut url = Url::parse(&self.config.base_url)?;
        url.path_segments_mut()
            .map_err(|()| Error::invalid_input("API base URL cannot be a base"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url.to_string())
    }

    /// Make a GET request and decode the response
    pub async fn get(&self, url: &str, config: RequestConfig) -> Result<JsonValue> {
        self.request(Method::GET, url, config).await
    }

    /// Make a POST request and decode the response
    pub async fn post(&self, url: &str, config: RequestConfig) -> Result<JsonValue> {
        self.request(Method::POST, url, config).await
    }

    /// Make a PATCH request and decode the response
    pub async fn patch(&self, url: &str, config: RequestConfig) -> Result<JsonValue> {
        self.request(Method::PATCH, url, config).await
    }

    /// Make a PUT request and decode the response
    pub async fn put(&self, url: &str, config: RequestConfig) -> Result<JsonValue> {
        self.request(Method::PUT, url, config).await
    }

    /// Make a DELETE request and decode the response
    pub async fn delete(&self, url: &str, config: RequestConfig) -> Result<JsonValue> {
        self.request(Method::DELETE, url, config).await
    }

    /// Make a request and map the response onto the error taxonomy.
    ///
    /// 200/201 decode the JSON body, 204 decodes to an empty object, and
    /// every non-success status becomes a typed error carrying the status
    /// code and the raw body.
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        config: RequestConfig,
    ) -> Result<JsonValue> {
        let mut req = self
            .client
            .request(method.clone(), url)
            .header("Content-Type", "application/json;charset=UTF-8")
            .header("Accept", "application/json");

        if config.authenticated {
            req = req.bearer_auth(&self.config.token);
        }

        if !config.query.is_empty() {
            req = req.query(&config.query);
        }

        if let Some(ref body) = config.body {
            req = req.json(body);
        }

        if let Some(timeout) = config.timeout {
            req = req.timeout(timeout);
        }

        let response = req.send().await?;
        let status = response.status();
        debug!("{} {} -> {}", method, url, status);

        if status == StatusCode::NO_CONTENT {
            return Ok(JsonValue::Object(JsonObject::new()));
        }

        let body = response.text().await?;
        if status.is_success() {
            Ok(serde_json::from_str(&body)?)
        } else {
            Err(Error::from_status(status.as_u16(), body))
        }
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.config.base_url)
            .field("timeout", &self.config.timeout)
            .field("user_agent", &self.config.user_agent)
            .finish_non_exhaustive()
    }
}
