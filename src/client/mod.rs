//! API client
//!
//! [`Client`] binds an API key and username to the service base URL and
//! exposes the REST surface: annotation CRUD and moderation, search,
//! groups, profile and user administration. Every wrapper is one request,
//! one response, mapped onto the crate error taxonomy.

mod annotations;
mod groups;
mod profile;
mod users;

pub use annotations::WORLD_GROUP;


use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::search::{SearchQuery, SearchStream, DEFAULT_RAW_LIMIT};
use crate::types::JsonValue;
use std::time::Duration;

/// Base URL for the public Hypothesis API
pub const API_URL: &str = "https://hypothes.is/api";

/// Base URL for the Hypothesis web app
pub const APP_URL: &str = "https://hypothes.is/app";

/// Authority domain for first-party accounts
pub const DEFAULT_AUTHORITY: &str = "hypothes.is";

/// Configuration for [`Client`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Hypothesis username (used to derive the `acct:` identity for
    /// created annotations; may be empty for read-only use)
    pub username: String,
    /// API key (bearer token)
    pub api_key: String,
    /// Base URL for the API
    pub api_url: String,
    /// Authority domain for the account
    pub authority: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// User agent override, if any
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Config for the public service with default settings
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            api_key: api_key.into(),
            api_url: API_URL.to_string(),
            authority: DEFAULT_AUTHORITY.to_string(),
            timeout: crate::http::DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Point the client at a different API deployment
    #[must_use]
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Set the account authority domain
    #[must_use]
    pub fn authority(mut self, authority: impl Into<String>) -> Self {
        self.authority = authority.into();
        self
    }

    /// Set the per-request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }
}

/// Client for the Hypothesis web annotation API.
///
/// ```no_run
/// use hypothesis_api::{Client, SearchQuery};
///
/// # async fn run() -> hypothesis_api::Result<()> {
/// let client = Client::new("judell", "6879-deadbeef")?;
/// let mut results = client.search(SearchQuery::new().tag("climate"));
/// while let Some(annotation) = results.next().await {
///     println!("{}", annotation?["text"]);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    http: HttpClient,
    username: String,
    authority: String,
}

impl Client {
    /// Create a client for the public service
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(username, api_key))
    }

    /// Create a client from a full configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut http_config =
            HttpClientConfig::new(config.api_url, config.api_key).timeout(config.timeout);
        if let Some(agent) = config.user_agent {
            http_config = http_config.user_agent(agent);
        }
        Ok(Self {
            http: HttpClient::new(http_config)?,
            username: config.username,
            authority: config.authority,
        })
    }

    /// The underlying HTTP client
    pub(crate) fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Format a username as an `acct:` identifier, defaulting to this
    /// client's own account
    pub fn user_acct(&self, user: Option<&str>) -> String {
        let user = user.unwrap_or(&self.username);
        crate::search::expand_user_acct(user, &self.authority)
    }

    // ========================================================================
    // Root endpoints
    // ========================================================================

    /// Get the API root with hypermedia links and version information.
    /// No authentication is sent.
    pub async fn root(&self) -> Result<JsonValue> {
        self.http
            .get(&self.http.url(""), RequestConfig::new().unauthenticated())
            .await
    }

    /// Get URL templates for pages in the web application. No
    /// authentication is sent.
    pub async fn links(&self) -> Result<JsonValue> {
        self.http
            .get(&self.http.url("links"), RequestConfig::new().unauthenticated())
            .await
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Search for annotations, paginating transparently.
    ///
    /// No request is issued until the stream is first polled. See
    /// [`SearchStream`] for termination and error semantics.
    pub fn search(&self, query: SearchQuery) -> SearchStream {
        SearchStream::new(self.http.clone(), &query)
    }

    /// Perform a single search request and return the full response
    /// verbatim, including `rows` and `total`, without pagination.
    ///
    /// Unlike [`search`](Client::search), the page size defaults to 20.
    pub async fn search_raw(&self, query: &SearchQuery) -> Result<JsonValue> {
        let (cursor_key, cursor_value) = query.initial_cursor().param();
        let config = RequestConfig::new()
            .queries(query.filter_params())
            .query("limit", query.limit_or(DEFAULT_RAW_LIMIT).to_string())
            .query(cursor_key, cursor_value);
        self.http.get(&self.http.url("search"), config).await
    }
}
