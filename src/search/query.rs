//! Search query builder
//!
//! An explicit builder for the `/search` endpoint's filter set. Unset
//! filters are omitted from the outgoing request entirely — never sent as
//! null or empty string.

use super::types::PageCursor;
use super::MAX_PAGE_SIZE;
use crate::client::DEFAULT_AUTHORITY;
use crate::types::{Order, SortField};

/// Filters for an annotation search.
///
/// ```
/// use hypothesis_api::{Order, SearchQuery, SortField};
///
/// let query = SearchQuery::new()
///     .user("judell")
///     .uri("https://example.com/article")
///     .tag("climate")
///     .tags(["science", "policy"])
///     .sort(SortField::Updated)
///     .order(Order::Desc);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    user: Option<String>,
    authority: Option<String>,
    uri: Option<String>,
    wildcard_uri: Option<String>,
    text: Option<String>,
    any: Option<String>,
    quote: Option<String>,
    references: Option<String>,
    group: Option<String>,
    sort: Option<SortField>,
    order: Order,
    tag: Option<String>,
    tags: Vec<String>,
    limit: Option<u32>,
    offset: u64,
    search_after: Option<String>,
    extra: Vec<(String, String)>,
}

impl SearchQuery {
    /// Create an empty query (matches everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by user. Accepts a bare username, which is expanded to
    /// `acct:<user>@<authority>`, or a full `acct:` identifier, which
    /// passes through unchanged.
    #[must_use]
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Authority domain used when expanding a bare username
    #[must_use]
    pub fn authority(mut self, authority: impl Into<String>) -> Self {
        self.authority = Some(authority.into());
        self
    }

    /// Filter by exact URI
    #[must_use]
    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Alias for [`SearchQuery::uri`]
    #[must_use]
    pub fn url(self, url: impl Into<String>) -> Self {
        self.uri(url)
    }

    /// Filter by URI pattern with `*` wildcards
    #[must_use]
    pub fn wildcard_uri(mut self, pattern: impl Into<String>) -> Self {
        self.wildcard_uri = Some(pattern.into());
        self
    }

    /// Search annotation body text
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Search across multiple fields
    #[must_use]
    pub fn any(mut self, any: impl Into<String>) -> Self {
        self.any = Some(any.into());
        self
    }

    /// Search quoted (highlighted) text
    #[must_use]
    pub fn quote(mut self, quote: impl Into<String>) -> Self {
        self.quote = Some(quote.into());
        self
    }

    /// Filter by parent annotation id (replies)
    #[must_use]
    pub fn references(mut self, references: impl Into<String>) -> Self {
        self.references = Some(references.into());
        self
    }

    /// Filter by group id
    #[must_use]
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Sort field
    #[must_use]
    pub fn sort(mut self, sort: SortField) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Sort order (defaults to ascending)
    #[must_use]
    pub fn order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    /// Filter by a single tag. Combines with [`SearchQuery::tags`]: the
    /// single tag is emitted first, then the list tags in given order,
    /// each as its own repeated `tag=` parameter. The service intersects
    /// repeated tag filters ("all tags must match").
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Filter by multiple tags (all must match)
    #[must_use]
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Results per page, clamped to the service ceiling of 200
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Starting offset. Ignored when a `search_after` cursor is set.
    #[must_use]
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    /// Start cursor-based pagination from this opaque token.
    ///
    /// Selecting a cursor disables offset pagination for this query's
    /// lifetime; the token is recomputed from the last record of each
    /// fetched page.
    #[must_use]
    pub fn search_after(mut self, token: impl Into<String>) -> Self {
        self.search_after = Some(token.into());
        self
    }

    /// Add a free-form query parameter not covered by a builder method
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }

    /// The effective page size, with `default` applied when unset and the
    /// service ceiling enforced either way
    pub(crate) fn limit_or(&self, default: u32) -> u32 {
        self.limit.unwrap_or(default).min(MAX_PAGE_SIZE)
    }

    /// The effective page size for the paginating stream
    pub fn effective_limit(&self) -> u32 {
        self.limit_or(MAX_PAGE_SIZE)
    }

    /// The initial pagination cursor for this query
    pub fn initial_cursor(&self) -> PageCursor {
        match &self.search_after {
            Some(token) => PageCursor::SearchAfter(token.clone()),
            None => PageCursor::Offset(self.offset),
        }
    }

    /// Emit the filter parameters, in a stable order, omitting everything
    /// unset. Pagination parameters (`limit`, `offset`, `search_after`)
    /// are not included; the stream owns those.
    pub(crate) fn filter_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        let mut push = |key: &str, value: Option<&String>| {
            if let Some(value) = value {
                params.push((key.to_string(), value.clone()));
            }
        };

        let user_acct = self.user.as_ref().map(|user| {
            expand_user_acct(user, self.authority.as_deref().unwrap_or(DEFAULT_AUTHORITY))
        });
        push("user", user_acct.as_ref());
        push("uri", self.uri.as_ref());
        push("wildcard_uri", self.wildcard_uri.as_ref());
        push("text", self.text.as_ref());
        push("any", self.any.as_ref());
        push("group", self.group.as_ref());
        push("quote", self.quote.as_ref());
        push("references", self.references.as_ref());

        if let Some(sort) = self.sort {
            params.push(("sort".to_string(), sort.as_str().to_string()));
        }
        params.push(("order".to_string(), self.order.as_str().to_string()));

        // Single tag first, then list tags in given order
        for tag in self.tag.iter().chain(self.tags.iter()) {
            params.push(("tag".to_string(), tag.clone()));
        }

        params.extend(self.extra.iter().cloned());
        params
    }
}

/// Expand a bare username into an `acct:` account identifier; full
/// `acct:` identifiers pass through unchanged.
pub(crate) fn expand_user_acct(user: &str, authority: &str) -> String {
    if user.starts_with("acct:") {
        user.to_string()
    } else {
        format!("acct:{user}@{authority}")
    }
}
