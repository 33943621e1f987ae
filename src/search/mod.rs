//! Paginated annotation search
//!
//! Supports: offset pagination, `search_after` cursor pagination
//!
//! # Overview
//!
//! [`SearchQuery`] builds the filter set for the `/search` endpoint;
//! [`SearchStream`] walks the result pages lazily, one GET per page,
//! yielding annotation records until the service reports no more rows or
//! the repeat-page guard trips. The two pagination modes are mutually
//! exclusive for the lifetime of a query: supplying a `search_after`
//! cursor disables offset advancement entirely.

mod query;
mod stream;
mod types;

pub use query::SearchQuery;
pub(crate) use query::expand_user_acct;
pub use stream::SearchStream;
pub use types::{PageCursor, SearchPage};

/// The service's documented ceiling on results per page; also the default
/// page size for the paginating stream.
pub const MAX_PAGE_SIZE: u32 = 200;

/// Default page size for the raw, non-paginating search variant.
pub const DEFAULT_RAW_LIMIT: u32 = 20;

#[cfg(test)]
mod tests;
