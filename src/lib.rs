//! # hypothesis-api
//!
//! A Rust client for the [Hypothesis](https://hypothes.is) web annotation
//! API (v1.0).
//!
//! ## Features
//!
//! - **Paginated Search**: lazy [`SearchStream`] over the `/search`
//!   endpoint, with offset and `search_after` cursor pagination
//! - **Annotations**: create, fetch, update, delete, flag, hide/unhide
//! - **Groups**: listing, management, membership
//! - **Profile & Users**: profile preferences, third-party user admin
//! - **Typed Errors**: authentication, permission, not-found and
//!   catch-all failures, each carrying the status code and raw body
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hypothesis_api::{Client, Result, SearchQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::new("your_username", "your_api_key")?;
//!
//!     // Search with transparent pagination
//!     let mut results = client.search(
//!         SearchQuery::new()
//!             .uri("https://example.com/article")
//!             .tags(["climate", "science"]),
//!     );
//!     while let Some(annotation) = results.next().await {
//!         let annotation = annotation?;
//!         println!("{:?}", hypothesis_api::record::text(&annotation));
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! Authentication is a static bearer token (an API key from your
//! Hypothesis developer settings) applied to every request. Requests are
//! never retried: every failure surfaces immediately as a typed
//! [`Error`].

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// HTTP layer
pub mod http;

/// Paginated annotation search
pub mod search;

/// API client and endpoint wrappers
pub mod client;

/// Accessors over opaque annotation records
pub mod record;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{Client, ClientConfig, API_URL, APP_URL, DEFAULT_AUTHORITY, WORLD_GROUP};
pub use error::{Error, Result};
pub use search::{PageCursor, SearchPage, SearchQuery, SearchStream, MAX_PAGE_SIZE};
pub use types::{JsonObject, JsonValue, Order, Record, SortField};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
