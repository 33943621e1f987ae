//! HTTP layer
//!
//! A thin wrapper over `reqwest` that owns the API base URL, the bearer
//! token and the default headers, and maps response statuses onto the
//! crate's error taxonomy. One call is one round trip: there is no retry,
//! backoff or rate limiting here — errors surface immediately.

mod client;

pub use client::{HttpClient, HttpClientConfig, RequestConfig, DEFAULT_TIMEOUT};

#[cfg(test)]
mod tests;
