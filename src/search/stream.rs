//! The paginated search stream

use super::query::SearchQuery;
use super::types::{PageCursor, SearchPage};
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use crate::types::Record;
use futures::Stream;
use std::collections::VecDeque;
use tracing::{debug, warn};

/// A lazy, finite sequence of annotation records matching a search.
///
/// Issues one GET per page, strictly in sequence, and yields records as
/// the caller asks for them. No request is made until the first
/// [`next`](SearchStream::next) call, nothing is prefetched, and pages
/// are never cached. A stream is not restartable: once exhausted (or
/// failed) it stays done, and a fresh search constructs a fresh stream.
///
/// Termination:
/// - a page with no rows ends the stream cleanly;
/// - a page whose first record id equals the previous page's first record
///   id ends the stream before yielding the repeat page (guards against a
///   server that keeps serving the same page for a stale offset — a
///   heuristic, so a record that genuinely leads two different pages
///   stops iteration early);
/// - any non-success status yields the typed error once, then the stream
///   is done. Records already yielded are not retracted.
///
/// Abandoning the stream mid-way needs no cleanup: every page fetch is a
/// complete, stateless HTTP request.
pub struct SearchStream {
    http: HttpClient,
    url: String,
    filters: Vec<(String, String)>,
    limit: u32,
    cursor: PageCursor,
    buffer: VecDeque<Record>,
    last_first_id: Option<String>,
    pages_fetched: u64,
    done: bool,
}

impl SearchStream {
    pub(crate) fn new(http: HttpClient, query: &SearchQuery) -> Self {
        let url = http.url("search");
        Self {
            http,
            url,
            filters: query.filter_params(),
            limit: query.effective_limit(),
            cursor: query.initial_cursor(),
            buffer: VecDeque::new(),
            last_first_id: None,
            pages_fetched: 0,
            done: false,
        }
    }

    /// Yield the next record, fetching the next page when the current one
    /// is drained. Returns `None` once the stream is exhausted; a fetch
    /// failure is yielded once as `Some(Err(_))` and ends the stream.
    pub async fn next(&mut self) -> Option<Result<Record>> {
        if let Some(record) = self.buffer.pop_front() {
            return Some(Ok(record));
        }
        if self.done {
            return None;
        }
        match self.fetch_page().await {
            Ok(true) => self.buffer.pop_front().map(Ok),
            Ok(false) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }

    /// Drain the stream into a vector, stopping at the first error
    pub async fn collect_all(mut self) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        while let Some(item) = self.next().await {
            records.push(item?);
        }
        Ok(records)
    }

    /// Adapt into a [`futures::Stream`] of records
    pub fn into_stream(self) -> impl Stream<Item = Result<Record>> {
        futures::stream::unfold(self, |mut inner| async move {
            inner.next().await.map(|item| (item, inner))
        })
    }

    /// Number of page requests issued so far
    pub fn pages_fetched(&self) -> u64 {
        self.pages_fetched
    }

    /// Fetch one page and buffer its rows. Returns false when the stream
    /// should end: the page was empty, or the repeat-page guard tripped.
    async fn fetch_page(&mut self) -> Result<bool> {
        let (cursor_key, cursor_value) = self.cursor.param();
        let config = RequestConfig::new()
            .queries(self.filters.iter().cloned())
            .query("limit", self.limit.to_string())
            .query(cursor_key, cursor_value);

        let body = self.http.get(&self.url, config).await?;
        let page: SearchPage = serde_json::from_value(body)?;
        self.pages_fetched += 1;

        if page.rows.is_empty() {
            debug!("search page {} empty, stream done", self.pages_fetched);
            return Ok(false);
        }

        let first_id = page.rows[0]
            .get("id")
            .and_then(Record::as_str)
            .map(str::to_string);
        if first_id.is_some() && first_id == self.last_first_id {
            warn!(
                "search page {} repeats the previous first record, stopping",
                self.pages_fetched
            );
            return Ok(false);
        }
        self.last_first_id = first_id;

        debug!(
            "search page {}: {} rows",
            self.pages_fetched,
            page.rows.len()
        );
        self.cursor.advance(self.limit, &page.rows);
        self.buffer.extend(page.rows);
        Ok(true)
    }
}

impl std::fmt::Debug for SearchStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchStream")
            .field("url", &self.url)
            .field("limit", &self.limit)
            .field("cursor", &self.cursor)
            .field("buffered", &self.buffer.len())
            .field("pages_fetched", &self.pages_fetched)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}
