//! Search envelope and cursor types

use crate::types::Record;
use serde::Deserialize;

/// One decoded page of search results.
///
/// The service signals end-of-results by returning an empty or absent
/// `rows` field; `total` is the match count across all pages when the
/// service chooses to report it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchPage {
    /// Records on this page, in service order
    #[serde(default)]
    pub rows: Vec<Record>,
    /// Total matches across all pages, if reported
    #[serde(default)]
    pub total: Option<u64>,
}

/// Position in a paginated search.
///
/// The two modes are mutually exclusive for a query's lifetime: a query
/// either advances a numeric offset by the page size, or recomputes an
/// opaque `search_after` token from the last record of each page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCursor {
    /// Numeric offset pagination (`offset=` parameter)
    Offset(u64),
    /// Cursor pagination (`search_after=` parameter)
    SearchAfter(String),
}

impl PageCursor {
    /// The query parameter this cursor contributes to the next request
    pub fn param(&self) -> (&'static str, String) {
        match self {
            Self::Offset(offset) => ("offset", offset.to_string()),
            Self::SearchAfter(token) => ("search_after", token.clone()),
        }
    }

    /// Advance past a fetched page.
    ///
    /// Offset mode adds exactly the page size. Cursor mode rebuilds the
    /// token from the last record's `created` timestamp and `id`,
    /// concatenated; fields the record lacks contribute nothing. Whether
    /// the service accepts that encoding is the caller's concern — the
    /// client does not validate it.
    pub fn advance(&mut self, page_size: u32, rows: &[Record]) {
        match self {
            Self::Offset(offset) => *offset += u64::from(page_size),
            Self::SearchAfter(token) => {
                let last = rows.last();
                let created = last
                    .and_then(|row| row.get("created"))
                    .and_then(Record::as_str)
                    .unwrap_or_default();
                let id = last
                    .and_then(|row| row.get("id"))
                    .and_then(Record::as_str)
                    .unwrap_or_default();
                *token = format!("{created}{id}");
            }
        }
    }
}
