//! Tests for the search module

use super::query::expand_user_acct;
use super::*;
use crate::types::{Order, SortField};
use pretty_assertions::assert_eq;
use serde_json::json;

fn params_for(query: &SearchQuery) -> Vec<(String, String)> {
    query.filter_params()
}

fn values<'a>(params: &'a [(String, String)], key: &str) -> Vec<&'a str> {
    params
        .iter()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .collect()
}

// ============================================================================
// SearchQuery Tests
// ============================================================================

#[test]
fn test_empty_query_emits_only_order() {
    let params = params_for(&SearchQuery::new());
    assert_eq!(params, vec![("order".to_string(), "asc".to_string())]);
}

#[test]
fn test_unset_filters_are_omitted() {
    let params = params_for(&SearchQuery::new().uri("https://example.com"));
    assert!(values(&params, "user").is_empty());
    assert!(values(&params, "text").is_empty());
    assert!(values(&params, "group").is_empty());
    assert!(values(&params, "sort").is_empty());
    // No filter is ever serialized as an empty string
    assert!(params.iter().all(|(_, v)| !v.is_empty()));
}

#[test]
fn test_single_and_list_tags_merge_in_order() {
    let query = SearchQuery::new()
        .tag("first")
        .tags(["second", "third"]);
    let params = params_for(&query);

    assert_eq!(values(&params, "tag"), vec!["first", "second", "third"]);
    assert!(values(&params, "tags").is_empty());
}

#[test]
fn test_list_tags_without_single_tag() {
    let params = params_for(&SearchQuery::new().tags(["a", "b"]));
    assert_eq!(values(&params, "tag"), vec!["a", "b"]);
}

#[test]
fn test_bare_username_expands_to_acct() {
    let params = params_for(&SearchQuery::new().user("judell"));
    assert_eq!(values(&params, "user"), vec!["acct:judell@hypothes.is"]);
}

#[test]
fn test_username_with_custom_authority() {
    let params = params_for(&SearchQuery::new().user("judell").authority("example.org"));
    assert_eq!(values(&params, "user"), vec!["acct:judell@example.org"]);
}

#[test]
fn test_full_acct_passes_through() {
    let params = params_for(&SearchQuery::new().user("acct:judell@example.org"));
    assert_eq!(values(&params, "user"), vec!["acct:judell@example.org"]);
}

#[test]
fn test_expand_user_acct() {
    assert_eq!(
        expand_user_acct("joe", "hypothes.is"),
        "acct:joe@hypothes.is"
    );
    assert_eq!(expand_user_acct("acct:joe@x.org", "ignored"), "acct:joe@x.org");
}

#[test]
fn test_sort_and_order_emission() {
    let query = SearchQuery::new().sort(SortField::Updated).order(Order::Desc);
    let params = params_for(&query);
    assert_eq!(values(&params, "sort"), vec!["updated"]);
    assert_eq!(values(&params, "order"), vec!["desc"]);
}

#[test]
fn test_url_is_alias_for_uri() {
    let params = params_for(&SearchQuery::new().url("https://example.com/a"));
    assert_eq!(values(&params, "uri"), vec!["https://example.com/a"]);
}

#[test]
fn test_extra_params_appended() {
    let params = params_for(&SearchQuery::new().param("references", "abc").param("x", "y"));
    assert_eq!(values(&params, "x"), vec!["y"]);
}

#[test]
fn test_limit_clamped_to_service_ceiling() {
    assert_eq!(SearchQuery::new().effective_limit(), MAX_PAGE_SIZE);
    assert_eq!(SearchQuery::new().limit(50).effective_limit(), 50);
    assert_eq!(SearchQuery::new().limit(5000).effective_limit(), MAX_PAGE_SIZE);
}

// ============================================================================
// PageCursor Tests
// ============================================================================

#[test]
fn test_initial_cursor_defaults_to_offset_zero() {
    assert_eq!(SearchQuery::new().initial_cursor(), PageCursor::Offset(0));
    assert_eq!(
        SearchQuery::new().offset(150).initial_cursor(),
        PageCursor::Offset(150)
    );
}

#[test]
fn test_search_after_selects_cursor_mode() {
    let cursor = SearchQuery::new()
        .offset(150)
        .search_after("2023-01-01T00:00:00+00:00abc")
        .initial_cursor();
    // Cursor mode wins; the offset is not emitted at all
    assert_eq!(
        cursor,
        PageCursor::SearchAfter("2023-01-01T00:00:00+00:00abc".to_string())
    );
    assert_eq!(cursor.param().0, "search_after");
}

#[test]
fn test_offset_cursor_advances_by_page_size() {
    let mut cursor = PageCursor::Offset(0);
    assert_eq!(cursor.param(), ("offset", "0".to_string()));

    cursor.advance(50, &[json!({"id": "a"})]);
    assert_eq!(cursor.param(), ("offset", "50".to_string()));

    cursor.advance(50, &[json!({"id": "b"})]);
    assert_eq!(cursor.param(), ("offset", "100".to_string()));
}

#[test]
fn test_search_after_cursor_rebuilt_from_last_record() {
    let mut cursor = PageCursor::SearchAfter(String::new());
    let rows = vec![
        json!({"id": "first", "created": "2023-01-01T00:00:00+00:00"}),
        json!({"id": "last", "created": "2023-06-15T12:30:00+00:00"}),
    ];
    cursor.advance(200, &rows);
    assert_eq!(
        cursor,
        PageCursor::SearchAfter("2023-06-15T12:30:00+00:00last".to_string())
    );
}

#[test]
fn test_search_after_cursor_missing_fields_contribute_nothing() {
    let mut cursor = PageCursor::SearchAfter("stale".to_string());
    cursor.advance(200, &[json!({"text": "no id or created"})]);
    assert_eq!(cursor, PageCursor::SearchAfter(String::new()));
}

// ============================================================================
// SearchPage Tests
// ============================================================================

#[test]
fn test_search_page_decodes_rows_and_total() {
    let page: SearchPage =
        serde_json::from_value(json!({"rows": [{"id": "a"}], "total": 42})).unwrap();
    assert_eq!(page.rows.len(), 1);
    assert_eq!(page.total, Some(42));
}

#[test]
fn test_search_page_defaults_when_fields_absent() {
    let page: SearchPage = serde_json::from_value(json!({})).unwrap();
    assert!(page.rows.is_empty());
    assert_eq!(page.total, None);
}
