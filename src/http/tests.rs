//! Tests for the HTTP layer

use super::*;
use pretty_assertions::assert_eq;

fn client() -> HttpClient {
    HttpClient::new(HttpClientConfig::new("https://hypothes.is/api", "testkey")).unwrap()
}

#[test]
fn test_url_joins_base_and_path() {
    let client = client();
    assert_eq!(client.url("search"), "https://hypothes.is/api/search");
    assert_eq!(client.url("/search"), "https://hypothes.is/api/search");
    assert_eq!(client.url(""), "https://hypothes.is/api");
}

#[test]
fn test_url_with_trailing_slash_base() {
    let client =
        HttpClient::new(HttpClientConfig::new("https://hypothes.is/api/", "testkey")).unwrap();
    assert_eq!(client.url("profile"), "https://hypothes.is/api/profile");
}

#[test]
fn test_endpoint_builds_under_base() {
    let client = client();
    let url = client
        .endpoint(&["groups", "abc123", "members", "acct:user@hypothes.is"])
        .unwrap();
    assert_eq!(
        url,
        "https://hypothes.is/api/groups/abc123/members/acct:user@hypothes.is"
    );
}

#[test]
fn test_endpoint_segment_with_slash_stays_one_segment() {
    let client = client();
    let url = client.endpoint(&["groups", "a/b"]).unwrap();
    assert_eq!(url, "https://hypothes.is/api/groups/a%2Fb");
}

#[test]
fn test_invalid_base_url_rejected() {
    let result = HttpClient::new(HttpClientConfig::new("not a url", "testkey"));
    assert!(matches!(result, Err(crate::Error::InvalidUrl(_))));
}

#[test]
fn test_request_config_defaults_authenticated() {
    let config = RequestConfig::new();
    assert!(config.authenticated);
    assert!(config.query.is_empty());
    assert!(config.body.is_none());

    let config = RequestConfig::new().unauthenticated();
    assert!(!config.authenticated);
}

#[test]
fn test_request_config_preserves_query_order() {
    let config = RequestConfig::new()
        .query("tag", "alpha")
        .query("tag", "beta")
        .query("limit", "200");
    assert_eq!(
        config.query,
        vec![
            ("tag".to_string(), "alpha".to_string()),
            ("tag".to_string(), "beta".to_string()),
            ("limit".to_string(), "200".to_string()),
        ]
    );
}
