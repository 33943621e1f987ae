//! Accessors over opaque annotation records
//!
//! The service owns the record schema; the client passes records through
//! as JSON. These helpers pull out the well-known fields without
//! asserting anything about the rest of the shape — a missing or oddly
//! typed field reads as `None`, never an error.

use crate::types::Record;
use chrono::{DateTime, FixedOffset};

/// The record's id
pub fn id(record: &Record) -> Option<&str> {
    record.get("id").and_then(Record::as_str)
}

/// The record's creation timestamp, parsed
pub fn created(record: &Record) -> Option<DateTime<FixedOffset>> {
    parse_timestamp(record, "created")
}

/// The record's last-update timestamp, parsed
pub fn updated(record: &Record) -> Option<DateTime<FixedOffset>> {
    parse_timestamp(record, "updated")
}

fn parse_timestamp(record: &Record, field: &str) -> Option<DateTime<FixedOffset>> {
    record
        .get(field)
        .and_then(Record::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
}

/// The annotating user's bare username, extracted from the
/// `acct:username@authority` identifier
pub fn username(record: &Record) -> Option<&str> {
    let acct = record.get("user").and_then(Record::as_str)?;
    let rest = acct.strip_prefix("acct:").unwrap_or(acct);
    Some(rest.split('@').next().unwrap_or(rest))
}

/// The record's URI
pub fn uri(record: &Record) -> Option<&str> {
    record.get("uri").and_then(Record::as_str)
}

/// The annotation body text
pub fn text(record: &Record) -> Option<&str> {
    record.get("text").and_then(Record::as_str)
}

/// The record's tags
pub fn tags(record: &Record) -> Vec<&str> {
    record
        .get("tags")
        .and_then(Record::as_array)
        .map(|tags| tags.iter().filter_map(Record::as_str).collect())
        .unwrap_or_default()
}

/// The exact quoted passage the annotation anchors to, if any.
///
/// Walks `target[].selector[]` looking for a `TextQuoteSelector`.
pub fn quote(record: &Record) -> Option<&str> {
    let targets = record.get("target")?.as_array()?;
    for target in targets {
        let Some(selectors) = target.get("selector").and_then(Record::as_array) else {
            continue;
        };
        for selector in selectors {
            if selector.get("type").and_then(Record::as_str) == Some("TextQuoteSelector") {
                return selector.get("exact").and_then(Record::as_str);
            }
        }
    }
    None
}
