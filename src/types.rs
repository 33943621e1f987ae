//! Common types used throughout the client
//!
//! Shared type aliases and small wire enums for search parameters.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// An annotation record as returned by the service.
///
/// Records are opaque to the client: no schema is owned or validated
/// beyond passing them through. See [`crate::record`] for accessors over
/// the well-known fields.
pub type Record = serde_json::Value;

// ============================================================================
// Sort Order
// ============================================================================

/// Sort order for search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Order {
    /// Ascending order (oldest first for date fields)
    #[default]
    Asc,
    /// Descending order
    Desc,
}

impl Order {
    /// Wire representation of the order value
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

// ============================================================================
// Sort Field
// ============================================================================

/// Field to sort search results by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Creation timestamp
    #[default]
    Created,
    /// Last-update timestamp
    Updated,
    /// Annotation id
    Id,
    /// Group id
    Group,
    /// User account
    User,
}

impl SortField {
    /// Wire representation of the sort field
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Id => "id",
            Self::Group => "group",
            Self::User => "user",
        }
    }
}
