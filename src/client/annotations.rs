//! Annotation endpoints: create, read, update, delete, moderation

use super::Client;
use crate::error::{Error, Result};
use crate::http::RequestConfig;
use crate::types::{JsonObject, JsonValue};
use serde_json::json;

/// Group id for the public group
pub const WORLD_GROUP: &str = "__world__";

impl Client {
    /// Create a new annotation.
    ///
    /// The payload must include `uri`. Unless the payload provides them,
    /// `user` is set to this client's account, `group` defaults to the
    /// public group, `permissions` default to group-readable and
    /// owner-writable, and `document` defaults to an empty object.
    pub async fn create_annotation(&self, payload: JsonValue) -> Result<JsonValue> {
        let payload = build_create_payload(payload, &self.user_acct(None), WORLD_GROUP)?;
        self.http()
            .post(
                &self.http().url("annotations"),
                RequestConfig::new().json(payload),
            )
            .await
    }

    /// Retrieve a single annotation by id
    pub async fn get_annotation(&self, annotation_id: &str) -> Result<JsonValue> {
        let url = self.http().endpoint(&["annotations", annotation_id])?;
        self.http().get(&url, RequestConfig::new()).await
    }

    /// Retrieve a public annotation without sending credentials
    pub async fn get_annotation_unauthenticated(&self, annotation_id: &str) -> Result<JsonValue> {
        let url = self.http().endpoint(&["annotations", annotation_id])?;
        self.http()
            .get(&url, RequestConfig::new().unauthenticated())
            .await
    }

    /// Update fields of an existing annotation
    pub async fn update_annotation(
        &self,
        annotation_id: &str,
        payload: JsonValue,
    ) -> Result<JsonValue> {
        let url = self.http().endpoint(&["annotations", annotation_id])?;
        self.http()
            .patch(&url, RequestConfig::new().json(payload))
            .await
    }

    /// Delete an annotation
    pub async fn delete_annotation(&self, annotation_id: &str) -> Result<JsonValue> {
        let url = self.http().endpoint(&["annotations", annotation_id])?;
        self.http().delete(&url, RequestConfig::new()).await
    }

    /// Flag an annotation for moderator review
    pub async fn flag_annotation(&self, annotation_id: &str) -> Result<JsonValue> {
        let url = self
            .http()
            .endpoint(&["annotations", annotation_id, "flag"])?;
        self.http().put(&url, RequestConfig::new()).await
    }

    /// Hide an annotation (moderator action)
    pub async fn hide_annotation(&self, annotation_id: &str) -> Result<JsonValue> {
        let url = self
            .http()
            .endpoint(&["annotations", annotation_id, "hide"])?;
        self.http().put(&url, RequestConfig::new()).await
    }

    /// Unhide an annotation (moderator action)
    pub async fn unhide_annotation(&self, annotation_id: &str) -> Result<JsonValue> {
        let url = self
            .http()
            .endpoint(&["annotations", annotation_id, "hide"])?;
        self.http().delete(&url, RequestConfig::new()).await
    }
}

/// Fill in the creation payload defaults.
///
/// Requires `uri`. Sets `user` to the caller's account; leaves an
/// existing `group` alone, else uses `default_group`; derives default
/// permissions from the effective group unless the caller supplied their
/// own; ensures `document` exists.
pub(crate) fn build_create_payload(
    payload: JsonValue,
    user_acct: &str,
    default_group: &str,
) -> Result<JsonValue> {
    let mut out: JsonObject = match payload {
        JsonValue::Object(map) => map,
        _ => return Err(Error::invalid_input("annotation payload must be an object")),
    };

    if !out.contains_key("uri") {
        return Err(Error::invalid_input("annotation payload must include 'uri'"));
    }

    let caller_set_permissions = out.contains_key("permissions");

    out.insert("user".to_string(), json!(user_acct));
    if !out.contains_key("group") {
        out.insert("group".to_string(), json!(default_group));
    }

    if !caller_set_permissions {
        let group = out
            .get("group")
            .and_then(JsonValue::as_str)
            .unwrap_or(default_group);
        let read = format!("group:{group}");
        out.insert(
            "permissions".to_string(),
            json!({
                "read": [read],
                "update": [user_acct],
                "delete": [user_acct],
                "admin": [user_acct],
            }),
        );
    }

    out.entry("document".to_string()).or_insert(json!({}));

    Ok(JsonValue::Object(out))
}
