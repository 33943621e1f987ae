//! Group endpoints: listing, management, membership

use super::Client;
use crate::error::{Error, Result};
use crate::http::RequestConfig;
use crate::types::{JsonValue, Record};
use serde_json::json;

impl Client {
    /// List groups visible to the current user
    pub async fn get_groups(
        &self,
        authority: Option<&str>,
        document_uri: Option<&str>,
        expand: &[&str],
    ) -> Result<Vec<Record>> {
        let config = group_listing_config(authority, document_uri, expand);
        let body = self.http().get(&self.http().url("groups"), config).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Create a new private group
    pub async fn create_group(
        &self,
        name: &str,
        description: Option<&str>,
        groupid: Option<&str>,
    ) -> Result<JsonValue> {
        let mut payload = json!({ "name": name });
        if let Some(description) = description {
            payload["description"] = json!(description);
        }
        if let Some(groupid) = groupid {
            payload["groupid"] = json!(groupid);
        }
        self.http()
            .post(
                &self.http().url("groups"),
                RequestConfig::new().json(payload),
            )
            .await
    }

    /// Get a group by its pubid
    pub async fn get_group(&self, group_id: &str, expand: &[&str]) -> Result<JsonValue> {
        let url = self.http().endpoint(&["groups", group_id])?;
        let mut config = RequestConfig::new();
        for field in expand {
            config = config.query("expand", *field);
        }
        self.http().get(&url, config).await
    }

    /// Update a group's name and/or description. At least one field must
    /// be provided.
    pub async fn update_group(
        &self,
        group_id: &str,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<JsonValue> {
        if name.is_none() && description.is_none() {
            return Err(Error::invalid_input(
                "at least one of 'name' or 'description' must be provided",
            ));
        }
        let mut payload = json!({});
        if let Some(name) = name {
            payload["name"] = json!(name);
        }
        if let Some(description) = description {
            payload["description"] = json!(description);
        }
        let url = self.http().endpoint(&["groups", group_id])?;
        self.http()
            .patch(&url, RequestConfig::new().json(payload))
            .await
    }

    /// Get the annotations in a group directly (without a search).
    ///
    /// The response envelope differs from search: annotations live under
    /// `data` and the total under `meta.page.total`. Returned verbatim.
    pub async fn get_group_annotations(
        &self,
        group_id: &str,
        limit: u32,
        offset: u64,
    ) -> Result<JsonValue> {
        let url = self.http().endpoint(&["groups", group_id, "annotations"])?;
        let config = RequestConfig::new()
            .query("limit", limit.to_string())
            .query("offset", offset.to_string());
        self.http().get(&url, config).await
    }

    /// List the members of a group
    pub async fn get_group_members(&self, group_id: &str) -> Result<Vec<Record>> {
        let url = self.http().endpoint(&["groups", group_id, "members"])?;
        let body = self.http().get(&url, RequestConfig::new()).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Add a user to a group, optionally with roles
    pub async fn add_group_member(
        &self,
        group_id: &str,
        userid: &str,
        roles: &[&str],
    ) -> Result<JsonValue> {
        let url = self
            .http()
            .endpoint(&["groups", group_id, "members", userid])?;
        let payload = if roles.is_empty() {
            json!({})
        } else {
            json!({ "roles": roles })
        };
        self.http()
            .post(&url, RequestConfig::new().json(payload))
            .await
    }

    /// Get one member's membership record
    pub async fn get_group_member(&self, group_id: &str, userid: &str) -> Result<JsonValue> {
        let url = self
            .http()
            .endpoint(&["groups", group_id, "members", userid])?;
        self.http().get(&url, RequestConfig::new()).await
    }

    /// Update a member's roles in a group
    pub async fn update_group_member(
        &self,
        group_id: &str,
        userid: &str,
        roles: &[&str],
    ) -> Result<JsonValue> {
        let url = self
            .http()
            .endpoint(&["groups", group_id, "members", userid])?;
        self.http()
            .patch(&url, RequestConfig::new().json(json!({ "roles": roles })))
            .await
    }

    /// Remove a user from a group
    pub async fn remove_group_member(&self, group_id: &str, userid: &str) -> Result<JsonValue> {
        let url = self
            .http()
            .endpoint(&["groups", group_id, "members", userid])?;
        self.http().delete(&url, RequestConfig::new()).await
    }

    /// Leave a group (remove the current user from membership)
    pub async fn leave_group(&self, group_id: &str) -> Result<JsonValue> {
        let url = self.http().endpoint(&["groups", group_id, "members", "me"])?;
        self.http().delete(&url, RequestConfig::new()).await
    }
}

/// Shared query construction for the group listing endpoints
pub(crate) fn group_listing_config(
    authority: Option<&str>,
    document_uri: Option<&str>,
    expand: &[&str],
) -> RequestConfig {
    let mut config = RequestConfig::new();
    if let Some(authority) = authority {
        config = config.query("authority", authority);
    }
    if let Some(document_uri) = document_uri {
        config = config.query("document_uri", document_uri);
    }
    for field in expand {
        config = config.query("expand", *field);
    }
    config
}
