//! Profile endpoints

use super::groups::group_listing_config;
use super::Client;
use crate::error::Result;
use crate::http::RequestConfig;
use crate::types::{JsonValue, Record};
use serde_json::json;

impl Client {
    /// Get the current user's profile
    pub async fn get_profile(&self) -> Result<JsonValue> {
        self.http()
            .get(&self.http().url("profile"), RequestConfig::new())
            .await
    }

    /// List groups the current user belongs to
    pub async fn get_profile_groups(
        &self,
        authority: Option<&str>,
        document_uri: Option<&str>,
        expand: &[&str],
    ) -> Result<Vec<Record>> {
        let config = group_listing_config(authority, document_uri, expand);
        let body = self
            .http()
            .get(&self.http().url("profile/groups"), config)
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Update the current user's profile preferences
    pub async fn update_profile(&self, preferences: JsonValue) -> Result<JsonValue> {
        self.http()
            .patch(
                &self.http().url("profile"),
                RequestConfig::new().json(json!({ "preferences": preferences })),
            )
            .await
    }
}
